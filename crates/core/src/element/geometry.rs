//! Visibility, geometry, and computed-style queries.

use serde_json::Value;
use wd_protocol::{ErrorKind, Position, Size, reclassify};
use wd_runtime::{Error, Result};

use super::Element;
use super::queries::expect_bool;
use crate::{normalize, scripts};

impl Element {
	/// Whether the element is displayed.
	///
	/// A positive native answer is re-verified on drivers known to ignore
	/// zero opacity or fully-offscreen placement: a script walks the
	/// ancestor chain and any such ancestor forces `false`.
	pub async fn is_displayed(&self) -> Result<bool> {
		let displayed = expect_bool(self.get("displayed").await?, "displayed")?;
		let capabilities = self.session().capabilities();
		if displayed
			&& (capabilities.broken_displayed_opacity() || capabilities.broken_displayed_offscreen())
		{
			tracing::debug!(target = "wd", id = %self.id(), "re-verifying displayed state via script");
			let value = self
				.session()
				.execute(scripts::IS_EFFECTIVELY_DISPLAYED, vec![self.to_wire()])
				.await?;
			return Ok(value.as_bool().unwrap_or(false));
		}
		Ok(displayed)
	}

	/// Returns the element's position on the page.
	pub async fn position(&self) -> Result<Position> {
		let value = if self.session().capabilities().broken_element_position() {
			tracing::debug!(target = "wd", id = %self.id(), "reading position via script");
			self.session().execute(scripts::POSITION, vec![self.to_wire()]).await?
		} else {
			self.get("location").await?
		};
		decode_geometry(value, "location")
	}

	/// Returns the element's rendered size.
	///
	/// Script-computed on drivers that misreport CSS-transformed sizes;
	/// otherwise native, falling back to the script when the server lacks
	/// the command.
	pub async fn size(&self) -> Result<Size> {
		let capabilities = self.session().capabilities();
		let value = if capabilities.broken_css_transformed_size() {
			tracing::debug!(target = "wd", id = %self.id(), "reading size via script");
			self.session().execute(scripts::SIZE, vec![self.to_wire()]).await?
		} else {
			match self.get("size").await {
				Ok(value) => value,
				Err(error) if error.is_unknown_command() => {
					tracing::warn!(
						target = "wd",
						id = %self.id(),
						error = %error,
						"native size unsupported; computing via script"
					);
					self.session().execute(scripts::SIZE, vec![self.to_wire()]).await?
				}
				Err(error) => return Err(error),
			}
		};
		decode_geometry(value, "size")
	}

	/// Returns a computed style property.
	///
	/// Normalized for cross-driver consistency: `rgb(r, g, b)` substrings
	/// rewrite to `rgba(r, g, b, 1)` and null results become the empty
	/// string.
	pub async fn computed_style(&self, property: &str) -> Result<String> {
		let value = if self.session().capabilities().broken_computed_styles() {
			tracing::debug!(target = "wd", id = %self.id(), property, "reading style via script");
			self.style_via_script(property).await?
		} else {
			match self.get(&format!("css/{property}")).await {
				Ok(value) => value,
				Err(error) if error.is_unknown_command() => {
					tracing::warn!(
						target = "wd",
						id = %self.id(),
						error = %error,
						"native css lookup unsupported; computing via script"
					);
					self.style_via_script(property).await?
				}
				Err(error)
					if error.kind() == Some(ErrorKind::UnknownError)
						&& reclassify::is_style_parse_bug(
							ErrorKind::UnknownError,
							error.server_message().unwrap_or(""),
						) =>
				{
					// The server computed the style but choked serializing it.
					Value::String(String::new())
				}
				Err(error) => return Err(error),
			}
		};

		Ok(match value {
			Value::Null => String::new(),
			Value::String(text) => normalize::color(&text),
			other => normalize::color(&other.to_string()),
		})
	}

	async fn style_via_script(&self, property: &str) -> Result<Value> {
		self.session()
			.execute(
				scripts::COMPUTED_STYLE,
				vec![self.to_wire(), Value::String(property.to_string())],
			)
			.await
	}
}

fn decode_geometry<T: serde::de::DeserializeOwned>(value: Value, command: &str) -> Result<T> {
	serde_json::from_value(value)
		.map_err(|error| Error::Protocol(format!("malformed '{command}' result: {error}")))
}
