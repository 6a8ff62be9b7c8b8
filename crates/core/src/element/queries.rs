//! State and attribute queries.

use serde_json::Value;
use wd_protocol::reclassify;
use wd_runtime::{Error, Result};

use super::Element;
use crate::{normalize, scripts};

impl Element {
	/// Returns the element's visible text.
	///
	/// Drivers that skip whitespace normalization get a fixed local
	/// normalization applied.
	pub async fn visible_text(&self) -> Result<String> {
		let value = self.get("text").await?;
		let text = expect_string(value, "text")?;
		if self.session().capabilities().broken_whitespace_normalization() {
			return Ok(normalize::whitespace(&text));
		}
		Ok(text)
	}

	/// Returns the element's tag name.
	///
	/// Drivers that report XHTML-cased names for HTML documents get the
	/// name lowercased when the document probe says HTML.
	pub async fn tag_name(&self) -> Result<String> {
		let value = self.get("name").await?;
		let name = expect_string(value, "name")?;
		if self.session().capabilities().broken_html_tag_name() {
			let is_html = self
				.session()
				.execute(scripts::IS_HTML_DOCUMENT, vec![])
				.await?
				.as_bool()
				.unwrap_or(false);
			if is_html {
				return Ok(name.to_lowercase());
			}
		}
		Ok(name)
	}

	/// Whether a form element is currently selected/checked.
	pub async fn is_selected(&self) -> Result<bool> {
		let value = self.get("selected").await?;
		expect_bool(value, "selected")
	}

	/// Whether a form element is currently enabled.
	pub async fn is_enabled(&self) -> Result<bool> {
		let value = self.get("enabled").await?;
		expect_bool(value, "enabled")
	}

	/// Returns the attribute/property amalgam value the protocol's
	/// attribute command specifies.
	///
	/// Two compensations: drivers that return empty where the protocol
	/// says null get a script `hasAttribute` probe to pick the sentinel,
	/// and boolean results (another driver deviation) coerce to `"true"`
	/// or `None` to restore the string/null contract.
	pub async fn spec_attribute(&self, name: &str) -> Result<Option<String>> {
		let mut value = self.get(&format!("attribute/{name}")).await?;

		if self.session().capabilities().broken_null_get_spec_attribute()
			&& (value.is_null() || value.as_str() == Some(""))
		{
			let has = self
				.session()
				.execute(scripts::HAS_ATTRIBUTE, vec![self.to_wire(), Value::String(name.to_string())])
				.await?
				.as_bool()
				.unwrap_or(false);
			value = if has { Value::String(String::new()) } else { Value::Null };
		}

		Ok(match value {
			Value::Null | Value::Bool(false) => None,
			Value::Bool(true) => Some("true".to_string()),
			Value::String(text) => Some(text),
			other => Some(other.to_string()),
		})
	}

	/// Reads a DOM attribute directly.
	///
	/// Always script-executed: the native attribute command's semantics
	/// are an attribute/property amalgam, not DOM attribute access.
	pub async fn attribute(&self, name: &str) -> Result<Option<String>> {
		let value = self
			.session()
			.execute(scripts::GET_ATTRIBUTE, vec![self.to_wire(), Value::String(name.to_string())])
			.await?;
		Ok(match value {
			Value::Null => None,
			Value::String(text) => Some(text),
			other => Some(other.to_string()),
		})
	}

	/// Reads a DOM property directly. Always script-executed, same
	/// rationale as [`Element::attribute`].
	pub async fn property(&self, name: &str) -> Result<Value> {
		self.session()
			.execute(scripts::GET_PROPERTY, vec![self.to_wire(), Value::String(name.to_string())])
			.await
	}

	/// Whether this handle and `other` refer to the same remote element.
	///
	/// Always asks the server, even for identical identifiers; element
	/// ids are opaque and the server owns their equality. Drivers that
	/// cannot answer the native equality command (a known bug signature)
	/// fall back to a script-based strict identity comparison.
	pub async fn equals(&self, other: &Element) -> Result<bool> {
		match self.get(&format!("equals/{}", other.id())).await {
			Ok(value) => expect_bool(value, "equals"),
			Err(error) => {
				let fallback = error
					.kind()
					.is_some_and(|kind| {
						reclassify::is_equality_bug(kind, error.server_message().unwrap_or(""))
					});
				if !fallback {
					return Err(error);
				}
				tracing::warn!(
					target = "wd",
					id = %self.id(),
					error = %error,
					"native equality unsupported; comparing via script"
				);
				let value = self
					.session()
					.execute(scripts::STRICT_EQUALS, vec![self.to_wire(), other.to_wire()])
					.await?;
				Ok(value.as_bool().unwrap_or(false))
			}
		}
	}
}

pub(super) fn expect_string(value: Value, command: &str) -> Result<String> {
	match value {
		Value::String(text) => Ok(text),
		other => Err(Error::Protocol(format!("'{command}' result was not a string: {other}"))),
	}
}

pub(super) fn expect_bool(value: Value, command: &str) -> Result<bool> {
	value
		.as_bool()
		.ok_or_else(|| Error::Protocol(format!("'{command}' result was not a boolean: {value}")))
}
