//! Interaction commands: click, submit, clear, and typing.

use std::path::Path;

use serde_json::{Value, json};
use wd_protocol::Dialect;
use wd_runtime::Result;

use super::Element;
use crate::{scripts, upload};

impl Element {
	/// Clicks the element.
	///
	/// Drivers with a broken native click are driven through script
	/// execution instead. Drivers that return before the click's default
	/// action completes get a fixed settle delay after the native call.
	pub async fn click(&self) -> Result<()> {
		let capabilities = self.session().capabilities();
		if capabilities.broken_click() {
			tracing::debug!(target = "wd", id = %self.id(), "clicking via script");
			self.session().execute(scripts::CLICK, vec![self.to_wire()]).await?;
			return Ok(());
		}

		self.post("click", json!({})).await?;
		if capabilities.touch_enabled() || capabilities.returns_from_click_immediately() {
			tokio::time::sleep(self.session().config().settle_delay).await;
		}
		Ok(())
	}

	/// Submits the form containing this element.
	pub async fn submit(&self) -> Result<()> {
		if self.session().capabilities().broken_submit_element() {
			tracing::debug!(target = "wd", id = %self.id(), "submitting via script");
			self.session().execute(scripts::SUBMIT, vec![self.to_wire()]).await?;
			return Ok(());
		}
		self.post("submit", json!({})).await?;
		Ok(())
	}

	/// Clears the content of a text input.
	pub async fn clear(&self) -> Result<()> {
		self.post("clear", json!({})).await?;
		Ok(())
	}

	/// Types a key sequence into the element.
	///
	/// Under the `remoteFiles` capability the joined input is probed as a
	/// local file path first: an existing regular file is uploaded and
	/// its remote filename typed instead. Probe failures mean "not a
	/// path" and the literal text is typed; upload failures for a real
	/// file propagate.
	pub async fn type_keys<S: AsRef<str>>(&self, keys: &[S]) -> Result<()> {
		let joined: String = keys.iter().map(AsRef::as_ref).collect();

		if self.session().capabilities().remote_files() {
			let is_file = tokio::fs::metadata(&joined)
				.await
				.map(|metadata| metadata.is_file())
				.unwrap_or(false);
			if is_file {
				tracing::debug!(target = "wd", id = %self.id(), path = %joined, "typing local file via upload");
				let remote = upload(self.session(), Path::new(&joined)).await?;
				return self.post_value(&remote, std::slice::from_ref(&remote)).await;
			}
		}

		let parts: Vec<String> = keys.iter().map(|key| key.as_ref().to_string()).collect();
		self.post_value(&joined, &parts).await
	}

	/// Types a single string.
	pub async fn type_text(&self, text: &str) -> Result<()> {
		self.type_keys(&[text]).await
	}

	/// Posts the value command in the shape the dialect expects: the W3C
	/// dialect wants the joined text re-split into single characters, the
	/// legacy dialect takes the key strings as given.
	async fn post_value<S: AsRef<str>>(&self, joined: &str, parts: &[S]) -> Result<()> {
		let value: Vec<String> = match self.session().dialect() {
			Dialect::W3c => joined.chars().map(String::from).collect(),
			Dialect::JsonWire => parts.iter().map(|part| part.as_ref().to_string()).collect(),
		};
		self.post("value", json!({ "value": Value::from(value) })).await?;
		Ok(())
	}
}
