//! The capability defect matrix.
//!
//! Capabilities are resolved once during session negotiation (an external
//! collaborator) and are strictly read-only here. Boolean flags describe
//! known defects of the connected driver; every compensation path in the
//! element client keys off one of the typed accessors below.

use serde_json::{Map, Value};

/// Immutable per-session capability flags.
#[derive(Debug, Clone, Default)]
pub struct Capabilities {
	values: Map<String, Value>,
}

impl Capabilities {
	pub fn new(values: Map<String, Value>) -> Self {
		Self { values }
	}

	/// Builds the set from a capabilities JSON object. Non-objects yield
	/// an empty set (no known defects).
	pub fn from_value(value: &Value) -> Self {
		match value.as_object() {
			Some(object) => Self { values: object.clone() },
			None => Self::default(),
		}
	}

	/// Raw flag lookup.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.values.get(name)
	}

	/// Truthy boolean flag: `true`, or the string `"true"`.
	pub fn flag(&self, name: &str) -> bool {
		match self.values.get(name) {
			Some(Value::Bool(flag)) => *flag,
			Some(Value::String(text)) => text == "true",
			_ => false,
		}
	}

	pub fn broken_click(&self) -> bool {
		self.flag("brokenClick")
	}

	pub fn broken_submit_element(&self) -> bool {
		self.flag("brokenSubmitElement")
	}

	pub fn broken_whitespace_normalization(&self) -> bool {
		self.flag("brokenWhitespaceNormalization")
	}

	pub fn broken_html_tag_name(&self) -> bool {
		self.flag("brokenHtmlTagName")
	}

	pub fn broken_null_get_spec_attribute(&self) -> bool {
		self.flag("brokenNullGetSpecAttribute")
	}

	pub fn broken_displayed_opacity(&self) -> bool {
		self.flag("brokenElementDisplayedOpacity")
	}

	pub fn broken_displayed_offscreen(&self) -> bool {
		self.flag("brokenElementDisplayedOffscreen")
	}

	pub fn broken_element_position(&self) -> bool {
		self.flag("brokenElementPosition")
	}

	pub fn broken_css_transformed_size(&self) -> bool {
		self.flag("brokenCssTransformedSize")
	}

	pub fn broken_computed_styles(&self) -> bool {
		self.flag("brokenComputedStyles")
	}

	pub fn touch_enabled(&self) -> bool {
		self.flag("touchEnabled")
	}

	pub fn returns_from_click_immediately(&self) -> bool {
		self.flag("returnsFromClickImmediately")
	}

	pub fn remote_files(&self) -> bool {
		self.flag("remoteFiles")
	}
}
