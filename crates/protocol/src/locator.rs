//! Locator strategies and the legacy-to-W3C translator.
//!
//! Two incompatible locator vocabularies exist in the wild. The legacy
//! JSON-wire dialect accepts eight strategies; the W3C dialect dropped
//! `id`, `name`, `class name`, and `tag name`, all of which have exact
//! CSS-selector equivalents. [`Locator::to_w3c`] performs that rewrite.
//! The link-text strategies have no W3C equivalent at all and pass
//! through unchanged; sessions that cannot use them natively fall back to
//! a script-executed search (see the element client).

use serde_json::{Value, json};

/// Element search strategy, named per the legacy wire vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
	ClassName,
	CssSelector,
	Id,
	Name,
	LinkText,
	PartialLinkText,
	TagName,
	XPath,
}

impl Strategy {
	/// Legacy wire name (`"class name"`, `"css selector"`, ...).
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::ClassName => "class name",
			Self::CssSelector => "css selector",
			Self::Id => "id",
			Self::Name => "name",
			Self::LinkText => "link text",
			Self::PartialLinkText => "partial link text",
			Self::TagName => "tag name",
			Self::XPath => "xpath",
		}
	}

	/// Parses a legacy wire name.
	pub fn parse(name: &str) -> Option<Self> {
		match name {
			"class name" => Some(Self::ClassName),
			"css selector" => Some(Self::CssSelector),
			"id" => Some(Self::Id),
			"name" => Some(Self::Name),
			"link text" => Some(Self::LinkText),
			"partial link text" => Some(Self::PartialLinkText),
			"tag name" => Some(Self::TagName),
			"xpath" => Some(Self::XPath),
			_ => None,
		}
	}

	/// Whether this is one of the link-text strategies, which the W3C
	/// dialect cannot express and which need a manual fallback under
	/// broken whitespace normalization.
	pub fn is_link_text(&self) -> bool {
		matches!(self, Self::LinkText | Self::PartialLinkText)
	}
}

impl std::fmt::Display for Strategy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A `(strategy, value)` pair identifying elements to search for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
	strategy: Strategy,
	value: String,
}

impl Locator {
	pub fn new(strategy: Strategy, value: impl Into<String>) -> Self {
		Self { strategy, value: value.into() }
	}

	pub fn class_name(value: impl Into<String>) -> Self {
		Self::new(Strategy::ClassName, value)
	}

	pub fn css(value: impl Into<String>) -> Self {
		Self::new(Strategy::CssSelector, value)
	}

	pub fn id(value: impl Into<String>) -> Self {
		Self::new(Strategy::Id, value)
	}

	pub fn name(value: impl Into<String>) -> Self {
		Self::new(Strategy::Name, value)
	}

	pub fn link_text(value: impl Into<String>) -> Self {
		Self::new(Strategy::LinkText, value)
	}

	pub fn partial_link_text(value: impl Into<String>) -> Self {
		Self::new(Strategy::PartialLinkText, value)
	}

	pub fn tag_name(value: impl Into<String>) -> Self {
		Self::new(Strategy::TagName, value)
	}

	pub fn xpath(value: impl Into<String>) -> Self {
		Self::new(Strategy::XPath, value)
	}

	pub fn strategy(&self) -> Strategy {
		self.strategy
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	/// Rewrites legacy-only strategies into their CSS-selector equivalents.
	///
	/// Pure and total: strategies the W3C dialect supports natively (and the
	/// link-text strategies, which it does not support at all) come back
	/// unchanged.
	pub fn to_w3c(&self) -> Locator {
		match self.strategy {
			Strategy::Id => Locator::css(format!("[id=\"{}\"]", css_attr_escape(&self.value))),
			Strategy::Name => Locator::css(format!("[name=\"{}\"]", css_attr_escape(&self.value))),
			Strategy::ClassName => Locator::css(format!(".{}", self.value)),
			Strategy::TagName => Locator::css(self.value.clone()),
			_ => self.clone(),
		}
	}

	/// Body for `POST .../element(s)` requests.
	pub fn to_body(&self) -> Value {
		json!({ "using": self.strategy.as_str(), "value": self.value })
	}
}

impl std::fmt::Display for Locator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}={}", self.strategy, self.value)
	}
}

/// Escapes a value for embedding in a double-quoted CSS attribute selector.
fn css_attr_escape(value: &str) -> String {
	value.replace('\\', "\\\\").replace('"', "\\\"")
}
