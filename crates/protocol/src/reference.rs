//! Element-reference wire shapes.
//!
//! Servers hand back element references in one of four shapes depending on
//! their dialect and vintage. The identifier is extracted exactly once at
//! construction and never re-inspected; serialization back onto the wire
//! (for script arguments) uses the active dialect's shape, so a reference
//! round-trips through script calls preserving identity.

use serde_json::{Value, json};

/// Property key W3C servers use for element references.
pub const W3C_ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Which locator/element-reference vocabulary the active session speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
	/// The legacy JSON-wire vocabulary.
	JsonWire,
	/// The standards-based vocabulary.
	W3c,
}

/// Opaque identifier for an element held by the remote server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementReference {
	id: String,
}

impl ElementReference {
	pub fn new(id: impl Into<String>) -> Self {
		Self { id: id.into() }
	}

	/// Decodes a reference from any of the known wire shapes:
	/// `{"ELEMENT": id}`, `{"elementId": id}`, the W3C element key, or a
	/// bare string. Returns `None` for anything else.
	pub fn from_wire(value: &Value) -> Option<Self> {
		if let Some(id) = value.as_str() {
			return Some(Self::new(id));
		}
		let object = value.as_object()?;
		for key in ["ELEMENT", W3C_ELEMENT_KEY, "elementId"] {
			if let Some(id) = object.get(key).and_then(Value::as_str) {
				return Some(Self::new(id));
			}
		}
		None
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	/// Serializes the reference in the shape the given dialect expects,
	/// e.g. for marshalling into script arguments.
	pub fn to_wire(&self, dialect: Dialect) -> Value {
		match dialect {
			Dialect::JsonWire => json!({ "ELEMENT": self.id }),
			Dialect::W3c => json!({ W3C_ELEMENT_KEY: self.id }),
		}
	}
}
