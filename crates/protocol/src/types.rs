//! Geometry result types.
//!
//! Deserialized with serde's default tolerance for unknown fields, which
//! doubles as the "strip extraneous fields" normalization: drivers that
//! append extra members to location/size payloads lose them here.

use serde::{Deserialize, Serialize};

/// Page coordinates of an element's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

/// Rendered size of an element in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}
