//! Wire vocabulary for the WebDriver remote protocol.
//!
//! This crate contains the pure data layer shared by the runtime and the
//! element client: the status-code registry, the locator vocabulary and its
//! legacy-to-W3C translation, element-reference wire shapes, and the table
//! of known error misreports that callers reclassify.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! - **Pure data**: No behavior beyond (de)serialization and lookup
//! - **Total**: Translation and classification never fail; unknown inputs
//!   map to explicit catch-all values
//! - **Stable**: Changes only when the wire protocol changes
//!
//! Network access, sessions, and compensation logic live in `wd-runtime`
//! and `wd-rs`.

pub mod locator;
pub mod reclassify;
pub mod reference;
pub mod status;
pub mod types;

pub use locator::{Locator, Strategy};
pub use reference::{Dialect, ElementReference, W3C_ELEMENT_KEY};
pub use status::ErrorKind;
pub use types::{Position, Size};
