//! Session and transport plumbing for the WebDriver client.
//!
//! This crate owns the seams the element client plugs into: the
//! [`Transport`] trait (raw HTTP is a collaborator, not implemented
//! here), wire-envelope decoding for both protocol dialects, the
//! read-only [`Capabilities`] defect matrix, and the [`Session`] that
//! ties them together with the script-execution primitive and the
//! timeout configuration.

pub mod capabilities;
pub mod error;
pub mod response;
pub mod session;
pub mod transport;

pub use capabilities::Capabilities;
pub use error::{Error, Result};
pub use session::{Session, SessionConfig};
pub use transport::{Method, Transport};
