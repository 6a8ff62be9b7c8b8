//! Quirk-normalizing element client for WebDriver remote sessions.
//!
//! Real-world drivers diverge from the nominal protocol in dozens of
//! ways. This crate is the compensation layer: every element operation
//! consults the session's capability matrix, picks exactly one strategy
//! (native command, script-executed fallback, or post-processed native
//! result), and returns a normalized value or a structured error.
//!
//! Session negotiation, raw HTTP, and command chaining live elsewhere;
//! this crate consumes a [`Session`] (capabilities + transport + script
//! primitive + timeouts) and exposes [`Element`] plus the document-scoped
//! search entry points.

mod element;
mod normalize;
mod poll;
mod scripts;
mod upload;

use std::sync::Arc;

pub use element::Element;
pub use upload::upload;
pub use wd_protocol::{
	Dialect, ElementReference, ErrorKind, Locator, Position, Size, Strategy, W3C_ELEMENT_KEY,
};
pub use wd_runtime::{Capabilities, Error, Method, Result, Session, SessionConfig, Transport};

/// Finds the first element matching the locator, searching from the
/// document root.
pub async fn find(session: &Arc<Session>, locator: &Locator) -> Result<Element> {
	element::find_one(session, None, locator).await
}

/// Finds all elements matching the locator, searching from the document
/// root.
pub async fn find_all(session: &Arc<Session>, locator: &Locator) -> Result<Vec<Element>> {
	element::find_all_in(session, None, locator).await
}

/// Polls the document root until a matching element is displayed.
///
/// See [`Element::find_displayed`] for the failure contract.
pub async fn find_displayed(session: &Arc<Session>, locator: &Locator) -> Result<Element> {
	poll::find_displayed(session, None, locator).await
}

/// Polls the document root until no element matches the locator.
///
/// See [`Element::wait_for_deleted`] for the failure contract.
pub async fn wait_for_deleted(session: &Arc<Session>, locator: &Locator) -> Result<()> {
	poll::wait_for_deleted(session, None, locator).await
}
