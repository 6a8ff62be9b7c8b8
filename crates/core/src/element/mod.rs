//! The remote element command dispatcher.
//!
//! An element wraps an opaque server-side identifier plus a shared
//! reference to the owning session. Every operation is a one-shot
//! request/compensate/respond cycle: compensation branches are chosen
//! once per call from the capability matrix, in a fixed priority order,
//! and exactly one path executes. No server-side release is issued when
//! a handle is dropped.

mod geometry;
mod interaction;
mod queries;

use std::sync::Arc;

use serde_json::Value;
use wd_protocol::{ElementReference, Locator, status};
use wd_runtime::{Error, Result, Session};

use crate::{poll, scripts};

/// Handle to an element held by the remote automation server.
#[derive(Clone)]
pub struct Element {
	session: Arc<Session>,
	reference: ElementReference,
}

impl Element {
	pub fn new(session: Arc<Session>, reference: ElementReference) -> Self {
		Self { session, reference }
	}

	/// Builds a handle from any of the known wire shapes (find results,
	/// script return values).
	pub fn from_value(session: &Arc<Session>, value: &Value) -> Result<Self> {
		let reference = ElementReference::from_wire(value)
			.ok_or_else(|| Error::Protocol(format!("unrecognized element reference shape: {value}")))?;
		Ok(Self::new(session.clone(), reference))
	}

	/// The opaque server-side identifier.
	pub fn id(&self) -> &str {
		self.reference.id()
	}

	pub fn reference(&self) -> &ElementReference {
		&self.reference
	}

	pub fn session(&self) -> &Arc<Session> {
		&self.session
	}

	/// Serializes the handle for script arguments; round-trips through
	/// the remote side preserving identity.
	pub(crate) fn to_wire(&self) -> Value {
		self.reference.to_wire(self.session.dialect())
	}

	pub(crate) async fn get(&self, command: &str) -> Result<Value> {
		self.session.get(&format!("element/{}/{command}", self.id())).await
	}

	pub(crate) async fn post(&self, command: &str, body: Value) -> Result<Value> {
		self.session.post(&format!("element/{}/{command}", self.id()), body).await
	}

	/// Finds the first descendant matching the locator.
	pub async fn find(&self, locator: &Locator) -> Result<Element> {
		find_one(&self.session, Some(&self.reference), locator).await
	}

	/// Finds all descendants matching the locator.
	pub async fn find_all(&self, locator: &Locator) -> Result<Vec<Element>> {
		find_all_in(&self.session, Some(&self.reference), locator).await
	}

	/// Polls until a matching descendant is displayed.
	///
	/// Fails with `ElementNotVisible` when candidates existed but none
	/// became displayed within the implicit-wait timeout, or
	/// `NoSuchElement` when none ever matched. Dropping the returned
	/// future cancels the poll; no iteration starts after the drop.
	pub async fn find_displayed(&self, locator: &Locator) -> Result<Element> {
		poll::find_displayed(&self.session, Some(&self.reference), locator).await
	}

	/// Polls until no descendant matches the locator.
	///
	/// Succeeds when a find fails with `NoSuchElement` or
	/// `StaleElementReference`; fails with a synthesized `Timeout` error
	/// when the implicit-wait timeout expires first.
	pub async fn wait_for_deleted(&self, locator: &Locator) -> Result<()> {
		poll::wait_for_deleted(&self.session, Some(&self.reference), locator).await
	}
}

impl std::fmt::Debug for Element {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Element").field("id", &self.id()).finish()
	}
}

/// Search endpoint relative to the session: document-rooted when `scope`
/// is empty, element-rooted otherwise.
fn search_path(scope: Option<&ElementReference>, all: bool) -> String {
	let suffix = if all { "elements" } else { "element" };
	match scope {
		Some(reference) => format!("element/{}/{suffix}", reference.id()),
		None => suffix.to_string(),
	}
}

/// Locator as the active dialect expects it.
fn translate(session: &Session, locator: &Locator) -> Locator {
	match session.dialect() {
		wd_protocol::Dialect::W3c => locator.to_w3c(),
		wd_protocol::Dialect::JsonWire => locator.clone(),
	}
}

pub(crate) async fn find_one(
	session: &Arc<Session>,
	scope: Option<&ElementReference>,
	locator: &Locator,
) -> Result<Element> {
	let locator = translate(session, locator);
	if locator.strategy().is_link_text()
		&& session.capabilities().broken_whitespace_normalization()
	{
		tracing::debug!(target = "wd", %locator, "using manual link-text search");
		let value = manual_find_by_link_text(session, scope, &locator, false).await?;
		if value.is_null() {
			return Err(Error::from_status(status::NO_SUCH_ELEMENT));
		}
		return Element::from_value(session, &value);
	}

	match session.post(&search_path(scope, false), locator.to_body()).await {
		Ok(value) => Element::from_value(session, &value),
		Err(error) => Err(error.reclassified()),
	}
}

pub(crate) async fn find_all_in(
	session: &Arc<Session>,
	scope: Option<&ElementReference>,
	locator: &Locator,
) -> Result<Vec<Element>> {
	let locator = translate(session, locator);
	let value = if locator.strategy().is_link_text()
		&& session.capabilities().broken_whitespace_normalization()
	{
		tracing::debug!(target = "wd", %locator, "using manual link-text search");
		manual_find_by_link_text(session, scope, &locator, true).await?
	} else {
		session
			.post(&search_path(scope, true), locator.to_body())
			.await
			.map_err(Error::reclassified)?
	};

	let Some(entries) = value.as_array() else {
		return Err(Error::Protocol(format!("find result was not an array: {value}")));
	};
	entries
		.iter()
		.map(|entry| Element::from_value(session, entry))
		.collect()
}

async fn manual_find_by_link_text(
	session: &Arc<Session>,
	scope: Option<&ElementReference>,
	locator: &Locator,
	all: bool,
) -> Result<Value> {
	let scope_arg = match scope {
		Some(reference) => reference.to_wire(session.dialect()),
		None => Value::Null,
	};
	let partial = locator.strategy() == wd_protocol::Strategy::PartialLinkText;
	session
		.execute(
			scripts::FIND_BY_LINK_TEXT,
			vec![scope_arg, Value::Bool(partial), Value::String(locator.value().to_string()), Value::Bool(all)],
		)
		.await
}
