//! The poll-until-condition engine.
//!
//! Both primitives measure wall-clock time from loop entry against the
//! session's implicit-wait timeout, fetched once at loop start. Candidate
//! testing is strictly sequential, in result order: some drivers produce
//! inconsistent displayed-state answers when element queries interleave,
//! so concurrency here is a correctness bug, not an optimization target.
//! Cancellation is drop-based: every network call is a suspension point,
//! dropping the future aborts between them, and no timer or retry
//! outlives the drop.

use std::sync::Arc;

use wd_protocol::{ElementReference, ErrorKind, Locator, status};
use wd_runtime::{Error, Result, Session};

use crate::element::{self, Element};

/// Polls `find_all` under the scope until a candidate reports displayed.
///
/// On timeout, synthesizes `ElementNotVisible` when at least one
/// candidate existed during the final attempt, `NoSuchElement` when none
/// did.
pub(crate) async fn find_displayed(
	session: &Arc<Session>,
	scope: Option<&ElementReference>,
	locator: &Locator,
) -> Result<Element> {
	let timeout = session.config().find_timeout;
	let interval = session.config().poll_interval;
	let start = tokio::time::Instant::now();

	loop {
		let candidates = element::find_all_in(session, scope, locator).await?;
		let had_candidates = !candidates.is_empty();

		// Sequential by contract; see module docs.
		for candidate in candidates {
			if candidate.is_displayed().await? {
				return Ok(candidate);
			}
		}

		if start.elapsed() >= timeout {
			let code = if had_candidates { status::ELEMENT_NOT_VISIBLE } else { status::NO_SUCH_ELEMENT };
			tracing::debug!(
				target = "wd",
				%locator,
				had_candidates,
				elapsed_ms = start.elapsed().as_millis() as u64,
				"displayed poll expired"
			);
			return Err(Error::from_status(code));
		}

		if let Some(interval) = interval {
			tokio::time::sleep(interval).await;
		}
	}
}

/// Polls until a find under the scope fails with `NoSuchElement` or
/// `StaleElementReference`. Expiry synthesizes a `Timeout` error.
pub(crate) async fn wait_for_deleted(
	session: &Arc<Session>,
	scope: Option<&ElementReference>,
	locator: &Locator,
) -> Result<()> {
	let timeout = session.config().find_timeout;
	let interval = session.config().poll_interval;
	let start = tokio::time::Instant::now();

	loop {
		match element::find_one(session, scope, locator).await {
			Ok(_) => {}
			Err(error)
				if matches!(
					error.kind(),
					Some(ErrorKind::NoSuchElement | ErrorKind::StaleElementReference)
				) =>
			{
				return Ok(());
			}
			Err(error) => return Err(error),
		}

		if start.elapsed() >= timeout {
			tracing::debug!(
				target = "wd",
				%locator,
				elapsed_ms = start.elapsed().as_millis() as u64,
				"deletion poll expired"
			);
			return Err(Error::from_status(status::TIMEOUT));
		}

		if let Some(interval) = interval {
			tokio::time::sleep(interval).await;
		}
	}
}
