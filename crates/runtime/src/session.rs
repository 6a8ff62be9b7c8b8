//! The session: shared state every element handle hangs off.
//!
//! A session bundles the transport channel, the capability matrix, the
//! active dialect, and the timeout configuration. It is read-mostly and
//! shared (via `Arc`) across all handles derived from it; nothing in this
//! crate or the element client mutates it after construction.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use wd_protocol::Dialect;

use crate::capabilities::Capabilities;
use crate::error::Result;
use crate::transport::{Method, Transport};

/// Default implicit-wait timeout for find polling, matching the
/// protocol's session default.
pub const DEFAULT_FIND_TIMEOUT_MS: u64 = 30_000;

/// Fixed settle delay after native clicks on drivers that return before
/// the click's default action completes.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 500;

/// Per-session timing configuration, resolved once at session creation.
#[derive(Debug, Clone)]
pub struct SessionConfig {
	/// Implicit-wait timeout used by the poll loops.
	pub find_timeout: Duration,
	/// Minimum delay between poll attempts. `None` (the default) re-polls
	/// immediately, bounded only by round-trip latency; that cadence can
	/// amplify load against slow servers, so the knob exists.
	pub poll_interval: Option<Duration>,
	/// Post-click settle delay for drivers that return early.
	pub settle_delay: Duration,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			find_timeout: Duration::from_millis(DEFAULT_FIND_TIMEOUT_MS),
			poll_interval: None,
			settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
		}
	}
}

impl SessionConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the implicit-wait timeout.
	pub fn find_timeout(mut self, timeout: Duration) -> Self {
		self.find_timeout = timeout;
		self
	}

	/// Sets the minimum delay between poll attempts.
	pub fn poll_interval(mut self, interval: Duration) -> Self {
		self.poll_interval = Some(interval);
		self
	}

	/// Sets the post-click settle delay.
	pub fn settle_delay(mut self, delay: Duration) -> Self {
		self.settle_delay = delay;
		self
	}
}

/// An active remote session.
pub struct Session {
	transport: Arc<dyn Transport>,
	capabilities: Capabilities,
	dialect: Dialect,
	config: SessionConfig,
}

impl Session {
	pub fn new(
		transport: Arc<dyn Transport>,
		capabilities: Capabilities,
		dialect: Dialect,
		config: SessionConfig,
	) -> Self {
		Self { transport, capabilities, dialect, config }
	}

	pub fn capabilities(&self) -> &Capabilities {
		&self.capabilities
	}

	pub fn dialect(&self) -> Dialect {
		self.dialect
	}

	pub fn config(&self) -> &SessionConfig {
		&self.config
	}

	/// Issues one session-relative wire operation.
	pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
		tracing::debug!(target = "wd", %method, path, "issuing request");
		self.transport.request(method, path, body).await
	}

	pub async fn get(&self, path: &str) -> Result<Value> {
		self.request(Method::Get, path, None).await
	}

	pub async fn post(&self, path: &str, body: Value) -> Result<Value> {
		self.request(Method::Post, path, Some(body)).await
	}

	/// Executes a synchronous script in the remote browser.
	///
	/// Arguments may contain element references serialized with the
	/// session's dialect; they resolve to live DOM nodes on the remote
	/// side.
	pub async fn execute(&self, script: &str, args: Vec<Value>) -> Result<Value> {
		let path = match self.dialect {
			Dialect::JsonWire => "execute",
			Dialect::W3c => "execute/sync",
		};
		self.post(path, json!({ "script": script, "args": args })).await
	}
}

impl std::fmt::Debug for Session {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Session")
			.field("dialect", &self.dialect)
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use futures_util::future::BoxFuture;
	use serde_json::json;

	use super::*;

	/// Records requests and answers them all with null.
	#[derive(Default)]
	struct RecordingTransport {
		log: Mutex<Vec<(Method, String, Option<Value>)>>,
	}

	impl Transport for RecordingTransport {
		fn request<'a>(
			&'a self,
			method: Method,
			path: &'a str,
			body: Option<Value>,
		) -> BoxFuture<'a, Result<Value>> {
			self.log.lock().unwrap().push((method, path.to_string(), body));
			Box::pin(async { Ok(Value::Null) })
		}
	}

	fn session_with(dialect: Dialect) -> (Arc<RecordingTransport>, Session) {
		let transport = Arc::new(RecordingTransport::default());
		let session = Session::new(
			transport.clone(),
			Capabilities::default(),
			dialect,
			SessionConfig::default(),
		);
		(transport, session)
	}

	#[tokio::test]
	async fn test_execute_uses_dialect_specific_path() {
		let (transport, session) = session_with(Dialect::JsonWire);
		session.execute("return 1;", vec![]).await.unwrap();

		let (w3c_transport, w3c_session) = session_with(Dialect::W3c);
		w3c_session.execute("return 1;", vec![]).await.unwrap();

		assert_eq!(transport.log.lock().unwrap()[0].1, "execute");
		assert_eq!(w3c_transport.log.lock().unwrap()[0].1, "execute/sync");
	}

	#[tokio::test]
	async fn test_execute_body_carries_script_and_args() {
		let (transport, session) = session_with(Dialect::JsonWire);
		session
			.execute("return arguments[0];", vec![json!({ "ELEMENT": "e1" })])
			.await
			.unwrap();

		let log = transport.log.lock().unwrap();
		let body = log[0].2.as_ref().unwrap();
		assert_eq!(body["script"], "return arguments[0];");
		assert_eq!(body["args"], json!([{ "ELEMENT": "e1" }]));
		assert_eq!(log[0].0, Method::Post);
	}

	#[test]
	fn test_config_builder_defaults() {
		let config = SessionConfig::new();
		assert_eq!(config.find_timeout, Duration::from_millis(DEFAULT_FIND_TIMEOUT_MS));
		assert_eq!(config.poll_interval, None);
		assert_eq!(config.settle_delay, Duration::from_millis(DEFAULT_SETTLE_DELAY_MS));

		let tuned = SessionConfig::new()
			.find_timeout(Duration::from_secs(5))
			.poll_interval(Duration::from_millis(50));
		assert_eq!(tuned.find_timeout, Duration::from_secs(5));
		assert_eq!(tuned.poll_interval, Some(Duration::from_millis(50)));
	}
}
