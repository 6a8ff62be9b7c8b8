#![allow(dead_code)]

//! Scripted in-memory transport for driving the client without a server.
//!
//! Replies are consumed FIFO; when the queue is empty, exact-path routes
//! answer (useful for unbounded poll loops), and anything else gets null.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use futures_util::future::BoxFuture;
use serde_json::Value;
use wd::{
	Capabilities, Dialect, Error, ErrorKind, Method, Result, Session, SessionConfig, Transport,
};

pub enum Reply {
	Value(Value),
	Server(ErrorKind, &'static str),
}

#[derive(Default)]
pub struct MockTransport {
	replies: Mutex<VecDeque<Reply>>,
	routes: Mutex<Vec<(String, Value)>>,
	log: Mutex<Vec<(Method, String, Option<Value>)>>,
}

impl MockTransport {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	/// Queues a successful reply.
	pub fn push_ok(&self, value: Value) {
		self.replies.lock().unwrap().push_back(Reply::Value(value));
	}

	/// Queues a server error reply.
	pub fn push_err(&self, kind: ErrorKind, message: &'static str) {
		self.replies.lock().unwrap().push_back(Reply::Server(kind, message));
	}

	/// Answers requests for `path` with `value` whenever the queue is
	/// empty. Paths match exactly.
	pub fn route(&self, path: &str, value: Value) {
		self.routes.lock().unwrap().push((path.to_string(), value));
	}

	pub fn requests(&self) -> Vec<(Method, String, Option<Value>)> {
		self.log.lock().unwrap().clone()
	}

	pub fn request_count(&self) -> usize {
		self.log.lock().unwrap().len()
	}

	/// Paths of every request issued so far, in order.
	pub fn paths(&self) -> Vec<String> {
		self.log.lock().unwrap().iter().map(|(_, path, _)| path.clone()).collect()
	}
}

impl Transport for MockTransport {
	fn request<'a>(
		&'a self,
		method: Method,
		path: &'a str,
		body: Option<Value>,
	) -> BoxFuture<'a, Result<Value>> {
		self.log.lock().unwrap().push((method, path.to_string(), body));

		let reply = self.replies.lock().unwrap().pop_front();
		let result = match reply {
			Some(Reply::Value(value)) => Ok(value),
			Some(Reply::Server(kind, message)) => Err(Error::server(kind, message)),
			None => {
				let routes = self.routes.lock().unwrap();
				let routed = routes.iter().find(|(route, _)| route == path).map(|(_, value)| value.clone());
				Ok(routed.unwrap_or(Value::Null))
			}
		};
		Box::pin(async move { result })
	}
}

pub fn session(
	transport: &Arc<MockTransport>,
	capabilities: Value,
	dialect: Dialect,
) -> Arc<Session> {
	session_with_config(transport, capabilities, dialect, SessionConfig::default())
}

pub fn session_with_config(
	transport: &Arc<MockTransport>,
	capabilities: Value,
	dialect: Dialect,
	config: SessionConfig,
) -> Arc<Session> {
	Arc::new(Session::new(
		transport.clone(),
		Capabilities::from_value(&capabilities),
		dialect,
		config,
	))
}
