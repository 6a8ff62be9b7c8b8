//! The transport seam.
//!
//! Raw HTTP plumbing is an external collaborator; the client only needs a
//! `request(method, path, body)` operation returning the decoded `value`
//! payload. Implementations are expected to run the raw response through
//! [`crate::response::decode`] so every caller sees normalized
//! [`Error::Server`](crate::Error::Server) failures regardless of dialect.

use futures_util::future::BoxFuture;
use serde_json::Value;

use crate::error::Result;

/// HTTP method for a wire operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
	Get,
	Post,
	Delete,
}

impl Method {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
			Self::Delete => "DELETE",
		}
	}
}

impl std::fmt::Display for Method {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Session-scoped request channel to the remote automation server.
///
/// Paths are session-relative (`element/{id}/click`, `file`, ...); the
/// implementation owns the base URL, serialization, and connection reuse.
/// Requests issued sequentially by one caller must complete in order;
/// the client never issues concurrent requests for the same element.
pub trait Transport: Send + Sync {
	/// Issues one wire operation and resolves to the decoded `value`
	/// payload of the response.
	fn request<'a>(
		&'a self,
		method: Method,
		path: &'a str,
		body: Option<Value>,
	) -> BoxFuture<'a, Result<Value>>;
}
