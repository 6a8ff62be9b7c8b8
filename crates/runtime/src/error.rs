//! Error types for the WebDriver client.

use thiserror::Error;
use wd_protocol::ErrorKind;
use wd_protocol::reclassify;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the session, transport, and element layers.
#[derive(Debug, Error)]
pub enum Error {
	/// Structured failure reported by (or synthesized on behalf of) the
	/// remote server.
	#[error("{kind}: {message}")]
	Server {
		/// Failure kind, inferred from the status code or error string.
		kind: ErrorKind,
		/// Server-supplied (or registry) message.
		message: String,
	},

	/// Transport-level failure (connection refused, malformed HTTP, ...).
	#[error("Transport error: {0}")]
	Transport(String),

	/// A wire payload did not have the shape the protocol promises.
	#[error("Protocol error: {0}")]
	Protocol(String),

	/// Invalid argument provided to a client operation.
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// JSON serialization/deserialization error.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// I/O error (file probes, upload reads).
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

impl Error {
	/// Builds a server error from the status registry's classification.
	pub fn server(kind: ErrorKind, message: impl Into<String>) -> Self {
		Self::Server { kind, message: message.into() }
	}

	/// Synthesizes a server error purely from a JSON-wire status code.
	pub fn from_status(code: u16) -> Self {
		let (kind, message) = wd_protocol::status::classify(code);
		Self::server(kind, message)
	}

	/// Returns the structured kind if this is a server error.
	pub fn kind(&self) -> Option<ErrorKind> {
		match self {
			Self::Server { kind, .. } => Some(*kind),
			_ => None,
		}
	}

	/// Returns the server message if this is a server error.
	pub fn server_message(&self) -> Option<&str> {
		match self {
			Self::Server { message, .. } => Some(message),
			_ => None,
		}
	}

	pub fn is_no_such_element(&self) -> bool {
		self.kind() == Some(ErrorKind::NoSuchElement)
	}

	pub fn is_stale(&self) -> bool {
		self.kind() == Some(ErrorKind::StaleElementReference)
	}

	pub fn is_unknown_command(&self) -> bool {
		self.kind() == Some(ErrorKind::UnknownCommand)
	}

	/// Applies the central misreport table: a server error whose
	/// kind/message pair matches a known driver bug signature comes back
	/// with the corrected kind, everything else passes through untouched.
	pub fn reclassified(self) -> Self {
		match self {
			Self::Server { kind, message } => match reclassify::reclassify(kind, &message) {
				Some(actual) => {
					tracing::debug!(
						target = "wd",
						reported = %kind,
						actual = %actual,
						"reclassifying misreported server error"
					);
					Self::Server { kind: actual, message }
				}
				None => Self::Server { kind, message },
			},
			other => other,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_status_uses_registry_message() {
		let error = Error::from_status(7);
		assert_eq!(error.kind(), Some(ErrorKind::NoSuchElement));
		assert!(error.to_string().starts_with("no such element:"));
	}

	#[test]
	fn test_reclassified_corrects_misreported_find_failure() {
		let error = Error::server(ErrorKind::UnknownCommand, "Unable to locate element with id foo");
		assert_eq!(error.reclassified().kind(), Some(ErrorKind::NoSuchElement));
	}

	#[test]
	fn test_reclassified_passes_other_errors_through() {
		let error = Error::server(ErrorKind::UnknownCommand, "no such endpoint");
		assert_eq!(error.reclassified().kind(), Some(ErrorKind::UnknownCommand));

		let io = Error::Io(std::io::Error::other("boom"));
		assert!(io.reclassified().kind().is_none());
	}

	#[test]
	fn test_kind_predicates() {
		assert!(Error::from_status(7).is_no_such_element());
		assert!(Error::from_status(10).is_stale());
		assert!(Error::from_status(9).is_unknown_command());
		assert!(!Error::Transport("down".into()).is_no_such_element());
	}
}
