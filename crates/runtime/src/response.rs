//! Wire-envelope decoding for both protocol dialects.
//!
//! Legacy servers wrap every response in `{"status": n, "value": ...}`
//! and signal failure through the numeric status. W3C servers use the
//! HTTP status for success/failure and put `{"error", "message"}` objects
//! under `value` on failure. Both shapes normalize to the same
//! [`Error::Server`] here, so the element client never looks at raw
//! envelopes.

use serde_json::Value;
use wd_protocol::{Dialect, status};

use crate::error::{Error, Result};

/// Decodes a response body into its `value` payload or a structured error.
///
/// `http_error` reports whether the HTTP response carried a non-2xx
/// status; the legacy dialect ignores it (the embedded status code is
/// authoritative), the W3C dialect requires it to distinguish error
/// payloads from legitimate object values.
pub fn decode(dialect: Dialect, http_error: bool, body: Value) -> Result<Value> {
	match dialect {
		Dialect::JsonWire => decode_json_wire(body),
		Dialect::W3c => decode_w3c(http_error, body),
	}
}

fn decode_json_wire(body: Value) -> Result<Value> {
	let Some(envelope) = body.as_object() else {
		return Err(Error::Protocol(format!("response envelope was not an object: {body}")));
	};
	let Some(code) = envelope.get("status").and_then(Value::as_u64) else {
		return Err(Error::Protocol("response envelope missing 'status'".to_string()));
	};
	let value = envelope.get("value").cloned().unwrap_or(Value::Null);
	if code == 0 {
		return Ok(value);
	}

	// Out-of-range codes classify as UnknownError rather than wrapping.
	let (kind, registry_message) = status::classify(u16::try_from(code).unwrap_or(u16::MAX));
	// Prefer the server's own message when it sent one.
	let message = value
		.get("message")
		.and_then(Value::as_str)
		.map(str::to_string)
		.unwrap_or_else(|| registry_message.to_string());
	Err(Error::Server { kind, message })
}

fn decode_w3c(http_error: bool, body: Value) -> Result<Value> {
	let value = body.get("value").cloned().unwrap_or(Value::Null);
	if !http_error {
		return Ok(value);
	}

	let Some(error) = value.get("error").and_then(Value::as_str) else {
		return Err(Error::Protocol(format!("error response missing 'error' string: {value}")));
	};
	let kind = status::classify_w3c(error);
	let message = value
		.get("message")
		.and_then(Value::as_str)
		.map(str::to_string)
		.unwrap_or_else(|| error.to_string());
	Err(Error::Server { kind, message })
}

#[cfg(test)]
mod tests {
	use serde_json::json;
	use wd_protocol::ErrorKind;

	use super::*;

	#[test]
	fn test_json_wire_success_unwraps_value() {
		let value = decode(Dialect::JsonWire, false, json!({ "status": 0, "value": "hi" })).unwrap();
		assert_eq!(value, json!("hi"));
	}

	#[test]
	fn test_json_wire_missing_value_is_null() {
		let value = decode(Dialect::JsonWire, false, json!({ "status": 0 })).unwrap();
		assert_eq!(value, Value::Null);
	}

	#[test]
	fn test_json_wire_failure_prefers_server_message() {
		let error = decode(
			Dialect::JsonWire,
			false,
			json!({ "status": 7, "value": { "message": "nothing at //div" } }),
		)
		.unwrap_err();
		assert_eq!(error.kind(), Some(ErrorKind::NoSuchElement));
		assert_eq!(error.server_message(), Some("nothing at //div"));
	}

	#[test]
	fn test_json_wire_failure_falls_back_to_registry_message() {
		let error = decode(Dialect::JsonWire, false, json!({ "status": 10, "value": null })).unwrap_err();
		assert_eq!(error.kind(), Some(ErrorKind::StaleElementReference));
		assert!(error.server_message().unwrap().contains("no longer attached"));
	}

	#[test]
	fn test_json_wire_ignores_http_status() {
		// Some legacy drivers send HTTP 500 with status 0 payloads.
		let value = decode(Dialect::JsonWire, true, json!({ "status": 0, "value": true })).unwrap();
		assert_eq!(value, json!(true));
	}

	#[test]
	fn test_json_wire_out_of_range_status_is_unknown_error() {
		// 65543 would alias to 7 if the status were truncated to u16.
		let error =
			decode(Dialect::JsonWire, false, json!({ "status": 65543, "value": null })).unwrap_err();
		assert_eq!(error.kind(), Some(ErrorKind::UnknownError));
	}

	#[test]
	fn test_json_wire_malformed_envelope() {
		assert!(matches!(
			decode(Dialect::JsonWire, false, json!([1, 2])),
			Err(Error::Protocol(_))
		));
		assert!(matches!(
			decode(Dialect::JsonWire, false, json!({ "value": 1 })),
			Err(Error::Protocol(_))
		));
	}

	#[test]
	fn test_w3c_success_unwraps_value() {
		let value = decode(Dialect::W3c, false, json!({ "value": { "error": "not really" } })).unwrap();
		// Without an HTTP error the payload is data, not an error envelope.
		assert_eq!(value, json!({ "error": "not really" }));
	}

	#[test]
	fn test_w3c_error_maps_error_string() {
		let error = decode(
			Dialect::W3c,
			true,
			json!({ "value": { "error": "stale element reference", "message": "gone" } }),
		)
		.unwrap_err();
		assert_eq!(error.kind(), Some(ErrorKind::StaleElementReference));
		assert_eq!(error.server_message(), Some("gone"));
	}

	#[test]
	fn test_w3c_unrecognized_error_string_is_unknown_error() {
		let error = decode(
			Dialect::W3c,
			true,
			json!({ "value": { "error": "flux capacitor drained" } }),
		)
		.unwrap_err();
		assert_eq!(error.kind(), Some(ErrorKind::UnknownError));
	}

	#[test]
	fn test_w3c_error_without_error_string_is_protocol_error() {
		assert!(matches!(
			decode(Dialect::W3c, true, json!({ "value": "oops" })),
			Err(Error::Protocol(_))
		));
	}
}
