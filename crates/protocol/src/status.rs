//! Status-code registry for the legacy JSON-wire protocol.
//!
//! Mirrors the protocol's status-code appendix. [`classify`] is the only
//! place a numeric status turns into a structured error kind; callers that
//! must synthesize an error without a server-supplied one (the poll engine,
//! manual find fallbacks) go through the same table.

/// Structured failure kind inferred from server responses.
///
/// Covers every row of the JSON-wire status table plus the W3C error
/// strings that map onto the same kinds. Kinds with no local special
/// handling still round-trip so callers can match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	NoSuchDriver,
	NoSuchElement,
	NoSuchFrame,
	UnknownCommand,
	StaleElementReference,
	ElementNotVisible,
	InvalidElementState,
	UnknownError,
	ElementIsNotSelectable,
	JavaScriptError,
	XPathLookupError,
	Timeout,
	NoSuchWindow,
	InvalidCookieDomain,
	UnableToSetCookie,
	UnexpectedAlertOpen,
	NoAlertOpen,
	ScriptTimeout,
	InvalidElementCoordinates,
	ImeNotAvailable,
	ImeEngineActivationFailed,
	InvalidSelector,
	SessionNotCreated,
	MoveTargetOutOfBounds,
}

impl ErrorKind {
	/// Canonical short name, matching the W3C error string where one exists.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::NoSuchDriver => "no such driver",
			Self::NoSuchElement => "no such element",
			Self::NoSuchFrame => "no such frame",
			Self::UnknownCommand => "unknown command",
			Self::StaleElementReference => "stale element reference",
			Self::ElementNotVisible => "element not visible",
			Self::InvalidElementState => "invalid element state",
			Self::UnknownError => "unknown error",
			Self::ElementIsNotSelectable => "element is not selectable",
			Self::JavaScriptError => "javascript error",
			Self::XPathLookupError => "xpath lookup error",
			Self::Timeout => "timeout",
			Self::NoSuchWindow => "no such window",
			Self::InvalidCookieDomain => "invalid cookie domain",
			Self::UnableToSetCookie => "unable to set cookie",
			Self::UnexpectedAlertOpen => "unexpected alert open",
			Self::NoAlertOpen => "no such alert",
			Self::ScriptTimeout => "script timeout",
			Self::InvalidElementCoordinates => "invalid element coordinates",
			Self::ImeNotAvailable => "ime not available",
			Self::ImeEngineActivationFailed => "ime engine activation failed",
			Self::InvalidSelector => "invalid selector",
			Self::SessionNotCreated => "session not created",
			Self::MoveTargetOutOfBounds => "move target out of bounds",
		}
	}
}

impl std::fmt::Display for ErrorKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Status codes the core synthesizes errors from.
pub const NO_SUCH_ELEMENT: u16 = 7;
/// See [`NO_SUCH_ELEMENT`].
pub const ELEMENT_NOT_VISIBLE: u16 = 11;
/// See [`NO_SUCH_ELEMENT`].
pub const TIMEOUT: u16 = 21;

/// Maps a JSON-wire status code to a structured kind and human message.
///
/// Total: codes outside the table (including 0, which servers should never
/// attach to a failed response) classify as [`ErrorKind::UnknownError`].
pub fn classify(code: u16) -> (ErrorKind, &'static str) {
	match code {
		6 => (ErrorKind::NoSuchDriver, "A session is either terminated or not started."),
		7 => (
			ErrorKind::NoSuchElement,
			"An element could not be located on the page using the given search parameters.",
		),
		8 => (
			ErrorKind::NoSuchFrame,
			"A request to switch to a frame could not be satisfied because the frame could not be found.",
		),
		9 => (
			ErrorKind::UnknownCommand,
			"The requested resource could not be found, or a request was received using an HTTP method that is not supported by the mapped resource.",
		),
		10 => (
			ErrorKind::StaleElementReference,
			"An element command failed because the referenced element is no longer attached to the DOM.",
		),
		11 => (
			ErrorKind::ElementNotVisible,
			"An element command could not be completed because the element is not visible on the page.",
		),
		12 => (
			ErrorKind::InvalidElementState,
			"An element command could not be completed because the element is in an invalid state (e.g. attempting to click a disabled element).",
		),
		13 => (
			ErrorKind::UnknownError,
			"An unknown server-side error occurred while processing the command.",
		),
		15 => (
			ErrorKind::ElementIsNotSelectable,
			"An attempt was made to select an element that cannot be selected.",
		),
		17 => (
			ErrorKind::JavaScriptError,
			"An error occurred while executing user supplied JavaScript.",
		),
		19 => (
			ErrorKind::XPathLookupError,
			"An error occurred while searching for an element by XPath.",
		),
		21 => (ErrorKind::Timeout, "An operation did not complete before its timeout expired."),
		23 => (ErrorKind::NoSuchWindow, "A request to switch to a different window could not be satisfied because the window could not be found."),
		24 => (
			ErrorKind::InvalidCookieDomain,
			"An illegal attempt was made to set a cookie under a different domain than the current page.",
		),
		25 => (
			ErrorKind::UnableToSetCookie,
			"A request to set a cookie's value could not be satisfied.",
		),
		26 => (ErrorKind::UnexpectedAlertOpen, "A modal dialog was open, blocking this operation."),
		27 => (
			ErrorKind::NoAlertOpen,
			"An attempt was made to operate on a modal dialog when one was not open.",
		),
		28 => (ErrorKind::ScriptTimeout, "A script did not complete before its timeout expired."),
		29 => (
			ErrorKind::InvalidElementCoordinates,
			"The coordinates provided to an interactions operation are invalid.",
		),
		30 => (ErrorKind::ImeNotAvailable, "IME was not available."),
		31 => (ErrorKind::ImeEngineActivationFailed, "An IME engine could not be started."),
		32 => (
			ErrorKind::InvalidSelector,
			"Argument was an invalid selector (e.g. XPath/CSS).",
		),
		33 => (ErrorKind::SessionNotCreated, "A new session could not be created."),
		34 => (
			ErrorKind::MoveTargetOutOfBounds,
			"Target provided for a move action is out of bounds.",
		),
		_ => (
			ErrorKind::UnknownError,
			"An unknown server-side error occurred while processing the command.",
		),
	}
}

/// Maps a W3C error string to a structured kind.
///
/// Total: unrecognized strings classify as [`ErrorKind::UnknownError`].
pub fn classify_w3c(error: &str) -> ErrorKind {
	match error {
		"no such element" => ErrorKind::NoSuchElement,
		"no such frame" => ErrorKind::NoSuchFrame,
		"no such window" => ErrorKind::NoSuchWindow,
		"no such alert" => ErrorKind::NoAlertOpen,
		"stale element reference" => ErrorKind::StaleElementReference,
		// The W3C dialect folded visibility failures into interactability.
		"element not visible" | "element not interactable" => ErrorKind::ElementNotVisible,
		"invalid element state" => ErrorKind::InvalidElementState,
		"unknown command" => ErrorKind::UnknownCommand,
		"javascript error" => ErrorKind::JavaScriptError,
		"timeout" => ErrorKind::Timeout,
		"script timeout" => ErrorKind::ScriptTimeout,
		"invalid selector" => ErrorKind::InvalidSelector,
		"invalid cookie domain" => ErrorKind::InvalidCookieDomain,
		"unable to set cookie" => ErrorKind::UnableToSetCookie,
		"unexpected alert open" => ErrorKind::UnexpectedAlertOpen,
		"session not created" => ErrorKind::SessionNotCreated,
		"move target out of bounds" => ErrorKind::MoveTargetOutOfBounds,
		_ => ErrorKind::UnknownError,
	}
}
