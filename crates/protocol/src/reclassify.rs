//! Central table of known driver error misreports.
//!
//! Several drivers report the wrong status for well-understood cases and
//! the only distinguishing signal is a message substring. Listing the
//! signatures in one place keeps the brittleness visible and testable
//! instead of scattering string sniffing across call sites.

use crate::status::ErrorKind;

/// `(reported kind, message substring, actual kind)` rows. Matching is
/// case-insensitive on the substring.
const RECLASSIFICATIONS: &[(ErrorKind, &str, ErrorKind)] = &[
	// Some drivers answer a failed find with "unknown command" instead of
	// "no such element", with the real cause buried in the message.
	(ErrorKind::UnknownCommand, "unable to locate element", ErrorKind::NoSuchElement),
];

/// Returns the corrected kind for a known misreport, or `None` when the
/// reported kind stands.
pub fn reclassify(kind: ErrorKind, message: &str) -> Option<ErrorKind> {
	let message = message.to_ascii_lowercase();
	RECLASSIFICATIONS
		.iter()
		.find(|(reported, needle, _)| *reported == kind && message.contains(needle))
		.map(|(_, _, actual)| *actual)
}

/// Signature of drivers that cannot answer the native element-equality
/// command; callers fall back to a script-based identity comparison.
pub fn is_equality_bug(kind: ErrorKind, message: &str) -> bool {
	match kind {
		ErrorKind::UnknownCommand => true,
		ErrorKind::UnknownError => message.contains("bug.For input string:"),
		_ => false,
	}
}

/// Signature of drivers that fail to parse a CSS property value instead of
/// returning it; callers treat the property as empty.
pub fn is_style_parse_bug(kind: ErrorKind, message: &str) -> bool {
	kind == ErrorKind::UnknownError && message.to_ascii_lowercase().contains("failed to parse value")
}
