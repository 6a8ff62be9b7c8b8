//! Cross-cutting result normalization.
//!
//! Pure post-processing steps applied uniformly after certain fetches,
//! never special-cased per call site.

use std::sync::LazyLock;

use regex::Regex;

static CRLF: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\s*\r\n\s*").expect("static pattern compiles"));
static SPACE_RUNS: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r" +").expect("static pattern compiles"));
static RGB: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"rgb\((\d+,\s*\d+,\s*\d+)\)").expect("static pattern compiles"));

/// Fixed whitespace normalization for drivers that report visible text
/// without collapsing it: strip leading/trailing whitespace, convert CRLF
/// runs (with adjacent whitespace) to a single newline, collapse interior
/// space runs to one space.
pub fn whitespace(text: &str) -> String {
	let trimmed = text.trim();
	let unified = CRLF.replace_all(trimmed, "\n");
	SPACE_RUNS.replace_all(&unified, " ").into_owned()
}

/// Rewrites `rgb(r, g, b)` substrings to `rgba(r, g, b, 1)` so color
/// values compare equal across drivers that disagree on the serialization.
pub fn color(value: &str) -> String {
	RGB.replace_all(value, "rgba($1, 1)").into_owned()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_whitespace_trims_and_collapses() {
		assert_eq!(whitespace("  hello   world  "), "hello world");
		assert_eq!(whitespace("one\ttab"), "one\ttab");
	}

	#[test]
	fn test_whitespace_converts_crlf_runs_to_newline() {
		assert_eq!(whitespace("first  \r\n  second"), "first\nsecond");
		assert_eq!(whitespace("a\r\nb"), "a\nb");
	}

	#[test]
	fn test_whitespace_empty_input() {
		assert_eq!(whitespace("   "), "");
	}

	#[test]
	fn test_color_rewrites_rgb_to_rgba() {
		assert_eq!(color("color: rgb(1, 2, 3);"), "color: rgba(1, 2, 3, 1);");
		assert_eq!(color("rgb(0,0,0)"), "rgba(0,0,0, 1)");
	}

	#[test]
	fn test_color_leaves_rgba_and_keywords_alone() {
		assert_eq!(color("rgba(1, 2, 3, 0.5)"), "rgba(1, 2, 3, 0.5)");
		assert_eq!(color("transparent"), "transparent");
	}

	#[test]
	fn test_color_rewrites_every_occurrence() {
		assert_eq!(
			color("rgb(1, 2, 3) solid rgb(4, 5, 6)"),
			"rgba(1, 2, 3, 1) solid rgba(4, 5, 6, 1)"
		);
	}
}
