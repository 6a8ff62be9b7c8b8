//! Script payloads for compensation paths.
//!
//! Fallback behavior that must run inside the remote browser ships as
//! named data here rather than inline literals at call sites. The
//! marshalling contract: element references passed as arguments arrive
//! as live DOM nodes (`arguments[n]`), and DOM nodes returned by a
//! script come back as element references.

/// Click via DOM method. Args: `[element]`.
pub const CLICK: &str = "arguments[0].click();";

/// Submit the containing form if the element exposes a native submit,
/// else simulate a click on a submit-typed control. Args: `[element]`.
pub const SUBMIT: &str = "\
var element = arguments[0];
if (typeof element.submit === 'function') {
	element.submit();
} else if (element.type === 'submit' && typeof element.click === 'function') {
	element.click();
}";

/// Manual link-text search with normalized whitespace, for drivers whose
/// native link-text matching is unreliable.
/// Args: `[scope element or null, partial, text, all]`.
/// Returns an array when `all`, else a single node or null.
pub const FIND_BY_LINK_TEXT: &str = "\
var root = arguments[0] || document;
var partial = arguments[1];
var text = arguments[2];
var all = arguments[3];
var links = root.getElementsByTagName('a');
var result = [];
for (var i = 0; i < links.length; i++) {
	var linkText = links[i].innerText != null ? links[i].innerText : links[i].textContent;
	linkText = (linkText || '').replace(/^\\s+|\\s+$/g, '').replace(/\\s+/g, ' ');
	var matched = partial ? linkText.indexOf(text) > -1 : linkText === text;
	if (matched) {
		if (!all) {
			return links[i];
		}
		result.push(links[i]);
	}
}
return all ? result : null;";

/// Whether the document is HTML-cased (as opposed to XHTML), used to
/// decide tag-name lowercasing. Args: none.
pub const IS_HTML_DOCUMENT: &str =
	"return document.body && document.body.tagName === document.body.tagName.toUpperCase();";

/// DOM attribute presence check. Args: `[element, name]`.
pub const HAS_ATTRIBUTE: &str = "return arguments[0].hasAttribute(arguments[1]);";

/// DOM attribute read. Args: `[element, name]`.
pub const GET_ATTRIBUTE: &str = "return arguments[0].getAttribute(arguments[1]);";

/// DOM property read. Args: `[element, name]`.
pub const GET_PROPERTY: &str = "return arguments[0][arguments[1]];";

/// Strict identity comparison. Args: `[element, element]`.
pub const STRICT_EQUALS: &str = "return arguments[0] === arguments[1];";

/// Re-verifies a positive native displayed result by walking the ancestor
/// chain: computed opacity of zero or a bounding box fully outside the
/// document (accounting for page scroll) forces hidden.
/// Args: `[element]`. Returns a boolean.
pub const IS_EFFECTIVELY_DISPLAYED: &str = "\
var element = arguments[0];
var scrollX = document.documentElement.scrollLeft || document.body.scrollLeft || 0;
var scrollY = document.documentElement.scrollTop || document.body.scrollTop || 0;
var documentWidth = document.documentElement.scrollWidth;
var documentHeight = document.documentElement.scrollHeight;
while (element && element.nodeType === 1) {
	var style = window.getComputedStyle(element, null);
	if (style && parseFloat(style.opacity) === 0) {
		return false;
	}
	var bbox = element.getBoundingClientRect();
	if (
		bbox.left + bbox.width + scrollX <= 0 ||
		bbox.top + bbox.height + scrollY <= 0 ||
		bbox.left + scrollX >= documentWidth ||
		bbox.top + scrollY >= documentHeight
	) {
		return false;
	}
	element = element.parentNode;
}
return true;";

/// Page position from the bounding rect plus scroll offsets.
/// Args: `[element]`. Returns `{x, y}`.
pub const POSITION: &str = "\
var bbox = arguments[0].getBoundingClientRect();
var scrollX = document.documentElement.scrollLeft || document.body.scrollLeft || 0;
var scrollY = document.documentElement.scrollTop || document.body.scrollTop || 0;
return { x: bbox.left + scrollX, y: bbox.top + scrollY };";

/// Rendered size from bounding-rect deltas, correct under CSS
/// transforms. Args: `[element]`. Returns `{width, height}`.
pub const SIZE: &str = "\
var bbox = arguments[0].getBoundingClientRect();
return { width: bbox.right - bbox.left, height: bbox.bottom - bbox.top };";

/// Computed style read. Args: `[element, propertyName]`.
pub const COMPUTED_STYLE: &str = "\
var style = window.getComputedStyle(arguments[0], null);
return style.getPropertyValue(arguments[1]);";
