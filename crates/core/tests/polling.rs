//! Poll-loop timing, ordering, and cancellation, under a paused clock.
//!
//! Every test configures an explicit poll interval so the paused clock
//! advances deterministically between attempts.

mod common;

use std::time::Duration;

use serde_json::json;
use wd::{Dialect, Element, ElementReference, ErrorKind, Locator, SessionConfig};

use common::MockTransport;

fn timing() -> SessionConfig {
	SessionConfig::new()
		.find_timeout(Duration::from_secs(1))
		.poll_interval(Duration::from_millis(100))
}

#[tokio::test(start_paused = true)]
async fn find_displayed_times_out_with_no_such_element_when_nothing_matches() {
	let transport = MockTransport::new();
	transport.route("elements", json!([]));
	let session = common::session_with_config(&transport, json!({}), Dialect::JsonWire, timing());

	let start = tokio::time::Instant::now();
	let error = wd::find_displayed(&session, &Locator::css(".missing")).await.unwrap_err();

	assert_eq!(error.kind(), Some(ErrorKind::NoSuchElement));
	assert!(start.elapsed() >= Duration::from_secs(1));
	assert!(start.elapsed() < Duration::from_millis(1200));
}

#[tokio::test(start_paused = true)]
async fn find_displayed_times_out_with_element_not_visible_when_candidates_hide() {
	let transport = MockTransport::new();
	transport.route("elements", json!([{ "ELEMENT": "c1" }]));
	transport.route("element/c1/displayed", json!(false));
	let session = common::session_with_config(&transport, json!({}), Dialect::JsonWire, timing());

	let start = tokio::time::Instant::now();
	let error = wd::find_displayed(&session, &Locator::css(".hidden")).await.unwrap_err();

	assert_eq!(error.kind(), Some(ErrorKind::ElementNotVisible));
	assert!(start.elapsed() >= Duration::from_secs(1));
	assert!(start.elapsed() < Duration::from_millis(1200));
}

#[tokio::test(start_paused = true)]
async fn find_displayed_stops_at_the_iteration_that_succeeds() {
	let transport = MockTransport::new();
	// Two empty attempts, then a candidate that is displayed.
	transport.push_ok(json!([]));
	transport.push_ok(json!([]));
	transport.push_ok(json!([{ "ELEMENT": "c1" }]));
	transport.push_ok(json!(true));
	let session = common::session_with_config(&transport, json!({}), Dialect::JsonWire, timing());

	let found = wd::find_displayed(&session, &Locator::css(".late")).await.unwrap();
	assert_eq!(found.id(), "c1");
	// Three finds plus one displayed probe, nothing after success.
	assert_eq!(transport.request_count(), 4);
}

#[tokio::test(start_paused = true)]
async fn find_displayed_tests_candidates_sequentially_in_result_order() {
	let transport = MockTransport::new();
	transport.push_ok(json!([{ "ELEMENT": "c1" }, { "ELEMENT": "c2" }, { "ELEMENT": "c3" }]));
	transport.push_ok(json!(false));
	transport.push_ok(json!(true));
	let session = common::session_with_config(&transport, json!({}), Dialect::JsonWire, timing());

	let found = wd::find_displayed(&session, &Locator::css("li")).await.unwrap();
	assert_eq!(found.id(), "c2");
	assert_eq!(
		transport.paths(),
		["elements", "element/c1/displayed", "element/c2/displayed"]
	);
}

#[tokio::test(start_paused = true)]
async fn find_displayed_scoped_to_an_element_searches_under_it() {
	let transport = MockTransport::new();
	transport.push_ok(json!([{ "ELEMENT": "c1" }]));
	transport.push_ok(json!(true));
	let session = common::session_with_config(&transport, json!({}), Dialect::JsonWire, timing());

	let root = Element::new(session.clone(), ElementReference::new("root"));
	root.find_displayed(&Locator::css("li")).await.unwrap();
	assert_eq!(transport.paths()[0], "element/root/elements");
}

#[tokio::test(start_paused = true)]
async fn find_displayed_propagates_displayed_probe_failures() {
	let transport = MockTransport::new();
	transport.push_ok(json!([{ "ELEMENT": "c1" }]));
	transport.push_err(ErrorKind::StaleElementReference, "element went away");
	let session = common::session_with_config(&transport, json!({}), Dialect::JsonWire, timing());

	let error = wd::find_displayed(&session, &Locator::css("li")).await.unwrap_err();
	assert_eq!(error.kind(), Some(ErrorKind::StaleElementReference));
}

#[tokio::test(start_paused = true)]
async fn cancelling_find_displayed_halts_polling() {
	let transport = MockTransport::new();
	transport.route("elements", json!([]));
	let config = SessionConfig::new()
		.find_timeout(Duration::from_secs(300))
		.poll_interval(Duration::from_millis(50));
	let session = common::session_with_config(&transport, json!({}), Dialect::JsonWire, config);

	let locator = Locator::css(".never");
	tokio::select! {
		_ = tokio::time::sleep(Duration::from_secs(1)) => {}
		result = wd::find_displayed(&session, &locator) => {
			panic!("poll should not have completed: {result:?}");
		}
	}

	let after_cancel = transport.request_count();
	tokio::time::sleep(Duration::from_secs(5)).await;
	assert_eq!(transport.request_count(), after_cancel);
}

#[tokio::test(start_paused = true)]
async fn wait_for_deleted_succeeds_once_find_reports_gone() {
	let transport = MockTransport::new();
	transport.push_ok(json!({ "ELEMENT": "e1" }));
	transport.push_ok(json!({ "ELEMENT": "e1" }));
	transport.push_err(ErrorKind::NoSuchElement, "all gone");
	let session = common::session_with_config(&transport, json!({}), Dialect::JsonWire, timing());

	wd::wait_for_deleted(&session, &Locator::id("banner")).await.unwrap();
	assert_eq!(transport.request_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn wait_for_deleted_accepts_stale_reference_as_gone() {
	let transport = MockTransport::new();
	transport.push_err(ErrorKind::StaleElementReference, "detached");
	let session = common::session_with_config(&transport, json!({}), Dialect::JsonWire, timing());

	wd::wait_for_deleted(&session, &Locator::id("banner")).await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn wait_for_deleted_times_out_while_the_element_persists() {
	let transport = MockTransport::new();
	transport.route("element", json!({ "ELEMENT": "e1" }));
	let session = common::session_with_config(&transport, json!({}), Dialect::JsonWire, timing());

	let start = tokio::time::Instant::now();
	let error = wd::wait_for_deleted(&session, &Locator::id("banner")).await.unwrap_err();

	assert_eq!(error.kind(), Some(ErrorKind::Timeout));
	assert!(start.elapsed() >= Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn wait_for_deleted_propagates_unexpected_errors() {
	let transport = MockTransport::new();
	transport.push_err(ErrorKind::UnknownError, "server fell over");
	let session = common::session_with_config(&transport, json!({}), Dialect::JsonWire, timing());

	let error = wd::wait_for_deleted(&session, &Locator::id("banner")).await.unwrap_err();
	assert_eq!(error.kind(), Some(ErrorKind::UnknownError));
}

#[tokio::test(start_paused = true)]
async fn poll_interval_paces_attempts() {
	let transport = MockTransport::new();
	transport.route("elements", json!([]));
	let config = SessionConfig::new()
		.find_timeout(Duration::from_millis(500))
		.poll_interval(Duration::from_millis(250));
	let session = common::session_with_config(&transport, json!({}), Dialect::JsonWire, config);

	let _ = wd::find_displayed(&session, &Locator::css("p")).await;
	// Attempts at t=0, 250, and 500 (expiry checked after the last find).
	assert_eq!(transport.request_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn unused_route_value_never_leaks_between_loops() {
	// A queue entry takes priority over a route for the same path.
	let transport = MockTransport::new();
	transport.route("elements", json!([]));
	transport.push_ok(json!([{ "ELEMENT": "c1" }]));
	transport.push_ok(json!(true));
	let session = common::session_with_config(&transport, json!({}), Dialect::JsonWire, timing());

	let found = wd::find_displayed(&session, &Locator::css("li")).await.unwrap();
	assert_eq!(found.id(), "c1");
}
