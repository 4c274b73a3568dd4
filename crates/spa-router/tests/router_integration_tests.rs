//! Integration tests for client-side navigation
//!
//! These tests drive the whole application through an in-memory history:
//! 1. Page selection for known and unknown routes
//! 2. Link activation (default action suppressed, history pushed, page swapped)
//! 3. Back/forward navigation without extra history entries
//! 4. Listener teardown when the application goes away
#![cfg(not(target_arch = "wasm32"))]

use proptest::prelude::*;
use rstest::*;
use spa_router::{
	App, Component, ElementView, Event, EventType, History, MemoryHistory, PageRoute, View,
};
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// Fixtures and helpers
// ============================================================================

#[fixture]
fn history() -> MemoryHistory {
	MemoryHistory::new("/")
}

fn heading(view: &View) -> Option<String> {
	view.find_element(|el| el.tag_name() == "h1")
		.map(|el| el.child_views().iter().map(View::text_content).collect())
}

fn anchor<'a>(view: &'a View, href: &str) -> Option<&'a ElementView> {
	view.find_element(|el| el.tag_name() == "a" && el.attr_value("href") == Some(href))
}

fn nav_labels(view: &View) -> Vec<String> {
	view.elements_by_tag("li")
		.into_iter()
		.map(|li| {
			li.child_views()
				.iter()
				.map(View::text_content)
				.collect::<String>()
		})
		.collect()
}

/// Clicks the link to `href` and returns the dispatched event.
fn click(view: &View, href: &str) -> Event {
	let link = anchor(view, href).unwrap_or_else(|| panic!("no active link to {href}"));
	let event = Event::new();
	assert_eq!(link.dispatch(EventType::Click, &event), 1);
	event
}

// ============================================================================
// Page switch
// ============================================================================

/// Known routes render their page and leave their own link inert
#[rstest]
#[case("/", "Home", "/about")]
#[case("/about", "About", "/")]
fn test_known_route_renders_page(
	#[case] path: &str,
	#[case] title: &str,
	#[case] other: &str,
) {
	let app = App::new(MemoryHistory::new(path));
	let view = app.render();

	assert_eq!(heading(&view).as_deref(), Some(title));
	assert!(anchor(&view, path).is_none());
	assert!(anchor(&view, other).is_some());
	assert_eq!(view.elements_by_tag("a").len(), 1);
	assert_eq!(nav_labels(&view), vec!["Home", "About"]);
}

proptest! {
	/// Any route other than the two known paths renders the Not-Found page
	#[test]
	fn test_unknown_route_renders_not_found(path in "\\PC*") {
		prop_assume!(path != "/" && path != "/about");

		let app = App::new(MemoryHistory::new(path.clone()));
		let view = app.render();

		prop_assert_eq!(PageRoute::resolve(&path), PageRoute::NotFound);
		prop_assert!(heading(&view).is_none());
		prop_assert!(view.text_content().starts_with("Whoops! We couldn't find that page."));
		prop_assert_eq!(view.elements_by_tag("a").len(), 2);
	}
}

// ============================================================================
// Link activation
// ============================================================================

/// Activating a link never lets the browser perform its default navigation
#[rstest]
#[case("/", "/about")]
#[case("/about", "/")]
#[case("/unknown", "/")]
#[case("/unknown", "/about")]
fn test_link_click_prevents_default(#[case] start: &str, #[case] target: &str) {
	let history = MemoryHistory::new(start);
	let app = App::new(history.clone());

	let event = click(&app.render(), target);

	assert!(event.default_prevented());
	assert_eq!(history.current_path(), target);
	assert_eq!(app.router().route(), target);
}

/// After set_route the history and the router agree on the path
#[rstest]
#[case("/about")]
#[case("/")]
#[case("/about/")]
#[case("/deep/unknown/path")]
fn test_set_route_round_trip(history: MemoryHistory, #[case] path: &str) {
	let app = App::new(history.clone());

	app.router().set_route(path).unwrap();

	assert_eq!(history.current_path(), path);
	assert_eq!(app.router().route(), path);
	assert_eq!(history.len(), 2);
}

/// Every route change notifies subscribers so views can re-render
#[rstest]
fn test_route_change_notifies_renderer(history: MemoryHistory) {
	let app = App::new(history.clone());
	let rendered = Rc::new(RefCell::new(Vec::new()));

	let _sub = app.router().subscribe({
		let rendered = rendered.clone();
		let router = app.router().downgrade();
		move |_route: &str| {
			if let Some(router) = router.upgrade() {
				let view = spa_router::router::render_page(&router);
				rendered.borrow_mut().push(heading(&view));
			}
		}
	});

	click(&app.render(), "/about");
	history.back();
	app.router().set_route("/missing").unwrap();

	assert_eq!(
		*rendered.borrow(),
		vec![Some("About".to_string()), Some("Home".to_string()), None]
	);
}

// ============================================================================
// Back/forward
// ============================================================================

/// Back/forward updates the route without pushing history
#[rstest]
fn test_popstate_does_not_push(history: MemoryHistory) {
	let app = App::new(history.clone());
	app.router().set_route("/about").unwrap();
	app.router().set_route("/missing").unwrap();
	assert_eq!(history.len(), 3);

	assert!(history.back());
	assert_eq!(app.router().route(), "/about");
	assert!(history.back());
	assert_eq!(app.router().route(), "/");
	assert!(history.forward());
	assert_eq!(app.router().route(), "/about");

	assert_eq!(history.len(), 3);
	assert_eq!(history.entries(), vec!["/", "/about", "/missing"]);
}

/// Dropping the application releases the back/forward listener
#[rstest]
fn test_teardown_releases_listener(history: MemoryHistory) {
	let app = App::new(history.clone());
	let router = app.router().downgrade();
	app.router().set_route("/about").unwrap();
	assert_eq!(history.listener_count(), 1);

	drop(app);

	assert_eq!(history.listener_count(), 0);
	assert!(router.upgrade().is_none());
	assert!(history.back());
	assert_eq!(history.current_path(), "/");
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

/// Start at `/`, go to About by clicking, then return with the back button
#[rstest]
fn test_navigation_scenario(history: MemoryHistory) {
	let app = App::new(history.clone());

	// 1. Home with "Home" inert and "About" clickable
	let view = app.render();
	assert_eq!(heading(&view).as_deref(), Some("Home"));
	assert!(anchor(&view, "/").is_none());
	assert!(anchor(&view, "/about").is_some());

	// 2. Click "About"
	let event = click(&view, "/about");
	assert!(event.default_prevented());
	assert_eq!(history.current_path(), "/about");

	let view = app.render();
	assert_eq!(heading(&view).as_deref(), Some("About"));
	assert!(anchor(&view, "/about").is_none());
	assert!(anchor(&view, "/").is_some());

	// 4. Back to `/` without clicking
	assert!(history.back());
	let view = app.render();
	assert_eq!(heading(&view).as_deref(), Some("Home"));
	assert_eq!(history.len(), 2);
}

/// 3. An unknown path typed into the address bar and loaded shows Not-Found
#[rstest]
fn test_unknown_path_on_load(history: MemoryHistory) {
	history.set_location("/unknown");
	let app = App::new(history.clone());

	let view = app.render();
	assert_eq!(
		view.render_to_string(),
		"<p>Whoops! We couldn&#x27;t find that page.</p>\
		 <nav><ul><li><a href=\"/\">Home</a></li><li><a href=\"/about\">About</a></li></ul></nav>"
	);
	assert!(anchor(&view, "/").is_some());
	assert!(anchor(&view, "/about").is_some());
}
