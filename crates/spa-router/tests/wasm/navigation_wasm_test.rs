//! Browser tests for navigation.
//!
//! Run with:
//!   wasm-pack test --chrome --headless crates/spa-router
#![cfg(target_arch = "wasm32")]

use spa_router::{App, BrowserHistory, History, MemoryHistory, Router};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
	web_sys::window().unwrap().document().unwrap()
}

fn fresh_root(id: &str) -> web_sys::Element {
	let document = document();
	if let Some(old) = document.get_element_by_id(id) {
		old.remove();
	}
	let root = document.create_element("div").unwrap();
	root.set_id(id);
	document.body().unwrap().append_child(&root).unwrap();
	root
}

fn click_link(root: &web_sys::Element, href: &str) -> bool {
	let link = root
		.query_selector(&format!("a[href=\"{href}\"]"))
		.unwrap()
		.expect("link should be mounted");
	let event = web_sys::MouseEvent::new_with_mouse_event_init_dict("click", &{
		let init = web_sys::MouseEventInit::new();
		init.set_bubbles(true);
		init.set_cancelable(true);
		init
	})
	.unwrap();
	link.dispatch_event(&event).unwrap()
}

#[wasm_bindgen_test]
fn test_browser_history_push_updates_location() {
	let history = BrowserHistory::new().unwrap();
	let router = Router::new(history.clone());

	router.set_route("/about").unwrap();

	assert_eq!(history.current_path(), "/about");
	assert_eq!(router.route(), "/about");
}

#[wasm_bindgen_test]
fn test_mounted_app_swaps_page_on_click() {
	let history = MemoryHistory::new("/");
	let root = fresh_root("app-click");
	let mounted = App::new(history.clone()).mount(root.clone()).unwrap();

	assert!(root.inner_html().starts_with("<h1>Home</h1>"));

	// dispatch_event returns false when the default action was cancelled
	assert!(!click_link(&root, "/about"));

	assert_eq!(history.current_path(), "/about");
	assert!(root.inner_html().starts_with("<h1>About</h1>"));
	assert!(root.query_selector("a[href=\"/about\"]").unwrap().is_none());

	history.back();
	assert!(root.inner_html().starts_with("<h1>Home</h1>"));

	drop(mounted);
	assert_eq!(history.listener_count(), 0);
}

#[wasm_bindgen_test]
fn test_mount_unknown_route() {
	let root = fresh_root("app-unknown");
	let _mounted = App::new(MemoryHistory::new("/unknown"))
		.mount(root.clone())
		.unwrap();

	assert!(
		root.text_content()
			.unwrap()
			.starts_with("Whoops! We couldn't find that page.")
	);
	assert_eq!(root.query_selector_all("a").unwrap().length(), 2);
}
