//! DOM event abstraction.
//!
//! Views attach handlers that receive an [`Event`]. In the browser this is the
//! real `web_sys::Event`; on native targets it is a [`SyntheticEvent`] that
//! records whether `prevent_default()` was called, so navigation can be
//! exercised without a browser.

use std::fmt;

/// DOM event types used by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
	/// Mouse click / link activation.
	Click,
	/// History navigation by the back/forward buttons.
	PopState,
}

impl EventType {
	/// Returns the DOM event name.
	pub fn as_str(&self) -> &'static str {
		match self {
			EventType::Click => "click",
			EventType::PopState => "popstate",
		}
	}
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Event passed to view event handlers.
#[cfg(target_arch = "wasm32")]
pub type Event = web_sys::Event;

/// Event passed to view event handlers (native stand-in).
#[cfg(not(target_arch = "wasm32"))]
pub type Event = SyntheticEvent;

/// Native stand-in for `web_sys::Event`.
///
/// Mirrors the part of the DOM event API that handlers use.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct SyntheticEvent {
	default_prevented: std::cell::Cell<bool>,
}

#[cfg(not(target_arch = "wasm32"))]
impl SyntheticEvent {
	/// Creates an event whose default action has not been prevented.
	pub fn new() -> Self {
		Self::default()
	}

	/// Suppresses the default action, as `Event.preventDefault()` does.
	pub fn prevent_default(&self) {
		self.default_prevented.set(true);
	}

	/// Returns whether `prevent_default()` has been called.
	pub fn default_prevented(&self) -> bool {
		self.default_prevented.get()
	}
}

/// A registered DOM event listener.
///
/// The listener stays attached for as long as the handle lives and is removed
/// from its target when the handle is dropped.
#[cfg(target_arch = "wasm32")]
pub struct EventHandle {
	target: web_sys::EventTarget,
	event_type: EventType,
	closure: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl EventHandle {
	/// Attaches `handler` to `target` for `event_type`.
	pub fn listen<F>(
		target: &web_sys::EventTarget,
		event_type: EventType,
		mut handler: F,
	) -> Result<Self, wasm_bindgen::JsValue>
	where
		F: FnMut(web_sys::Event) + 'static,
	{
		use wasm_bindgen::JsCast;
		use wasm_bindgen::closure::Closure;

		let closure = Closure::wrap(Box::new(move |event: web_sys::Event| handler(event))
			as Box<dyn FnMut(web_sys::Event)>);
		target.add_event_listener_with_callback(
			event_type.as_str(),
			closure.as_ref().unchecked_ref(),
		)?;

		Ok(Self {
			target: target.clone(),
			event_type,
			closure,
		})
	}
}

#[cfg(target_arch = "wasm32")]
impl Drop for EventHandle {
	fn drop(&mut self) {
		use wasm_bindgen::JsCast;

		let _ = self.target.remove_event_listener_with_callback(
			self.event_type.as_str(),
			self.closure.as_ref().unchecked_ref(),
		);
	}
}

#[cfg(target_arch = "wasm32")]
impl fmt::Debug for EventHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EventHandle")
			.field("event_type", &self.event_type)
			.finish()
	}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(EventType::Click, "click")]
	#[case(EventType::PopState, "popstate")]
	fn test_event_type_name(#[case] event_type: EventType, #[case] expected: &str) {
		assert_eq!(event_type.as_str(), expected);
		assert_eq!(event_type.to_string(), expected);
	}

	#[rstest]
	fn test_synthetic_event_prevent_default() {
		let event = SyntheticEvent::new();
		assert!(!event.default_prevented());

		event.prevent_default();
		assert!(event.default_prevented());
	}
}
