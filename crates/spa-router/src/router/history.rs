//! History backends.
//!
//! The router never talks to `window.history` directly. It goes through the
//! [`History`] trait so that the same navigation logic runs against the real
//! browser ([`BrowserHistory`], WASM only) and against an in-process stack
//! ([`MemoryHistory`]) on the server and in tests.

use crate::error::RouterError;
use crate::reactive::Subscription;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Handle for a back/forward listener. Dropping it unregisters the listener.
pub type HistoryListener = Subscription;

/// Callback invoked with the new current path after back/forward navigation.
pub type PopStateCallback = Box<dyn Fn(String)>;

/// Session history as seen by the router.
pub trait History {
	/// Returns the path currently shown in the address bar.
	fn current_path(&self) -> String;

	/// Appends `path` to the history stack and makes it current, without
	/// reloading the document and without notifying listeners.
	fn push(&self, path: &str) -> Result<(), RouterError>;

	/// Registers `callback` for back/forward navigation.
	///
	/// The callback receives the path that is current after the browser has
	/// moved. It is never invoked for [`History::push`].
	fn listen(&self, callback: PopStateCallback) -> HistoryListener;
}

#[derive(Default)]
struct MemoryHistoryInner {
	entries: RefCell<Vec<String>>,
	index: Cell<usize>,
	listeners: RefCell<Vec<(u64, Rc<dyn Fn(String)>)>>,
	next_listener_id: Cell<u64>,
}

/// In-memory session history.
///
/// Behaves like the browser's history stack: pushing discards any forward
/// entries, and [`back`](MemoryHistory::back) / [`forward`](MemoryHistory::forward)
/// move the cursor and fire the registered listeners the way `popstate` does.
/// Clones share the same stack.
#[derive(Clone, Default)]
pub struct MemoryHistory {
	inner: Rc<MemoryHistoryInner>,
}

impl MemoryHistory {
	/// Creates a history with a single entry.
	pub fn new(initial_path: impl Into<String>) -> Self {
		let history = Self::default();
		history.inner.entries.borrow_mut().push(initial_path.into());
		history
	}

	/// Moves one entry back. Returns `false` at the start of the stack.
	pub fn back(&self) -> bool {
		self.go(-1)
	}

	/// Moves one entry forward. Returns `false` at the end of the stack.
	pub fn forward(&self) -> bool {
		self.go(1)
	}

	/// Moves the cursor by `delta` entries and notifies listeners.
	///
	/// Returns `false`, without notifying, when `delta` is zero or the target
	/// lies outside the stack.
	pub fn go(&self, delta: isize) -> bool {
		let len = self.len();
		let target = match self.inner.index.get().checked_add_signed(delta) {
			Some(target) if delta != 0 && target < len => target,
			_ => return false,
		};

		self.inner.index.set(target);
		self.notify();
		true
	}

	/// Replaces the current entry without notifying listeners.
	///
	/// Models the user editing the address bar before the application starts.
	pub fn set_location(&self, path: impl Into<String>) {
		let index = self.inner.index.get();
		let mut entries = self.inner.entries.borrow_mut();
		match entries.get_mut(index) {
			Some(entry) => *entry = path.into(),
			None => entries.push(path.into()),
		}
	}

	/// Returns the number of entries in the stack.
	pub fn len(&self) -> usize {
		self.inner.entries.borrow().len()
	}

	/// Returns `true` when the stack has no entries.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the cursor position.
	pub fn index(&self) -> usize {
		self.inner.index.get()
	}

	/// Returns a copy of all entries, oldest first.
	pub fn entries(&self) -> Vec<String> {
		self.inner.entries.borrow().clone()
	}

	/// Returns the number of registered listeners.
	pub fn listener_count(&self) -> usize {
		self.inner.listeners.borrow().len()
	}

	fn notify(&self) {
		let path = self.current_path();
		let listeners: Vec<Rc<dyn Fn(String)>> = self
			.inner
			.listeners
			.borrow()
			.iter()
			.map(|(_, listener)| Rc::clone(listener))
			.collect();

		for listener in listeners {
			listener(path.clone());
		}
	}
}

impl History for MemoryHistory {
	fn current_path(&self) -> String {
		self.inner
			.entries
			.borrow()
			.get(self.inner.index.get())
			.cloned()
			.unwrap_or_else(|| "/".to_string())
	}

	fn push(&self, path: &str) -> Result<(), RouterError> {
		let mut entries = self.inner.entries.borrow_mut();
		let next = if entries.is_empty() {
			0
		} else {
			self.inner.index.get() + 1
		};
		entries.truncate(next);
		entries.push(path.to_string());
		self.inner.index.set(next);
		Ok(())
	}

	fn listen(&self, callback: PopStateCallback) -> HistoryListener {
		let id = self.inner.next_listener_id.get();
		self.inner.next_listener_id.set(id + 1);
		self.inner
			.listeners
			.borrow_mut()
			.push((id, Rc::from(callback)));

		let weak: Weak<MemoryHistoryInner> = Rc::downgrade(&self.inner);
		Subscription::new(move || {
			if let Some(inner) = weak.upgrade() {
				inner.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
			}
		})
	}
}

impl fmt::Debug for MemoryHistory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoryHistory")
			.field("entries", &*self.inner.entries.borrow())
			.field("index", &self.inner.index.get())
			.field("listeners", &self.listener_count())
			.finish()
	}
}

/// Browser session history backed by `window.history` and `window.location`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct BrowserHistory {
	window: web_sys::Window,
}

#[cfg(target_arch = "wasm32")]
impl BrowserHistory {
	/// Binds to the global window.
	pub fn new() -> Result<Self, RouterError> {
		let window = web_sys::window().ok_or(RouterError::NoWindow)?;
		window
			.history()
			.map_err(|_| RouterError::HistoryUnavailable)?;
		Ok(Self { window })
	}
}

#[cfg(target_arch = "wasm32")]
impl History for BrowserHistory {
	fn current_path(&self) -> String {
		self.window
			.location()
			.pathname()
			.unwrap_or_else(|_| "/".to_string())
	}

	fn push(&self, path: &str) -> Result<(), RouterError> {
		let history = self
			.window
			.history()
			.map_err(|_| RouterError::HistoryUnavailable)?;
		history
			.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
			.map_err(|e| RouterError::PushFailed(format!("{:?}", e)))
	}

	fn listen(&self, callback: PopStateCallback) -> HistoryListener {
		use crate::dom::{EventHandle, EventType};
		use crate::error_log;

		let window = self.window.clone();
		let handle = EventHandle::listen(&self.window, EventType::PopState, move |_event| {
			let path = window
				.location()
				.pathname()
				.unwrap_or_else(|_| "/".to_string());
			callback(path);
		});

		match handle {
			Ok(handle) => Subscription::new(move || drop(handle)),
			Err(e) => {
				error_log!("Failed to register popstate listener: {:?}", e);
				Subscription::empty()
			}
		}
	}
}
