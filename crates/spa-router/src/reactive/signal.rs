//! Signal - Observable Reactive Cell
//!
//! `Signal<T>` holds a value shared by every clone and notifies subscribers each
//! time the value is replaced.
//!
//! ## Example
//!
//! ```
//! use spa_router::Signal;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let route = Signal::new("/".to_string());
//! let seen = Rc::new(Cell::new(0));
//!
//! let _subscription = route.subscribe({
//!     let seen = seen.clone();
//!     move |_path: &String| seen.set(seen.get() + 1)
//! });
//!
//! route.set("/about".to_string());
//! assert_eq!(route.get(), "/about");
//! assert_eq!(seen.get(), 1);
//! ```

use core::cell::{Cell, RefCell};
use core::fmt;

extern crate alloc;
use alloc::rc::{Rc, Weak};

use crate::debug_log;

type Subscriber<T> = Rc<dyn Fn(&T)>;

struct SignalInner<T> {
	value: RefCell<T>,
	subscribers: RefCell<Vec<(u64, Subscriber<T>)>>,
	next_subscriber_id: Cell<u64>,
}

/// A shared, observable value.
///
/// ## Cloning
///
/// `Signal<T>` is a reference-counted handle. All clones read and write the
/// same value and share one subscriber list.
pub struct Signal<T: 'static> {
	inner: Rc<SignalInner<T>>,
}

impl<T: 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T: 'static> Signal<T> {
	/// Create a new Signal with the given initial value
	pub fn new(value: T) -> Self {
		Self {
			inner: Rc::new(SignalInner {
				value: RefCell::new(value),
				subscribers: RefCell::new(Vec::new()),
				next_subscriber_id: Cell::new(0),
			}),
		}
	}

	/// Get a clone of the current value
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.inner.value.borrow().clone()
	}

	/// Borrow the current value for the duration of `f`
	///
	/// `f` must not call [`Signal::set`] on the same signal.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.inner.value.borrow())
	}

	/// Replace the value and notify every subscriber
	pub fn set(&self, value: T)
	where
		T: Clone,
	{
		*self.inner.value.borrow_mut() = value;
		self.notify();
	}

	/// Register `f` to run after every change
	///
	/// The callback stays registered until the returned [`Subscription`] is
	/// dropped. It is not invoked for the current value.
	pub fn subscribe<F>(&self, f: F) -> Subscription
	where
		F: Fn(&T) + 'static,
	{
		let id = self.inner.next_subscriber_id.get();
		self.inner.next_subscriber_id.set(id + 1);
		self.inner.subscribers.borrow_mut().push((id, Rc::new(f)));
		debug_log!("signal subscriber {} registered", id);

		let weak: Weak<SignalInner<T>> = Rc::downgrade(&self.inner);
		Subscription::new(move || {
			if let Some(inner) = weak.upgrade() {
				inner.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
				debug_log!("signal subscriber {} released", id);
			}
		})
	}

	/// Returns the number of live subscriptions
	pub fn subscriber_count(&self) -> usize {
		self.inner.subscribers.borrow().len()
	}

	fn notify(&self)
	where
		T: Clone,
	{
		// Snapshot both lists so subscribers may set the signal or drop their
		// subscription while being notified.
		let value = self.get();
		let subscribers: Vec<Subscriber<T>> = self
			.inner
			.subscribers
			.borrow()
			.iter()
			.map(|(_, subscriber)| Rc::clone(subscriber))
			.collect();

		for subscriber in subscribers {
			subscriber(&value);
		}
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("value", &*self.inner.value.borrow())
			.field("subscribers", &self.subscriber_count())
			.finish()
	}
}

/// A registration that is released when dropped.
///
/// Returned by [`Signal::subscribe`] and by history backends for their
/// back/forward listeners.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
	release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
	/// Creates a subscription that runs `release` exactly once on drop.
	pub fn new<F>(release: F) -> Self
	where
		F: FnOnce() + 'static,
	{
		Self {
			release: Some(Box::new(release)),
		}
	}

	/// Creates a subscription with nothing to release.
	pub fn empty() -> Self {
		Self { release: None }
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(release) = self.release.take() {
			release();
		}
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("active", &self.release.is_some())
			.finish()
	}
}
