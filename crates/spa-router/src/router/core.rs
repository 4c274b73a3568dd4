//! Core Router Implementation.
//!
//! [`Router`] is the single owner of the current route. It reads the initial
//! path from its [`History`] backend, pushes a history entry on every
//! navigation, and follows back/forward navigation through the backend's
//! listener until the last handle is dropped.

use super::history::{History, HistoryListener};
use crate::reactive::{Signal, Subscription};
use crate::{debug_log, error::RouterError, info_log};
use std::fmt;
use std::rc::{Rc, Weak};

struct RouterInner {
	/// Back/forward listener, released when the router goes away.
	_popstate: HistoryListener,
	/// Current path.
	route: Signal<String>,
	/// History backend.
	history: Rc<dyn History>,
}

/// Navigation state holder.
///
/// `Router` is a cheap, cloneable handle; all clones share one route. Create
/// it once at the composition root and pass clones to the components that
/// need to read or change the route.
///
/// # Example
///
/// ```
/// use spa_router::{History, MemoryHistory, Router};
///
/// let history = MemoryHistory::new("/");
/// let router = Router::new(history.clone());
///
/// router.set_route("/about").unwrap();
/// assert_eq!(router.route(), "/about");
/// assert_eq!(history.current_path(), "/about");
/// ```
#[derive(Clone)]
pub struct Router {
	inner: Rc<RouterInner>,
}

impl Router {
	/// Creates a router whose route starts at the backend's current path.
	///
	/// The router listens for back/forward navigation for as long as any
	/// clone of it is alive.
	pub fn new<H>(history: H) -> Self
	where
		H: History + 'static,
	{
		let history: Rc<dyn History> = Rc::new(history);
		let route = Signal::new(history.current_path());

		let popstate = history.listen(Box::new({
			let route = route.clone();
			move |path: String| {
				debug_log!("popstate -> {}", path);
				// The browser has already moved; only the route needs updating.
				route.set(path);
			}
		}));

		info_log!("Router initialized at {}", route.get());

		Self {
			inner: Rc::new(RouterInner {
				_popstate: popstate,
				route,
				history,
			}),
		}
	}

	/// Returns the current route.
	pub fn route(&self) -> String {
		self.inner.route.get()
	}

	/// Returns whether `path` is exactly the current route.
	pub fn is_active(&self, path: &str) -> bool {
		self.inner.route.with(|route| route == path)
	}

	/// Returns the route signal.
	pub fn route_signal(&self) -> &Signal<String> {
		&self.inner.route
	}

	/// Returns the history backend.
	pub fn history(&self) -> &dyn History {
		self.inner.history.as_ref()
	}

	/// Navigates to `path`.
	///
	/// Pushes `path` onto the history stack without reloading, then updates the
	/// route and notifies every subscriber. If the push is rejected the route
	/// is left unchanged.
	pub fn set_route(&self, path: &str) -> Result<(), RouterError> {
		self.inner.history.push(path)?;
		debug_log!("navigate -> {}", path);
		self.inner.route.set(path.to_string());
		Ok(())
	}

	/// Registers `f` to run after every route change.
	///
	/// `f` must not hold a strong [`Router`]; use [`Router::downgrade`] to
	/// reach the router from inside a subscriber.
	pub fn subscribe<F>(&self, f: F) -> Subscription
	where
		F: Fn(&str) + 'static,
	{
		self.inner.route.subscribe(move |route: &String| f(route))
	}

	/// Creates a weak handle that does not keep the router alive.
	pub fn downgrade(&self) -> WeakRouter {
		WeakRouter {
			inner: Rc::downgrade(&self.inner),
		}
	}
}

impl fmt::Debug for Router {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Router")
			.field("route", &self.route())
			.field("subscribers", &self.inner.route.subscriber_count())
			.finish()
	}
}

/// Weak counterpart of [`Router`].
#[derive(Clone, Default)]
pub struct WeakRouter {
	inner: Weak<RouterInner>,
}

impl WeakRouter {
	/// Returns the router if it is still alive.
	pub fn upgrade(&self) -> Option<Router> {
		self.inner.upgrade().map(|inner| Router { inner })
	}
}

impl fmt::Debug for WeakRouter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WeakRouter")
			.field("alive", &(self.inner.strong_count() > 0))
			.finish()
	}
}
