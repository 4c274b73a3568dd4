//! Router Components for navigation.

use super::core::Router;
use crate::component::{ElementView, IntoView, View};
use crate::dom::{Event, EventType};
use crate::error_log;
use std::borrow::Cow;
use std::rc::Rc;

/// A route-aware link.
///
/// When its destination is the current route the link renders only its
/// children. Otherwise it renders an `<a href>` around the children whose click
/// handler cancels the browser navigation and routes through [`Router`]
/// instead. The `href` keeps "open in new tab" and similar browser features
/// working.
///
/// # Example
///
/// ```
/// use spa_router::{IntoView, Link, MemoryHistory, Router};
///
/// let router = Router::new(MemoryHistory::new("/"));
///
/// let home = Link::new(&router, "/", "Home").into_view();
/// assert_eq!(home.render_to_string(), "Home");
///
/// let about = Link::new(&router, "/about", "About").into_view();
/// assert_eq!(about.render_to_string(), "<a href=\"/about\">About</a>");
/// ```
pub struct Link {
	/// Router the link navigates with.
	router: Router,
	/// The destination path.
	path: Cow<'static, str>,
	/// Content shown in both states.
	children: View,
}

impl Link {
	/// Creates a new link.
	pub fn new(
		router: &Router,
		path: impl Into<Cow<'static, str>>,
		children: impl IntoView,
	) -> Self {
		Self {
			router: router.clone(),
			path: path.into(),
			children: children.into_view(),
		}
	}

	/// Returns the destination path.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Returns whether the destination is the current route.
	pub fn is_active(&self) -> bool {
		self.router.is_active(&self.path)
	}
}

impl std::fmt::Debug for Link {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Link")
			.field("path", &self.path)
			.field("active", &self.is_active())
			.finish()
	}
}

impl IntoView for Link {
	fn into_view(self) -> View {
		if self.is_active() {
			return self.children;
		}

		let Link {
			router,
			path,
			children,
		} = self;
		let target = path.clone();

		ElementView::new("a")
			.attr("href", path)
			.on(
				EventType::Click,
				Rc::new(move |event: &Event| {
					event.prevent_default();
					if let Err(err) = router.set_route(&target) {
						error_log!("Navigation to {} failed: {}", target, err);
					}
				}),
			)
			.child(children)
			.into_view()
	}
}
