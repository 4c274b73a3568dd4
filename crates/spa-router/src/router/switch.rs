//! Page switch: exact-match dispatch from the current route to a page.

use super::core::Router;
use crate::component::{Component, View};
use crate::pages::{AboutPage, HomePage, NotFoundPage};

/// Path of the home page.
pub const HOME_PATH: &str = "/";

/// Path of the about page.
pub const ABOUT_PATH: &str = "/about";

/// The page selected for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageRoute {
	/// `/`
	Home,
	/// `/about`
	About,
	/// Any other path.
	NotFound,
}

impl PageRoute {
	/// Resolves a route by exact string comparison.
	///
	/// No normalization is applied: `/about/`, `/About` and `/about?x=1` all
	/// resolve to [`PageRoute::NotFound`].
	pub fn resolve(path: &str) -> Self {
		match path {
			HOME_PATH => PageRoute::Home,
			ABOUT_PATH => PageRoute::About,
			_ => PageRoute::NotFound,
		}
	}

	/// Renders the page for this route.
	pub fn render(&self, router: &Router) -> View {
		match self {
			PageRoute::Home => HomePage::new(router).render(),
			PageRoute::About => AboutPage::new(router).render(),
			PageRoute::NotFound => NotFoundPage::new(router).render(),
		}
	}
}

/// Renders the page matching the router's current route.
pub fn render_page(router: &Router) -> View {
	PageRoute::resolve(&router.route()).render(router)
}
