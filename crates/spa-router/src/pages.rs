//! Application pages.
//!
//! Every page renders its own body followed by the same [`Navigation`] bar.

use crate::component::{Component, ElementView, IntoView, View};
use crate::router::{ABOUT_PATH, HOME_PATH, Link, Router};

/// Body text of the Not-Found page.
pub const NOT_FOUND_MESSAGE: &str = "Whoops! We couldn't find that page.";

/// Navigation bar with one [`Link`] per known page.
#[derive(Debug, Clone)]
pub struct Navigation {
	router: Router,
}

impl Navigation {
	/// Links shown in the bar, in order.
	pub const LINKS: [(&'static str, &'static str); 2] =
		[(HOME_PATH, "Home"), (ABOUT_PATH, "About")];

	/// Creates the navigation bar.
	pub fn new(router: &Router) -> Self {
		Self {
			router: router.clone(),
		}
	}
}

impl Component for Navigation {
	fn render(&self) -> View {
		let items = Self::LINKS.iter().map(|&(path, label)| {
			ElementView::new("li").child(Link::new(&self.router, path, label))
		});

		ElementView::new("nav")
			.child(ElementView::new("ul").children(items))
			.into_view()
	}

	fn name() -> &'static str {
		"Navigation"
	}
}

fn page_with_navigation(router: &Router, body: ElementView) -> View {
	View::fragment([body.into_view(), Navigation::new(router).render()])
}

/// The `/` page.
#[derive(Debug, Clone)]
pub struct HomePage {
	router: Router,
}

impl HomePage {
	/// Creates the page.
	pub fn new(router: &Router) -> Self {
		Self {
			router: router.clone(),
		}
	}
}

impl Component for HomePage {
	fn render(&self) -> View {
		page_with_navigation(&self.router, ElementView::new("h1").child("Home"))
	}

	fn name() -> &'static str {
		"HomePage"
	}
}

/// The `/about` page.
#[derive(Debug, Clone)]
pub struct AboutPage {
	router: Router,
}

impl AboutPage {
	/// Creates the page.
	pub fn new(router: &Router) -> Self {
		Self {
			router: router.clone(),
		}
	}
}

impl Component for AboutPage {
	fn render(&self) -> View {
		page_with_navigation(&self.router, ElementView::new("h1").child("About"))
	}

	fn name() -> &'static str {
		"AboutPage"
	}
}

/// Fallback page for unknown routes.
#[derive(Debug, Clone)]
pub struct NotFoundPage {
	router: Router,
}

impl NotFoundPage {
	/// Creates the page.
	pub fn new(router: &Router) -> Self {
		Self {
			router: router.clone(),
		}
	}
}

impl Component for NotFoundPage {
	fn render(&self) -> View {
		page_with_navigation(&self.router, ElementView::new("p").child(NOT_FOUND_MESSAGE))
	}

	fn name() -> &'static str {
		"NotFoundPage"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::router::MemoryHistory;
	use rstest::rstest;

	const NAV_ALL_LINKS: &str = "<nav><ul><li><a href=\"/\">Home</a></li><li><a href=\"/about\">About</a></li></ul></nav>";

	#[rstest]
	fn test_home_page_markup() {
		let router = Router::new(MemoryHistory::new("/"));
		assert_eq!(
			HomePage::new(&router).render().render_to_string(),
			"<h1>Home</h1><nav><ul><li>Home</li><li><a href=\"/about\">About</a></li></ul></nav>"
		);
	}

	#[rstest]
	fn test_about_page_markup() {
		let router = Router::new(MemoryHistory::new("/about"));
		assert_eq!(
			AboutPage::new(&router).render().render_to_string(),
			"<h1>About</h1><nav><ul><li><a href=\"/\">Home</a></li><li>About</li></ul></nav>"
		);
	}

	#[rstest]
	fn test_not_found_page_markup() {
		let router = Router::new(MemoryHistory::new("/unknown"));
		assert_eq!(
			NotFoundPage::new(&router).render().render_to_string(),
			format!("<p>Whoops! We couldn&#x27;t find that page.</p>{NAV_ALL_LINKS}")
		);
	}

	#[rstest]
	fn test_navigation_identical_across_pages() {
		let router = Router::new(MemoryHistory::new("/unknown"));
		let nav = Navigation::new(&router).render().render_to_string();

		assert_eq!(nav, NAV_ALL_LINKS);
		for page in [
			HomePage::new(&router).render(),
			AboutPage::new(&router).render(),
			NotFoundPage::new(&router).render(),
		] {
			assert!(page.render_to_string().ends_with(&nav));
		}
	}

	#[rstest]
	fn test_component_names() {
		assert_eq!(Navigation::name(), "Navigation");
		assert_eq!(HomePage::name(), "HomePage");
		assert_eq!(AboutPage::name(), "AboutPage");
		assert_eq!(NotFoundPage::name(), "NotFoundPage");
	}
}
