//! Component trait definition.

use super::into_view::View;

/// Trait for reusable UI components.
///
/// Components encapsulate rendering logic into reusable units. A component is
/// rendered again from scratch each time the state it reads changes.
///
/// # Example
///
/// ```
/// use spa_router::component::{Component, ElementView, IntoView, View};
///
/// struct Heading {
///     text: &'static str,
/// }
///
/// impl Component for Heading {
///     fn render(&self) -> View {
///         ElementView::new("h1").child(self.text).into_view()
///     }
///
///     fn name() -> &'static str {
///         "Heading"
///     }
/// }
///
/// assert_eq!(Heading { text: "Home" }.render().render_to_string(), "<h1>Home</h1>");
/// ```
pub trait Component: 'static {
	/// Renders the component to a View.
	fn render(&self) -> View;

	/// Returns the component's name for debugging.
	fn name() -> &'static str
	where
		Self: Sized;
}
