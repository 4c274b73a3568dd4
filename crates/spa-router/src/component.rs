//! Component System for spa-router
//!
//! A small view layer for building the router's pages. Views are rendered to
//! an HTML string on native targets and mounted into the DOM on WASM.
//!
//! ## Features
//!
//! - **IntoView trait**: Convert any type into a renderable [`View`]
//! - **Component trait**: Define reusable UI components
//! - **View enum**: Unified representation of DOM elements, text, and fragments
//!
//! ## Usage
//!
//! ```
//! use spa_router::component::{ElementView, IntoView};
//!
//! let view = ElementView::new("h1").child("Home").into_view();
//! assert_eq!(view.render_to_string(), "<h1>Home</h1>");
//! ```

mod into_view;
mod r#trait;

pub use into_view::{ElementView, IntoView, View, ViewEventHandler};
pub use r#trait::Component;
