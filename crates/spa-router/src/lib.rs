//! spa-router - Minimal Client-Side Router for WASM Applications
//!
//! A small single-page-application router built directly on wasm-bindgen and
//! web-sys. It keeps the current path in a reactive cell, swaps between a fixed
//! set of pages when the path changes, and turns link clicks into History API
//! navigation instead of full page loads.
//!
//! ## Architecture
//!
//! - [`reactive`]: Observable [`Signal`] cell with drop-released subscriptions
//! - [`component`]: View tree, [`Component`] trait, HTML rendering and DOM mounting
//! - [`dom`]: Event types shared by WASM and native builds
//! - [`router`]: [`Router`] (navigation state), [`Link`], history backends and the page switch
//! - [`pages`]: Home, About and Not-Found pages plus the shared navigation bar
//! - [`app`]: Composition root owning the router and the re-render loop
//! - [`launcher`]: WASM entry point and launcher configuration
//!
//! ## Example
//!
//! ```
//! use spa_router::{App, Component, History, MemoryHistory};
//!
//! let history = MemoryHistory::new("/");
//! let app = App::new(history.clone());
//!
//! assert!(app.render().render_to_string().contains("<h1>Home</h1>"));
//!
//! app.router().set_route("/about").unwrap();
//! assert_eq!(history.current_path(), "/about");
//! assert!(app.render().render_to_string().contains("<h1>About</h1>"));
//! ```

#![warn(missing_docs)]

// Core modules
pub mod component;
pub mod dom;
pub mod error;
pub mod logging;
pub mod reactive;

// Client-side routing
pub mod router;

// Application
pub mod app;
pub mod launcher;
pub mod pages;

// Logging backend used by the logging macros on native targets
#[doc(hidden)]
pub use tracing as __tracing;

pub use app::App;
#[cfg(target_arch = "wasm32")]
pub use app::MountedApp;
pub use component::{Component, ElementView, IntoView, View, ViewEventHandler};
#[cfg(not(target_arch = "wasm32"))]
pub use dom::SyntheticEvent;
pub use dom::{Event, EventType};
pub use error::{LauncherError, MountError, RouterError};
pub use launcher::LauncherConfig;
pub use reactive::{Signal, Subscription};
#[cfg(target_arch = "wasm32")]
pub use router::BrowserHistory;
pub use router::{History, HistoryListener, Link, MemoryHistory, PageRoute, Router, WeakRouter};

// Logging macros are automatically exported via #[macro_export]
// Users can access them as: spa_router::debug_log!, spa_router::info_log!, etc.
