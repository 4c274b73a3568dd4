//! Client-Side Router for spa-router.
//!
//! This module provides client-side routing for single-page applications:
//!
//! - [`Router`]: Holds the current route and keeps it in sync with the history stack
//! - [`Link`]: Route-aware link that is inert when it points at the current route
//! - [`History`]: Backend abstraction over the browser History API
//! - [`PageRoute`]: Exact-match dispatch from a path to a page
//!
//! ## Example
//!
//! ```
//! use spa_router::router::{History, MemoryHistory, PageRoute, Router};
//!
//! let history = MemoryHistory::new("/");
//! let router = Router::new(history.clone());
//!
//! router.set_route("/about").unwrap();
//! assert_eq!(history.current_path(), "/about");
//! assert_eq!(PageRoute::resolve(&router.route()), PageRoute::About);
//!
//! history.back();
//! assert_eq!(router.route(), "/");
//! ```

mod components;
mod core;
mod history;
mod switch;

pub use self::core::{Router, WeakRouter};
pub use components::Link;
#[cfg(target_arch = "wasm32")]
pub use history::BrowserHistory;
pub use history::{History, HistoryListener, MemoryHistory, PopStateCallback};
pub use switch::{ABOUT_PATH, HOME_PATH, PageRoute, render_page};
