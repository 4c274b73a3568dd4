//! Application root.
//!
//! [`App`] owns the one [`Router`] instance and renders the page for the
//! current route. In the browser, [`App::mount`] keeps the DOM in step with the
//! route: every change clears the root element and mounts the newly selected
//! page.

use crate::component::{Component, View};
use crate::router::{History, Router, render_page};

#[cfg(target_arch = "wasm32")]
use crate::{dom::EventHandle, error::MountError, reactive::Subscription};
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};

/// The application.
///
/// # Example
///
/// ```
/// use spa_router::{App, Component, MemoryHistory};
///
/// let app = App::new(MemoryHistory::new("/missing"));
/// assert!(app.render().text_content().starts_with("Whoops!"));
/// ```
#[derive(Debug, Clone)]
pub struct App {
	router: Router,
}

impl App {
	/// Creates the application on top of a history backend.
	pub fn new<H>(history: H) -> Self
	where
		H: History + 'static,
	{
		Self {
			router: Router::new(history),
		}
	}

	/// Returns the application's router.
	pub fn router(&self) -> &Router {
		&self.router
	}

	/// Mounts the application into `root` and re-renders on route changes.
	///
	/// The returned [`MountedApp`] owns the route subscription and the DOM
	/// listeners; dropping it stops re-rendering.
	#[cfg(target_arch = "wasm32")]
	pub fn mount(self, root: web_sys::Element) -> Result<MountedApp, MountError> {
		let state = Rc::new(RefCell::new(MountState {
			root,
			handles: Vec::new(),
			retired: Vec::new(),
		}));
		state.borrow_mut().remount(self.render())?;

		let weak_router = self.router.downgrade();
		let weak_state = Rc::downgrade(&state);
		let subscription = self.router.subscribe(move |route: &str| {
			let (Some(router), Some(state)) = (weak_router.upgrade(), weak_state.upgrade())
			else {
				return;
			};
			crate::debug_log!("re-rendering for {}", route);
			if let Err(err) = state.borrow_mut().remount(render_page(&router)) {
				crate::error_log!("Failed to re-render for {}: {}", route, err);
			}
		});

		Ok(MountedApp {
			_subscription: subscription,
			_state: state,
			app: self,
		})
	}
}

impl Component for App {
	fn render(&self) -> View {
		render_page(&self.router)
	}

	fn name() -> &'static str {
		"App"
	}
}

#[cfg(target_arch = "wasm32")]
struct MountState {
	root: web_sys::Element,
	/// Listeners of the page currently in the DOM.
	handles: Vec<EventHandle>,
	/// Listeners of the previous page. A re-render usually starts inside one
	/// of these handlers, so they are dropped one render later.
	retired: Vec<EventHandle>,
}

#[cfg(target_arch = "wasm32")]
impl MountState {
	fn remount(&mut self, view: View) -> Result<(), MountError> {
		self.root.set_inner_html("");
		let handles = view.mount(&self.root)?;
		self.retired = std::mem::replace(&mut self.handles, handles);
		Ok(())
	}
}

/// A mounted application.
///
/// Keeps the application rendering into its root element until dropped.
#[cfg(target_arch = "wasm32")]
pub struct MountedApp {
	_subscription: Subscription,
	_state: Rc<RefCell<MountState>>,
	app: App,
}

#[cfg(target_arch = "wasm32")]
impl MountedApp {
	/// Returns the mounted application.
	pub fn app(&self) -> &App {
		&self.app
	}
}

#[cfg(target_arch = "wasm32")]
impl std::fmt::Debug for MountedApp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MountedApp")
			.field("app", &self.app)
			.finish()
	}
}
