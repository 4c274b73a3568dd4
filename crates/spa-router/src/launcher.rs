//! Client launcher.
//!
//! Boots the application in the browser: reads the optional launcher
//! configuration embedded in the page, installs the panic hook, binds the
//! router to `window.history` and mounts the app into its root element.
//!
//! The configuration is a JSON document in a script element:
//!
//! ```html
//! <script type="application/json" id="spa-router-config">
//!   { "root_id": "app", "panic_hook": true }
//! </script>
//! <div id="app"></div>
//! ```
//!
//! Every field is optional. Without the element, [`LauncherConfig::default`]
//! is used.

use crate::warn_log;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use crate::{
	app::{App, MountedApp},
	error::{LauncherError, MountError},
	info_log,
	router::BrowserHistory,
};

/// Id of the script element holding the launcher configuration.
pub const CONFIG_ELEMENT_ID: &str = "spa-router-config";

/// Launcher configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
	/// Id of the element the application is mounted into.
	pub root_id: String,
	/// Whether to install `console_error_panic_hook`.
	///
	/// Has no effect unless the `console_error_panic_hook` feature is enabled.
	pub panic_hook: bool,
}

impl Default for LauncherConfig {
	fn default() -> Self {
		Self {
			root_id: "app".to_string(),
			panic_hook: true,
		}
	}
}

impl LauncherConfig {
	/// Parses a configuration document. Missing fields take their defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Builds the configuration from the text of the config element.
	///
	/// `None` means the element is absent. An element with only whitespace is
	/// reported and treated the same way.
	pub fn from_element_text(text: Option<&str>) -> Result<Self, serde_json::Error> {
		match text {
			None => Ok(Self::default()),
			Some(text) if text.trim().is_empty() => {
				warn_log!("#{} is empty, using default configuration", CONFIG_ELEMENT_ID);
				Ok(Self::default())
			}
			Some(text) => Self::from_json(text),
		}
	}

	/// Reads the configuration from the current document.
	///
	/// Falls back to the default configuration when the config element is
	/// missing or empty.
	#[cfg(target_arch = "wasm32")]
	pub fn from_document(document: &web_sys::Document) -> Result<Self, LauncherError> {
		let text = document
			.get_element_by_id(CONFIG_ELEMENT_ID)
			.map(|element| element.text_content().unwrap_or_default());

		Ok(Self::from_element_text(text.as_deref())?)
	}
}

/// Launches the application with `config`.
///
/// The returned [`MountedApp`] must be kept alive for the application to keep
/// responding to navigation.
#[cfg(target_arch = "wasm32")]
pub fn launch(config: &LauncherConfig) -> Result<MountedApp, LauncherError> {
	#[cfg(feature = "console_error_panic_hook")]
	if config.panic_hook {
		console_error_panic_hook::set_once();
	}

	let window = web_sys::window().ok_or(MountError::NoWindow)?;
	let document = window.document().ok_or(MountError::NoDocument)?;
	let root = document
		.get_element_by_id(&config.root_id)
		.ok_or_else(|| MountError::RootNotFound(config.root_id.clone()))?;

	let app = App::new(BrowserHistory::new()?);
	let mounted = app.mount(root)?;
	info_log!("Mounted application into #{}", config.root_id);
	Ok(mounted)
}

/// WASM entry point.
///
/// Enabled by the `start` feature.
#[cfg(all(target_arch = "wasm32", feature = "start"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
	use wasm_bindgen::JsValue;

	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or_else(|| JsValue::from_str("No document object"))?;
	let config = LauncherConfig::from_document(&document)
		.map_err(|e| JsValue::from_str(&e.to_string()))?;

	let mounted = launch(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
	// WASM apps don't terminate; keep the app mounted for the page lifetime.
	std::mem::forget(mounted);

	Ok(())
}
