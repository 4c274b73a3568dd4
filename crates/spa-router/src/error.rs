//! Error types for routing, mounting and launching.

use thiserror::Error;

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
	/// Window object not available.
	#[error("Window object not available")]
	NoWindow,
	/// The window exposes no History object.
	#[error("History API not available")]
	HistoryUnavailable,
	/// `history.pushState` rejected the path.
	#[error("Failed to push history entry: {0}")]
	PushFailed(String),
}

/// Error type for mounting views to the DOM.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
	/// Window object not available.
	#[error("Window object not available")]
	NoWindow,
	/// Document object not available.
	#[error("Document object not available")]
	NoDocument,
	/// No element with the configured id exists.
	#[error("No #{0} element found")]
	RootNotFound(String),
	/// Failed to create an element.
	#[error("Failed to create element")]
	CreateElementFailed,
	/// Failed to set an attribute.
	#[error("Failed to set attribute")]
	SetAttributeFailed,
	/// Failed to append a child element.
	#[error("Failed to append child")]
	AppendChildFailed,
	/// Failed to register an event listener.
	#[error("Failed to add event listener")]
	AddListenerFailed,
}

/// Error type for the application launcher.
#[derive(Debug, Error)]
pub enum LauncherError {
	/// The embedded launcher configuration is not valid JSON.
	#[error("Invalid launcher configuration: {0}")]
	Config(#[from] serde_json::Error),
	/// Mounting the application failed.
	#[error(transparent)]
	Mount(#[from] MountError),
	/// The router could not reach the browser history.
	#[error(transparent)]
	Router(#[from] RouterError),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(RouterError::NoWindow, "Window object not available")]
	#[case(RouterError::HistoryUnavailable, "History API not available")]
	#[case(
		RouterError::PushFailed("SecurityError".to_string()),
		"Failed to push history entry: SecurityError"
	)]
	fn test_router_error_display(#[case] error: RouterError, #[case] expected: &str) {
		assert_eq!(error.to_string(), expected);
	}

	#[rstest]
	fn test_mount_error_display() {
		assert_eq!(
			MountError::RootNotFound("app".to_string()).to_string(),
			"No #app element found"
		);
		assert_eq!(
			MountError::AddListenerFailed.to_string(),
			"Failed to add event listener"
		);
	}

	#[rstest]
	fn test_launcher_error_from_config() {
		let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
		let launcher_err = LauncherError::from(err);
		assert!(
			launcher_err
				.to_string()
				.starts_with("Invalid launcher configuration")
		);
	}

	#[rstest]
	fn test_launcher_error_transparent_mount() {
		let err = LauncherError::from(MountError::NoDocument);
		assert_eq!(err.to_string(), "Document object not available");
	}
}
