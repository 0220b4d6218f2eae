//! Responsible for transforming the `AppState` into a `UiState` view model.
//!
//! This module acts as a presentation layer, preparing data specifically for
//! consumption by the WebView frontend.

use serde::Serialize;

use super::state::AppState;
use crate::config::AppConfig;
use crate::platform;

/// A serializable representation of the application state for the UI.
#[derive(Serialize, Clone, Debug)]
pub struct UiState {
    pub config: AppConfig,
    /// The secure-mode state last requested through the bridge.
    pub secure_mode: bool,
    /// Whether this platform can actually block capture.
    pub capture_block_supported: bool,
    pub status_message: String,
}

/// Creates the complete `UiState` from the current `AppState`.
pub fn generate_ui_state(state: &AppState) -> UiState {
    let capture_block_supported = platform::capture_block_supported();
    let status_message = if !capture_block_supported {
        "Capture protection is not supported on this platform.".to_string()
    } else if state.secure_mode {
        "Capture protection active. This window is excluded from screenshots and recordings."
            .to_string()
    } else {
        "Capture protection off.".to_string()
    };

    UiState {
        config: state.config.clone(),
        secure_mode: state.secure_mode,
        capture_block_supported,
        status_message,
    }
}
