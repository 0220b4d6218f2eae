//! Defines the central, mutable state of the application.

use crate::config::AppConfig;

/// Holds the complete, mutable state of the application.
///
/// This struct is wrapped in an `Arc<Mutex<...>>` to allow for safe, shared
/// access from different threads (the main event loop and IPC handlers).
///
/// Note that `secure_mode` mirrors the *requested* mode for UI display. The
/// capture-block flag itself is owned by the OS window layer and is only
/// written on the UI thread; if no window exists when a toggle runs, the
/// flag stays untouched while the mirror still reflects the last request.
pub struct AppState {
    /// The application's configuration settings.
    pub config: AppConfig,
    /// The last secure-mode state requested through the bridge.
    pub secure_mode: bool,
}

impl AppState {
    /// Creates a fresh state from an already-loaded configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            secure_mode: config.protect_on_launch,
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
