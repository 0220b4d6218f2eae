//! Defines the custom error type for the IPC bridge.

use thiserror::Error;

/// Errors that can occur while dispatching a message from the WebView.
///
/// These never reach the frontend; the bridge logs them and drops the
/// message, so a misbehaving UI cannot crash the backend.
#[derive(Debug, Error)]
pub enum IpcError {
    /// The message was not valid JSON or did not match [`IpcMessage`](super::events::IpcMessage).
    #[error("Malformed IPC message: {0}")]
    Parse(#[from] serde_json::Error),

    /// The message named a command this backend does not implement.
    #[error("Unknown IPC command: {0}")]
    UnknownCommand(String),
}
