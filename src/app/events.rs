//! Defines the event and message structures for communication between the backend and frontend.

use serde::Deserialize;

use super::view_model::UiState;

/// Events sent from command handlers to the tao event loop (UI thread).
///
/// `SetCaptureProtection` is applied to the foreground window; `StateUpdate`
/// is forwarded to the WebView as a `window.shieldStateUpdate(...)` call.
#[derive(Debug)]
pub enum UserEvent {
    /// Set or clear the capture-block flag on the foreground window.
    SetCaptureProtection(bool),
    /// A complete state update to re-render the UI.
    StateUpdate(Box<UiState>),
}

/// A message received from the WebView via the IPC channel.
#[derive(Deserialize, Debug)]
pub struct IpcMessage {
    /// The name of the command to execute.
    pub command: String,
    /// The payload associated with the command, as a JSON value.
    ///
    /// None of the secure-mode commands carry one; it is kept so the wire
    /// format stays `{ command, payload }` and new commands can use it.
    #[serde(default)]
    pub payload: serde_json::Value,
}
