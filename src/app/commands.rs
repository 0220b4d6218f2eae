//! Contains all the command handlers that are callable from the frontend via IPC.
//!
//! Each function in this module corresponds to a specific `IpcMessage::command`.
//! The handlers are fire-and-forget: they update the `AppState` mirror, enqueue
//! the actual flag write onto the UI thread via the `EventProxy`, and return
//! immediately. They may be called from any thread.

use std::sync::{Arc, Mutex};

use super::events::UserEvent;
use super::helpers::with_state_and_notify;
use super::proxy::EventProxy;
use super::state::AppState;
use super::view_model::generate_ui_state;

/// Enables secure mode: schedules setting the capture-block flag on the
/// foreground window.
///
/// Idempotent; repeated calls re-write the same flag value. If no window
/// exists by the time the queued task runs, the request is dropped on the
/// UI-thread side without an error.
pub fn enable_secure_mode<P: EventProxy>(proxy: P, state: Arc<Mutex<AppState>>) {
    tracing::info!("IPC 'enableSecureMode' received.");
    proxy.send_event(UserEvent::SetCaptureProtection(true));
    with_state_and_notify(&state, &proxy, |s| {
        s.secure_mode = true;
    });
}

/// Disables secure mode: schedules clearing of the capture-block flag.
/// Symmetric to [`enable_secure_mode`] in every other respect.
pub fn disable_secure_mode<P: EventProxy>(proxy: P, state: Arc<Mutex<AppState>>) {
    tracing::info!("IPC 'disableSecureMode' received.");
    proxy.send_event(UserEvent::SetCaptureProtection(false));
    with_state_and_notify(&state, &proxy, |s| {
        s.secure_mode = false;
    });
}

/// Handles the initial request for state from the frontend when it loads.
pub fn initialize<P: EventProxy>(proxy: P, state: Arc<Mutex<AppState>>) {
    let state_guard = state
        .lock()
        .expect("Mutex was poisoned. This should not happen.");
    let event = UserEvent::StateUpdate(Box::new(generate_ui_state(&state_guard)));
    proxy.send_event(event);
}
