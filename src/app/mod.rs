//! The application layer: IPC bridge, command handlers, state and events.
//!
//! The WebView frontend talks to the backend exclusively through
//! [`handle_ipc_message`]; the backend talks back by enqueueing [`UserEvent`]s
//! onto the tao event loop, which applies them via [`handle_user_event`] on
//! the UI-owning thread.

pub mod commands;
pub mod error;
pub mod events;
pub mod helpers;
pub mod proxy;
pub mod state;
pub mod surface;
pub mod view_model;

use std::sync::{Arc, Mutex};

use error::IpcError;
use events::{IpcMessage, UserEvent};
use proxy::EventProxy;
use state::AppState;
use surface::{apply_capture_protection, CaptureSurface};

/// Entry point for all IPC messages coming from the WebView.
///
/// Parse or dispatch failures are logged and swallowed; the bridge surfaces
/// no errors to the frontend.
pub fn handle_ipc_message<P: EventProxy>(message: String, proxy: P, state: Arc<Mutex<AppState>>) {
    if let Err(e) = dispatch(&message, proxy, state) {
        tracing::warn!("Dropping IPC message: {}", e);
    }
}

/// Routes a raw IPC message to its command handler.
fn dispatch<P: EventProxy>(
    raw: &str,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) -> Result<(), IpcError> {
    let message: IpcMessage = serde_json::from_str(raw)?;
    tracing::debug!("IPC command '{}' received.", message.command);

    match message.command.as_str() {
        "initialize" => commands::initialize(proxy, state),
        "enableSecureMode" => commands::enable_secure_mode(proxy, state),
        "disableSecureMode" => commands::disable_secure_mode(proxy, state),
        other => return Err(IpcError::UnknownCommand(other.to_string())),
    }
    Ok(())
}

/// Applies a [`UserEvent`] on the UI-owning thread.
///
/// Called from the tao event loop only. `surface` is the current foreground
/// window; `None` during startup/teardown windows of time.
pub fn handle_user_event<S: CaptureSurface>(
    event: UserEvent,
    surface: Option<&S>,
    webview: &wry::WebView,
) {
    match event {
        UserEvent::SetCaptureProtection(enabled) => {
            apply_capture_protection(surface, enabled);
        }
        UserEvent::StateUpdate(ui_state) => match serde_json::to_string(&*ui_state) {
            Ok(json) => {
                let script = format!("window.shieldStateUpdate({})", json);
                if let Err(e) = webview.evaluate_script(&script) {
                    tracing::warn!("Failed to push state update to WebView: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize UiState: {}", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[derive(Clone)]
    struct TestEventProxy {
        sender: mpsc::UnboundedSender<UserEvent>,
    }

    impl EventProxy for TestEventProxy {
        fn send_event(&self, event: UserEvent) {
            self.sender.send(event).expect("Test receiver dropped");
        }
    }

    fn test_setup() -> (
        TestEventProxy,
        mpsc::UnboundedReceiver<UserEvent>,
        Arc<Mutex<AppState>>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        let proxy = TestEventProxy { sender: tx };
        let state = Arc::new(Mutex::new(AppState::default()));
        (proxy, rx, state)
    }

    #[test]
    fn dispatch_routes_secure_mode_commands() {
        let (proxy, mut rx, state) = test_setup();

        let raw = r#"{"command":"enableSecureMode","payload":null}"#;
        dispatch(raw, proxy, state.clone()).expect("known command must dispatch");

        assert!(matches!(
            rx.try_recv(),
            Ok(UserEvent::SetCaptureProtection(true))
        ));
        assert!(state.lock().unwrap().secure_mode);
    }

    #[test]
    fn dispatch_accepts_messages_without_payload() {
        let (proxy, mut rx, state) = test_setup();

        dispatch(r#"{"command":"disableSecureMode"}"#, proxy, state)
            .expect("payload field is optional");

        assert!(matches!(
            rx.try_recv(),
            Ok(UserEvent::SetCaptureProtection(false))
        ));
    }

    #[test]
    fn dispatch_rejects_unknown_commands() {
        let (proxy, mut rx, state) = test_setup();

        let result = dispatch(r#"{"command":"selfDestruct"}"#, proxy, state);
        assert!(matches!(result, Err(IpcError::UnknownCommand(c)) if c == "selfDestruct"));
        assert!(rx.try_recv().is_err(), "no events for rejected commands");
    }

    #[test]
    fn dispatch_rejects_malformed_json() {
        let (proxy, mut rx, state) = test_setup();

        let result = dispatch("not json at all", proxy, state);
        assert!(matches!(result, Err(IpcError::Parse(_))));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn handle_ipc_message_swallows_errors() {
        let (proxy, _rx, state) = test_setup();
        // Must not panic, whatever the frontend sends.
        handle_ipc_message("{}".to_string(), proxy.clone(), state.clone());
        handle_ipc_message("garbage".to_string(), proxy, state);
    }
}
