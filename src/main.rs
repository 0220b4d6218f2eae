use content_shield::{app, config};
use std::sync::{Arc, Mutex};
use tao::{
    event::{Event, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
    window::WindowBuilder,
};
use wry::WebViewBuilder;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let initial_config = config::AppConfig::load().unwrap_or_default();

    // Create the event loop and window
    let event_loop = EventLoopBuilder::<app::events::UserEvent>::with_user_event().build();

    let (width, height) = initial_config.window_size;
    let (pos_x, pos_y) = initial_config.window_position;

    let window = WindowBuilder::new()
        .with_title("Content Shield")
        .with_inner_size(tao::dpi::LogicalSize::new(width, height))
        .with_position(tao::dpi::LogicalPosition::new(pos_x, pos_y))
        .with_min_inner_size(tao::dpi::LogicalSize::new(480, 360))
        .build(&event_loop)
        .expect("Failed to build Window");

    let window = Arc::new(window);

    // Apply startup protection before the first frame is composited, so
    // protected content never appears in a capture stream, not even briefly.
    if initial_config.protect_on_launch {
        window.set_content_protection(true);
        tracing::info!("Capture protection enabled at launch.");
    }

    // Create the shared application state and the event loop proxy
    let proxy = event_loop.create_proxy();
    let state = Arc::new(Mutex::new(app::state::AppState::new(initial_config)));

    #[cfg(target_os = "macos")]
    content_shield::platform::macos::ensure_main_menu();

    let ipc_handler_state = state.clone();
    let ipc_handler_proxy = proxy.clone();
    let ipc_handler = move |message: String| {
        app::handle_ipc_message(
            message,
            ipc_handler_proxy.clone(),
            ipc_handler_state.clone(),
        );
    };

    let webview = WebViewBuilder::new(&*window)
        .with_html(include_str!("ui/index.html"))
        .with_devtools(cfg!(debug_assertions))
        .with_ipc_handler(ipc_handler)
        .build()
        .expect("Failed to build WebView");

    let state_for_events = state.clone();
    let window_for_events = window.clone();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => {
                tracing::info!("Application initialized.");
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    tracing::info!("Close requested. Saving final window state...");
                    let mut state_guard = state_for_events.lock().unwrap();
                    let size = window_for_events.inner_size();
                    let position = window_for_events.outer_position().unwrap_or_default();
                    state_guard.config.window_size = (size.width.into(), size.height.into());
                    state_guard.config.window_position = (position.x.into(), position.y.into());

                    if let Err(e) = config::settings::save_config(&state_guard.config, None) {
                        tracing::error!("Failed to save config on exit: {}", e);
                    }
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    let mut state_guard = state_for_events.lock().unwrap();
                    state_guard.config.window_size = (size.width.into(), size.height.into());
                }
                WindowEvent::Moved(position) => {
                    let mut state_guard = state_for_events.lock().unwrap();
                    state_guard.config.window_position = (position.x.into(), position.y.into());
                }
                _ => (),
            },
            Event::UserEvent(user_event) => {
                app::handle_user_event(user_event, Some(window_for_events.as_ref()), &webview);
            }
            _ => (),
        }
    });
}
