//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use tracing::{error, info};

use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_TITLE};
use crate::domain::config::AppConfig;
use crate::domain::platform::Platform;
use crate::features::home::page::HomePage;

actions!(showcase, [Quit]);

/// Run the Showcase GUI application
pub fn run_app(config: AppConfig) {
    let platform = Platform::resolve(config.platform.as_deref());
    info!(platform = %platform, "Resolved platform");

    Application::new().run(move |cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        let quit_key = if cfg!(target_os = "macos") { "cmd-q" } else { "ctrl-q" };
        cx.bind_keys([KeyBinding::new(quit_key, Quit, None)]);

        // Quit the app when the window is closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Create main window
        let size = gpui::size(
            px(config.window.width.max(MIN_WINDOW_WIDTH)),
            px(config.window.height.max(MIN_WINDOW_HEIGHT)),
        );
        let bounds = Bounds::centered(None, size, cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(gpui::size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(WINDOW_TITLE)),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, move |_window, cx| {
            cx.new(|cx| HomePage::new(platform, cx))
        });
        if let Err(err) = opened {
            error!(error = %err, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
