//! Stream Chat View - Main Entry Point
//!
//! Launches the chat page. The view config comes from
//! `STREAM_CHAT_VIEW_CONFIG` on native targets and defaults in the browser.

use stream_chat_view::app::App;
use stream_chat_view::config::ChatUiConfig;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Stream Chat View - WASM initialized!".into());
    dioxus::LaunchBuilder::new()
        .with_context(ChatUiConfig::default())
        .launch(App);
}

// Native client (desktop)
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;

    // Set panic hook to print full backtrace
    std::panic::set_hook(Box::new(|panic_info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        eprintln!("\n=== PANIC CAUGHT ===");
        eprintln!("Panic info: {}", panic_info);
        eprintln!("Backtrace:\n{}", backtrace);
        eprintln!("=== END PANIC ===\n");
    }));

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Stream Chat View...");

    let config = match ChatUiConfig::from_env().context("Failed to load view config") {
        Ok(Some(config)) => config,
        Ok(None) => ChatUiConfig::default(),
        Err(e) => {
            tracing::warn!("{:#}. Falling back to defaults.", e);
            ChatUiConfig::default()
        }
    };

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
    Ok(())
}
