use booking::ui::App;

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    #[cfg(not(target_arch = "wasm32"))]
    {
        let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(log_filter)
            .try_init();
    }

    #[cfg(feature = "desktop")]
    dioxus::LaunchBuilder::new()
        .with_cfg(booking::ui::make_config())
        .launch(App);

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    dioxus::launch(App);

    #[cfg(not(any(feature = "web", feature = "desktop")))]
    {
        tracing::error!("Built without a renderer; enable the `desktop` or `web` feature");
        std::process::exit(1);
    }
}
