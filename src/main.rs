//! Native entry point for local development against a running backend.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    eframe::run_native(
        "Discord ping aliases",
        eframe::NativeOptions::default(),
        Box::new(|cc| Ok(Box::new(discord_name_ui::AliasLookupApp::new(cc)))),
    )
}

// The wasm build starts from the library's `start` entry point instead.
#[cfg(target_arch = "wasm32")]
fn main() {}
