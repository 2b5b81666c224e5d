use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use neurodash::app::App;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

fn main() {
    // RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_filter(filter),
        )
        .init();

    tracing::info!("Starting NeuroDash v{}", env!("CARGO_PKG_VERSION"));

    let window = WindowBuilder::new()
        .with_title("NeuroDash")
        .with_inner_size(LogicalSize::new(1280.0, 860.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(App);
}
