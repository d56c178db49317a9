use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a stderr logger filtered by `RUST_LOG`, defaulting to warnings only.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
