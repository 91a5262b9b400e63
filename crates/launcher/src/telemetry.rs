// crates/launcher/src/telemetry.rs

/// Installs the global subscriber. `LOG_LEVEL` takes an `EnvFilter`
/// directive such as `debug` or `swarm_game=trace`; the default is `info`.
pub fn init() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};
    let filter = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init();
}
