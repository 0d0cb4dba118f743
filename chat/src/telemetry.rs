use tracing_subscriber::{fmt::time::LocalTime, EnvFilter};

const DEFAULT_FILTER: &str = "chat=info,tracer=info";

/// Installs the global `fmt` subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::rfc_3339())
        .with_target(true)
        .init();
}
