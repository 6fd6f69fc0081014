use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber.
///
/// Priority: `RUST_LOG` > verbosity flag > `default_level` (usually from the
/// config file). Calling it twice is harmless; the second call is ignored.
pub fn init(verbosity: u8, default_level: &str) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = filter_for(verbosity, default_level, rust_log.as_deref());

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();
}

/// An unparsable `RUST_LOG` or config level is skipped, not fatal.
fn filter_for(verbosity: u8, default_level: &str, rust_log: Option<&str>) -> EnvFilter {
    if let Some(filter) = rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return filter;
    }

    match verbosity {
        0 => EnvFilter::try_new(default_level).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}
