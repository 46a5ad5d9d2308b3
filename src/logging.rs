//! Logging setup.
//!
//! Logs go to stderr through a `tracing-subscriber` fmt layer; stdout carries
//! only the JSON report.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Map the `-v` count to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `verbosity` when set.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level_for(verbosity).into()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_filter(filter);

    if let Err(e) = tracing_subscriber::registry().with(fmt_layer).try_init() {
        tracing::debug!("tracing subscriber already set: {}", e);
    }
}
