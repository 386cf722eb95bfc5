//! Rolling Logger
//!
//! A `tracing` layer that mirrors every event to the browser console and
//! keeps a bounded history of formatted lines for in-app display.

mod history;
mod layer;

pub use history::LogHistory;
pub use layer::ConsoleLayer;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;

/// Install the global subscriber and return the shared history
///
/// Fails if a global subscriber is already set.
pub fn init(level: &str, capacity: usize) -> Result<LogHistory, TryInitError> {
    let history = LogHistory::new(capacity);
    tracing_subscriber::registry()
        .with(ConsoleLayer::new(history.clone()).with_filter(parse_level(level)))
        .try_init()?;
    Ok(history)
}

/// Parse a level name ("debug", "warn", ...), falling back to INFO
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::INFO)
}
