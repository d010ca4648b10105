use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn parse_level(level: Option<&str>) -> Level {
    level
        .and_then(|level| Level::from_str(level.trim()).ok())
        .unwrap_or(Level::INFO)
}

/// Install the global subscriber. Unknown level names fall back to INFO.
pub fn init_tracing_subscriber(level: Option<&str>) {
    tracing_subscriber::registry()
        .with(LevelFilter::from_level(parse_level(level)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
