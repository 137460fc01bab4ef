//! Logging setup and timestamp formatting.
//!
//! Every event goes to stdout prefixed with `[d Mon HH:MM:SS]`, for example
//! `[7 Mar 09:22:01]`.

use chrono::{DateTime, Local, TimeZone};
use std::fmt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// `strftime` pattern for log timestamps.
pub const TIMESTAMP_FORMAT: &str = "%-d %b %H:%M:%S";

/// Format `time` with [`TIMESTAMP_FORMAT`].
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time formatted with [`TIMESTAMP_FORMAT`].
pub fn timestamp() -> String {
    format_timestamp(&Local::now())
}

/// Bracketed local-time clock for the fmt layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatClock;

impl FormatTime for ChatClock {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "[{}]", timestamp())
    }
}

/// Install the global subscriber.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_timer(ChatClock)
        .with_target(false)
        .init();
}
