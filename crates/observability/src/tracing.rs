//! Tracing/logging initialization.
//!
//! Events go to stderr so reports printed on stdout stay clean. The filter is
//! read from `RUST_LOG` (default `info`) and the format from
//! `STOCKLEDGER_LOG_FORMAT` (`json` or `text`, default `json`).

use core::str::FromStr;

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "STOCKLEDGER_LOG_FORMAT";

/// Output format for log events.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable single-line events.
    Text,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "plain" => Ok(Self::Text),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

/// Initialize tracing using the format named by [`LOG_FORMAT_ENV`].
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_from_env() {
    let requested = std::env::var(LOG_FORMAT_ENV).ok();
    let parsed = requested.as_deref().map(LogFormat::from_str);

    init(match &parsed {
        Some(Ok(format)) => *format,
        _ => LogFormat::default(),
    });

    if let Some(Err(reason)) = parsed {
        ::tracing::warn!("{LOG_FORMAT_ENV}: {reason}; using json");
    }
}

/// Initialize tracing with an explicit format.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
}
