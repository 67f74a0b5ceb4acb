//! Logging Infrastructure
//!
//! Structured logging setup with console output and optional daily rolling
//! file output.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DIRECTIVES: &str = "canteen_server=info,tower_http=info";

/// Logging settings from `LOG_LEVEL`, `LOG_JSON` and `LOG_DIR`
///
/// Read separately from [`Config`](crate::Config) so the subscriber is
/// installed before anything else logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
    pub dir: Option<String>,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            json: lookup("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            dir: lookup("LOG_DIR").filter(|dir| !dir.is_empty()),
        }
    }
}

/// Initialize the logger from the `LOG_*` environment variables
pub fn init_logger() -> anyhow::Result<Option<WorkerGuard>> {
    let settings = LogSettings::from_env();
    init_logger_with_file(Some(&settings.level), settings.json, settings.dir.as_deref())
}

/// Initialize the logger with optional JSON formatting and file output
///
/// `RUST_LOG` wins over `log_level` when set. The returned guard must be held
/// for the lifetime of the process or buffered file lines are lost.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) => EnvFilter::try_new(directives)?,
        Err(_) => match log_level {
            Some(level) => EnvFilter::try_new(format!(
                "canteen_server={level},tower_http={level},security={level},http_access={level}"
            ))?,
            None => EnvFilter::try_new(DEFAULT_DIRECTIVES)?,
        },
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(Path::new(dir))?;
            let appender = tracing_appender::rolling::daily(dir, "canteen-server");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_json = json.then(|| fmt::layer().json().with_target(true));
    let console_plain = (!json).then(|| {
        fmt::layer()
            .with_file(false)
            .with_line_number(false)
            .with_thread_ids(false)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_json)
        .with(console_plain)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
