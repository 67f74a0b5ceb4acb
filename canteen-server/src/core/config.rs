use std::path::PathBuf;

use chrono_tz::Tz;

use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | working directory (database, logs) |
/// | DATABASE_URL | sqlite:<WORK_DIR>/canteen.db | SQLite location |
/// | HTTP_PORT | 3000 | HTTP port |
/// | ENVIRONMENT | development | development / staging / production |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request deadline |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | graceful shutdown budget |
/// | BUSINESS_TIMEZONE | UTC | IANA zone for report day boundaries |
/// | ENFORCE_TOTAL_AMOUNT | true | reject carts whose total mismatches menu prices |
/// | MENU_SEED_PATH | - | JSON menu inserted on startup |
///
/// Logging variables are read by [`LogSettings`](crate::utils::logger::LogSettings).
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/srv/canteen HTTP_PORT=8080 BUSINESS_TIMEZONE=Asia/Kolkata cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database and log files
    pub work_dir: String,
    /// Explicit database URL, overrides the work_dir default
    pub database_url: Option<String>,
    pub http_port: u16,
    /// JWT validation settings
    pub jwt: JwtConfig,
    /// development | staging | production
    pub environment: String,
    pub request_timeout_ms: u64,
    pub shutdown_timeout_ms: u64,
    /// Timezone used to cut business days for reports
    pub timezone: Tz,
    /// Recompute cart totals and reject mismatches
    pub enforce_total_amount: bool,
    /// Optional JSON file with menu items to insert on startup
    pub menu_seed_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            database_url: std::env::var("DATABASE_URL").ok(),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            timezone: std::env::var("BUSINESS_TIMEZONE")
                .ok()
                .and_then(|tz| match tz.parse::<Tz>() {
                    Ok(tz) => Some(tz),
                    Err(e) => {
                        tracing::warn!("Invalid BUSINESS_TIMEZONE '{}': {}, using UTC", tz, e);
                        None
                    }
                })
                .unwrap_or(Tz::UTC),
            enforce_total_amount: std::env::var("ENFORCE_TOTAL_AMOUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            menu_seed_path: std::env::var("MENU_SEED_PATH").ok(),
        }
    }

    /// Override the storage location and port
    ///
    /// Mostly used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.database_url = None;
        config.http_port = http_port;
        config.menu_seed_path = None;
        config
    }

    /// SQLite file path derived from `work_dir`
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("canteen.db")
    }

    /// Connection URL handed to sqlx
    pub fn database_url(&self) -> String {
        self.database_url
            .clone()
            .unwrap_or_else(|| format!("sqlite:{}", self.database_path().display()))
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
