//! Canteen Server - campus canteen ordering backend
//!
//! Customers check out anonymously, counter staff redeem orders by scanning
//! their QR code, managers export a daily sales report.
//!
//! # Module layout
//!
//! ```text
//! canteen-server/src/
//! ├── core/          # configuration, state, server lifecycle
//! ├── auth/          # JWT validation, role gate
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool, repositories, menu seeding
//! ├── orders/        # checkout and redemption
//! ├── reports/       # daily report and CSV export
//! └── utils/         # logging, time, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod reports;
pub mod utils;

pub use auth::{CurrentUser, JwtService, Role};
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use utils::{AppError, AppResult};

pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
   ______            __
  / ____/___ _____  / /____  ___  ____
 / /   / __ `/ __ \/ __/ _ \/ _ \/ __ \
/ /___/ /_/ / / / / /_/  __/  __/ / / /
\____/\__,_/_/ /_/\__/\___/\___/_/ /_/
    "#
    );
}
