use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::{self, DbService};
use crate::utils::{AppError, ErrorCode};

/// Server state - shared by every request handler
///
/// Cheap to clone: the pool and the JWT service are reference counted.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | server configuration |
/// | pool | SQLite connection pool (menu, orders) |
/// | jwt_service | bearer token validation |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Manual construction, mostly for tests
    ///
    /// [`initialize()`](Self::initialize) is the normal entry point.
    pub fn new(config: Config, pool: SqlitePool, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            pool,
            jwt_service,
        }
    }

    /// Initialize state from configuration
    ///
    /// 1. Ensure the working directory exists
    /// 2. Open the database and apply migrations
    /// 3. Seed the menu when `menu_seed_path` is set
    /// 4. Build the JWT service
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.work_dir).map_err(|e| {
            AppError::with_message(
                ErrorCode::ConfigError,
                format!("Failed to create work dir {}: {e}", config.work_dir),
            )
        })?;

        let db_service = DbService::new(&config.database_url()).await?;

        if let Some(seed_path) = &config.menu_seed_path {
            let inserted = db::seed::seed_menu_from_file(&db_service.pool, seed_path).await?;
            tracing::info!(path = %seed_path, inserted, "Menu seed applied");
        }

        let jwt_service = JwtService::try_new(config.jwt.clone())
            .map_err(|e| AppError::with_message(ErrorCode::ConfigError, e.to_string()))?;

        Ok(Self::new(
            config.clone(),
            db_service.pool,
            Arc::new(jwt_service),
        ))
    }

    pub fn get_jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }
}
