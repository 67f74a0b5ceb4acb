//! Server Implementation
//!
//! HTTP server startup and graceful shutdown

use std::net::SocketAddr;
use std::time::Duration;

use crate::api::build_router;
use crate::core::{Config, ServerState};
use crate::utils::{AppError, AppResult};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with initialized state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> AppResult<()> {
        let state = self.state.clone();
        let pool = state.pool.clone();
        let app = build_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
        tracing::info!("Canteen server listening on {}", addr);

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

        let budget = Duration::from_millis(self.config.shutdown_timeout_ms);
        if tokio::time::timeout(budget, pool.close()).await.is_err() {
            tracing::warn!("Database pool did not close within {:?}", budget);
        }

        Ok(())
    }
}
