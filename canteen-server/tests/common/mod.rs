//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use canteen_server::auth::{JwtConfig, JwtService, Role};
use canteen_server::db::seed::seed_menu;
use canteen_server::{Config, DbService, ServerState, api};
use http::{Request, StatusCode};
use serde_json::Value;
use shared::models::MenuItemCreate;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub state: ServerState,
    pub router: Router,
    // Keeps the database directory alive for the test
    _dir: TempDir,
}

fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-long-enough-for-hs256".to_string(),
        expiration_minutes: 60,
        issuer: "canteen-auth".to_string(),
        audience: "canteen-server".to_string(),
    }
}

pub async fn test_db() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("canteen.db").display());
    let db = DbService::new(&url).await.unwrap();
    (db.pool, dir)
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Like [`spawn_app`], with a hook to adjust the config before the router is built
pub async fn spawn_app_with(configure: impl FnOnce(&mut Config)) -> TestApp {
    let (pool, dir) = test_db().await;

    let mut config = Config::with_overrides(dir.path().display().to_string(), 0);
    config.jwt = jwt_config();
    config.enforce_total_amount = true;
    config.timezone = chrono_tz::Tz::UTC;
    configure(&mut config);

    let jwt_service = Arc::new(JwtService::try_new(config.jwt.clone()).unwrap());
    let state = ServerState::new(config, pool, jwt_service);
    let router = api::build_router(state.clone());

    TestApp {
        state,
        router,
        _dir: dir,
    }
}

impl TestApp {
    pub fn pool(&self) -> &SqlitePool {
        &self.state.pool
    }

    pub fn token(&self, role: Role) -> String {
        self.state
            .get_jwt_service()
            .generate_token(&format!("{}-1", role), role)
            .unwrap()
    }

    pub async fn seed(&self, items: &[(&str, f64, i64)]) {
        seed_items(self.pool(), items).await;
    }

    pub async fn stock_of(&self, name: &str) -> i64 {
        stock_of(self.pool(), name).await
    }

    /// Send a request and return status plus raw body
    pub async fn send(&self, req: Request<Body>) -> (StatusCode, http::HeaderMap, Vec<u8>) {
        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, headers, body.to_vec())
    }

    /// Send a request and parse the body as JSON
    pub async fn send_json(&self, req: Request<Body>) -> (StatusCode, Value) {
        let (status, _, body) = self.send(req).await;
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }
}

pub async fn seed_items(pool: &SqlitePool, items: &[(&str, f64, i64)]) {
    let items: Vec<MenuItemCreate> = items
        .iter()
        .map(|(name, price, quantity)| MenuItemCreate {
            name: name.to_string(),
            price: *price,
            category: "Snacks".to_string(),
            image_url: String::new(),
            quantity: *quantity,
        })
        .collect();
    seed_menu(pool, &items).await.unwrap();
}

pub async fn stock_of(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar("SELECT quantity FROM menu_item WHERE name = ?")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn order_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn post_json(uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::post(uri).header(http::header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(token) = token {
        builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}
