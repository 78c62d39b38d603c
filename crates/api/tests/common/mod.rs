#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use runqc_api::auth::jwt::{generate_access_token, JwtConfig};
use runqc_api::config::ServerConfig;
use runqc_api::router::build_app_router;
use runqc_api::state::AppState;
use runqc_core::types::DbId;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        db_max_connections: 5,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState::new(pool, test_config()))
}

/// Bearer token for `user_id`, signed with the test secret.
pub fn token_for(user_id: DbId) -> String {
    generate_access_token(user_id, &test_config().jwt).unwrap()
}

/// Send a request, optionally authenticated and with a JSON body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    user_id: Option<DbId>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(id) = user_id {
        builder = builder.header("authorization", format!("Bearer {}", token_for(id)));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, user_id: Option<DbId>) -> Response<Body> {
    send(app, Method::GET, uri, user_id, None).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    user_id: DbId,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(user_id), Some(body)).await
}

pub async fn delete(app: Router, uri: &str, user_id: DbId) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(user_id), None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Ids created by [`seed`].
pub struct Seed {
    pub admin: DbId,
    pub technician: DbId,
    pub reviewer: DbId,
    pub run: DbId,
    pub container: DbId,
    pub pool: DbId,
    pub lane1: DbId,
    pub lane2: DbId,
    pub library: DbId,
    pub aliquot: DbId,
    pub passed: DbId,
}

async fn insert_id(pool: &PgPool, sql: &str) -> DbId {
    let row: (DbId,) = sqlx::query_as(sql).fetch_one(pool).await.unwrap();
    row.0
}

/// One run on a two-lane container, one pooled aliquot in both lanes, and
/// an admin, a technician and a run reviewer.
pub async fn seed(pool: &PgPool) -> Seed {
    let admin = insert_id(
        pool,
        "INSERT INTO users (username, is_admin) VALUES ('admin', true) RETURNING id",
    )
    .await;
    let technician =
        insert_id(pool, "INSERT INTO users (username) VALUES ('tech') RETURNING id").await;
    let reviewer = insert_id(
        pool,
        "INSERT INTO users (username, is_run_reviewer) VALUES ('alice', true) RETURNING id",
    )
    .await;

    let run = insert_id(pool, "INSERT INTO runs (name) VALUES ('RUN_A') RETURNING id").await;
    let container = insert_id(
        pool,
        "INSERT INTO containers (identification_barcode) VALUES ('FC001') RETURNING id",
    )
    .await;
    let pool_id = insert_id(pool, "INSERT INTO pools (name) VALUES ('IPO1') RETURNING id").await;
    let lane1 = insert_id(
        pool,
        &format!(
            "INSERT INTO partitions (container_id, partition_number, pool_id) \
             VALUES ({container}, 1, {pool_id}) RETURNING id"
        ),
    )
    .await;
    let lane2 = insert_id(
        pool,
        &format!(
            "INSERT INTO partitions (container_id, partition_number) \
             VALUES ({container}, 2) RETURNING id"
        ),
    )
    .await;
    let library = insert_id(pool, "INSERT INTO libraries (name) VALUES ('LIB1') RETURNING id").await;
    let aliquot = insert_id(
        pool,
        &format!(
            "INSERT INTO library_aliquots (name, library_id) VALUES ('LDI1', {library}) RETURNING id"
        ),
    )
    .await;
    let passed = insert_id(
        pool,
        "SELECT id FROM run_library_qc_statuses WHERE description = 'Passed'",
    )
    .await;

    Seed {
        admin,
        technician,
        reviewer,
        run,
        container,
        pool: pool_id,
        lane1,
        lane2,
        library,
        aliquot,
        passed,
    }
}
