//! HTTP health shim served next to the gRPC listener.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use core_config::Environment;
use database::postgres::{DatabaseConnection, HealthStatus, check_health_detailed};
use grpc_client::conversions::datetime_to_rfc3339;
use serde::Serialize;

use crate::config::SERVICE_NAME;

#[derive(Clone)]
pub struct HealthState {
    pub db: DatabaseConnection,
    /// Address the gRPC server listens on, as reported to callers
    pub grpc_address: String,
    pub environment: Environment,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub grpc: String,
    pub environment: &'static str,
    pub database: HealthStatus,
    pub timestamp: String,
}

/// 200 with `status: "OK"` while the database answers, 503 otherwise.
pub async fn health_handler(State(state): State<HealthState>) -> Response {
    let database = check_health_detailed(&state.db).await;
    let (code, status) = if database.healthy {
        (StatusCode::OK, "OK")
    } else {
        tracing::error!(error = ?database.message, "Health check failed");
        (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE")
    };

    let body = HealthResponse {
        status,
        service: SERVICE_NAME,
        grpc: state.grpc_address.clone(),
        environment: state.environment.as_str(),
        database,
        timestamp: datetime_to_rfc3339(Utc::now()),
    };
    (code, Json(body)).into_response()
}

pub async fn root_handler() -> &'static str {
    "Academy microservice is running 🎓"
}

pub fn router(state: HealthState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}
