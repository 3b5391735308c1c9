use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

use crate::common::DatabaseError;

/// Round-trips `SELECT 1` through the pool.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_owned());
    db.query_one_raw(stmt)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;

    debug!("PostgreSQL health check passed");
    Ok(())
}

/// Outcome of a timed health probe, serialized into the HTTP health payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub response_time_ms: u64,
}

impl HealthStatus {
    pub fn healthy(response_time_ms: u64) -> Self {
        Self {
            healthy: true,
            message: None,
            response_time_ms,
        }
    }

    pub fn unhealthy(message: String, response_time_ms: u64) -> Self {
        Self {
            healthy: false,
            message: Some(message),
            response_time_ms,
        }
    }
}

pub async fn check_health_detailed(db: &DatabaseConnection) -> HealthStatus {
    let start = Instant::now();
    let result = check_health(db).await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(()) => HealthStatus::healthy(elapsed),
        Err(e) => HealthStatus::unhealthy(e.to_string(), elapsed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbErr, MockDatabase};
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn test_check_health_detailed_healthy() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([("?column?", sea_orm::Value::from(1i32))])]])
            .into_connection();

        let status = check_health_detailed(&db).await;
        assert!(status.healthy);
        assert!(status.message.is_none());
    }

    #[tokio::test]
    async fn test_check_health_detailed_unhealthy() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let status = check_health_detailed(&db).await;
        assert!(!status.healthy);
        assert!(status.message.unwrap().contains("connection refused"));
    }

    #[test]
    fn test_health_status_unhealthy_keeps_message() {
        let status = HealthStatus::unhealthy("timeout".to_string(), 5000);
        assert!(!status.healthy);
        assert_eq!(status.message.as_deref(), Some("timeout"));
        assert_eq!(status.response_time_ms, 5000);
    }
}
