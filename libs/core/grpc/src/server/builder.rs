//! gRPC Server utilities.

use super::config::ServerConfig;
use tokio::signal;
use tonic_health::ServingStatus;
use tonic_health::server::HealthReporter;
use tracing::{error, info};

/// Startup logging and health bookkeeping for tonic servers.
pub struct GrpcServer;

impl GrpcServer {
    /// Log server startup information for a single service.
    pub fn log_startup(config: &ServerConfig, service_name: &str) {
        Self::log_startup_multiple(config, &[service_name]);
    }

    pub fn log_startup_multiple(config: &ServerConfig, service_names: &[&str]) {
        info!(
            addr = %config.addr_string(),
            services = ?service_names,
            compression = config.enable_compression,
            max_message_size = config.max_decoding_message_size,
            "gRPC server starting"
        );
        info!("Health check service enabled (grpc.health.v1.Health)");
    }

    /// Marks `service_name` and the empty service name (used by k8s probes)
    /// as serving.
    pub async fn setup_health(health_reporter: &HealthReporter, service_name: &str) {
        Self::setup_health_multiple(health_reporter, &[service_name]).await;
    }

    pub async fn setup_health_multiple(health_reporter: &HealthReporter, service_names: &[&str]) {
        Self::set_status(health_reporter, service_names, ServingStatus::Serving).await;
        info!(services = ?service_names, "Services marked as serving");
    }

    /// Flips everything to NOT_SERVING so probes stop routing traffic while
    /// in-flight calls drain.
    pub async fn mark_not_serving(health_reporter: &HealthReporter, service_names: &[&str]) {
        Self::set_status(health_reporter, service_names, ServingStatus::NotServing).await;
        info!(services = ?service_names, "Services marked as not serving");
    }

    async fn set_status(health_reporter: &HealthReporter, service_names: &[&str], status: ServingStatus) {
        for service_name in service_names {
            health_reporter.set_service_status(*service_name, status).await;
        }
        health_reporter.set_service_status("", status).await;
    }
}

/// Resolves on the first SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating shutdown..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic_health::pb::health_check_response::ServingStatus as WireStatus;
    use tonic_health::pb::health_server::Health;
    use tonic_health::pb::HealthCheckRequest;
    use tonic_health::server::HealthService;

    async fn status_of(service: &HealthService, name: &str) -> i32 {
        service
            .check(tonic::Request::new(HealthCheckRequest {
                service: name.to_string(),
            }))
            .await
            .unwrap()
            .into_inner()
            .status
    }

    #[tokio::test]
    async fn test_setup_and_withdraw_health() {
        let (reporter, _server) = tonic_health::server::health_reporter();
        let service = HealthService::from_health_reporter(reporter.clone());

        GrpcServer::setup_health(&reporter, "courses.v1.CoursesService").await;
        assert_eq!(status_of(&service, "courses.v1.CoursesService").await, WireStatus::Serving as i32);
        assert_eq!(status_of(&service, "").await, WireStatus::Serving as i32);

        GrpcServer::mark_not_serving(&reporter, &["courses.v1.CoursesService"]).await;
        assert_eq!(status_of(&service, "").await, WireStatus::NotServing as i32);
    }
}
