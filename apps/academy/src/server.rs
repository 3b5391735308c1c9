//! gRPC server initialization and lifecycle management
//!
//! This module handles all server setup:
//! - Tracing initialization
//! - Database connection and optional migrations
//! - Service creation, with AI search when its providers are configured
//! - gRPC server configuration, allow-list and startup
//! - Health reporting over gRPC (grpc.health.v1.Health) and HTTP

use std::sync::Arc;

use ai_providers::{ChatProvider, EmbeddingProvider, OpenAICompatibleChat, VertexAIProvider};
use core_config::{Environment, FromEnv};
use database::postgres::QueryExecutor;
use domain_courses::{CourseService, PgCourseRepository, queries};
use eyre::{Result, WrapErr};
use grpc_client::AllowListInterceptor;
use grpc_client::server::{GrpcServer, shutdown_signal};
use rpc::courses::v1::courses_service_server::{CoursesServiceServer, SERVICE_NAME as GRPC_SERVICE};
use tonic::codec::CompressionEncoding;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::Server;
use tonic_health::server::health_reporter;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::{AppConfig, SERVICE_NAME};
use crate::health::{self, HealthState};
use crate::service::CoursesServiceImpl;

type AiProviders = (Arc<dyn EmbeddingProvider>, Arc<dyn ChatProvider>);

/// Embedding and chat clients, or `None` when either is not configured.
fn ai_providers() -> Option<AiProviders> {
    let embedder = match VertexAIProvider::from_env() {
        Ok(provider) => provider,
        Err(e) => {
            warn!(error = %e, "Embedding provider unavailable, AI search disabled");
            return None;
        }
    };
    let chat = match OpenAICompatibleChat::from_env() {
        Ok(provider) => provider,
        Err(e) => {
            warn!(error = %e, "Chat provider unavailable, AI search disabled");
            return None;
        }
    };
    Some((Arc::new(embedder), Arc::new(chat)))
}

/// Run the academy server
///
/// 1. Sets up structured logging (JSON for prod, pretty for dev)
/// 2. Connects to the database with retry logic, migrating when asked
/// 3. Creates the repository and service layers
/// 4. Serves the HTTP health shim in the background
/// 5. Serves gRPC until SIGINT/SIGTERM, then withdraws health and closes
///    the pool
///
/// # Errors
///
/// Returns an error if configuration is invalid, the database is
/// unreachable, a migration fails, or either listener cannot bind.
pub async fn run() -> Result<()> {
    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment);

    let config = AppConfig::from_env().wrap_err("Failed to load configuration")?;

    info!("Connecting to database...");
    let db = database::postgres::connect_from_config_with_retry(config.postgres.clone(), None)
        .await
        .wrap_err("Failed to connect to database")?;
    info!("Connected to database successfully");

    if config.run_migrations {
        database::postgres::run_migrations::<migration::Migrator>(&db, SERVICE_NAME)
            .await
            .wrap_err("Failed to run migrations")?;
    }

    let executor = QueryExecutor::new(db.clone(), Arc::new(queries::registry()));
    let mut service = CourseService::new(PgCourseRepository::new(executor), config.search);
    if let Some((embedder, chat)) = ai_providers() {
        service = service.with_ai(embedder, chat);
        info!("AI course search enabled");
    }

    let grpc_addr = config
        .grpc
        .socket_addr()
        .wrap_err("Invalid gRPC listen address")?;
    let http_addr = config
        .http
        .socket_addr()
        .wrap_err("Invalid HTTP listen address")?;

    // HTTP health shim
    let app = health::router(HealthState {
        db: db.clone(),
        grpc_address: config.grpc.addr_string(),
        environment: config.environment,
    })
    .layer(TraceLayer::new_for_http());
    let listener = tokio::net::TcpListener::bind(http_addr)
        .await
        .wrap_err_with(|| format!("Failed to bind HTTP listener on {http_addr}"))?;
    info!(addr = %http_addr, "HTTP health endpoint listening");
    let http = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!(error = %e, "HTTP health server failed");
        }
    });

    let (health_reporter, health_service) = health_reporter();
    GrpcServer::setup_health(&health_reporter, GRPC_SERVICE).await;

    let mut courses = CoursesServiceServer::new(CoursesServiceImpl::new(service))
        .max_decoding_message_size(config.grpc.max_decoding_message_size)
        .max_encoding_message_size(config.grpc.max_encoding_message_size);
    if config.grpc.enable_compression {
        courses = courses
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd);
    }
    let courses = InterceptedService::new(courses, AllowListInterceptor::new(config.allow_list));

    GrpcServer::log_startup(&config.grpc, GRPC_SERVICE);

    let served = Server::builder()
        .add_service(health_service)
        .add_service(courses)
        .serve_with_shutdown(grpc_addr, shutdown_signal())
        .await;

    GrpcServer::mark_not_serving(&health_reporter, &[GRPC_SERVICE]).await;
    http.abort();
    if let Err(e) = db.close().await {
        warn!(error = %e, "Failed to close database pool");
    }
    info!("Academy server stopped");

    served.wrap_err("gRPC server failed")
}
