//! gRPC server helpers.
//!
//! ```ignore
//! use grpc_client::server::{GrpcServer, ServerConfig, shutdown_signal};
//! use rpc::courses::v1::courses_service_server::{CoursesServiceServer, SERVICE_NAME};
//! use tonic::transport::Server;
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = tonic_health::server::health_reporter();
//!
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//!
//! Server::builder()
//!     .add_service(health_service)
//!     .add_service(CoursesServiceServer::new(my_impl))
//!     .serve_with_shutdown(config.socket_addr()?, shutdown_signal())
//!     .await?;
//! ```

mod builder;
mod config;

pub use builder::{GrpcServer, shutdown_signal};
pub use config::ServerConfig;
