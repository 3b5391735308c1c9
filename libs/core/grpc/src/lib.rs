//! # gRPC plumbing shared by the academy services
//!
//! Server-side helpers for tonic services: environment-driven server
//! configuration, health reporting, graceful shutdown, the caller allow-list
//! interceptor, and proto ↔ domain conversion helpers.
//!
//! ## Quick Start
//!
//! ```ignore
//! use grpc_client::server::{GrpcServer, ServerConfig, shutdown_signal};
//! use grpc_client::{AllowListConfig, AllowListInterceptor};
//! use core_config::FromEnv;
//! use rpc::courses::v1::courses_service_server::{CoursesServiceServer, SERVICE_NAME};
//! use tonic::transport::Server;
//!
//! let config = ServerConfig::from_env()?;
//! let allow_list = AllowListInterceptor::new(AllowListConfig::from_env()?);
//! let (health_reporter, health_service) = tonic_health::server::health_reporter();
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//!
//! Server::builder()
//!     .add_service(health_service)
//!     .add_service(CoursesServiceServer::with_interceptor(my_impl, allow_list))
//!     .serve_with_shutdown(config.socket_addr()?, shutdown_signal())
//!     .await?;
//! ```
//!
//! ### Calling a protected service
//! ```ignore
//! use grpc_client::ClientIdInterceptor;
//! use rpc::courses::v1::courses_service_client::CoursesServiceClient;
//!
//! let channel = tonic::transport::Channel::from_static("http://[::1]:50051").connect().await?;
//! let client = CoursesServiceClient::with_interceptor(
//!     channel,
//!     ClientIdInterceptor::new("campus-api-gateway"),
//! );
//! ```

pub mod conversions;
pub mod error;
pub mod interceptors;
pub mod server;

pub use error::{GrpcError, GrpcResult, ToTonicOption, ToTonicResult};
pub use interceptors::{AllowListConfig, AllowListInterceptor, ClientIdInterceptor};
