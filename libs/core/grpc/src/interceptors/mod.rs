/// Re-export tonic's Interceptor trait for convenience
pub use tonic::service::Interceptor;

pub mod allow_list;
pub mod client_id;

pub use allow_list::{AllowListConfig, AllowListInterceptor, CallerInfo};
pub use client_id::ClientIdInterceptor;

/// Metadata keys carrying the caller's client id, in lookup order
pub const CLIENT_ID_HEADERS: [&str; 2] = ["x-client-id", "client-id"];
