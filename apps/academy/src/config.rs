use core_config::{ConfigError, Environment, FromEnv, env_parse};
use database::postgres::PostgresConfig;
use domain_courses::SearchConfig;
use grpc_client::AllowListConfig;

/// Service name reported by the health endpoints
pub const SERVICE_NAME: &str = "academy";

/// Everything the academy server reads from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub grpc: grpc_client::server::ServerConfig,
    pub http: core_config::server::ServerConfig,
    pub postgres: PostgresConfig,
    pub search: SearchConfig,
    pub allow_list: AllowListConfig,
    /// Apply pending migrations before serving (`RUN_MIGRATIONS`)
    pub run_migrations: bool,
}

impl FromEnv for AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            grpc: grpc_client::server::ServerConfig::from_env()?,
            http: core_config::server::ServerConfig::from_env()?,
            postgres: PostgresConfig::from_env()?,
            search: SearchConfig::from_env()?,
            allow_list: AllowListConfig::from_env()?,
            run_migrations: env_parse("RUN_MIGRATIONS", false)?,
        })
    }
}
