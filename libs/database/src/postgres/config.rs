use sea_orm::ConnectOptions;
use std::time::Duration;
use tracing::log::LevelFilter;

#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_parse, env_required};

/// Connection pool settings.
///
/// The pool is deliberately small: every request holds at most one connection,
/// and a transaction keeps its connection until it commits or rolls back.
///
/// ```ignore
/// let config = PostgresConfig::from_env()?;
/// let db = database::postgres::connect_from_config(config).await?;
/// ```
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
    /// Log every statement through sqlx
    pub sqlx_logging: bool,
    pub sqlx_logging_level: LevelFilter,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_pool_size(mut self, max_connections: u32, min_connections: u32) -> Self {
        self.max_connections = max_connections;
        self.min_connections = min_connections.min(max_connections);
        self
    }

    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(&self.url);
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(self.max_lifetime_secs))
            .sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(self.sqlx_logging_level);
        opt
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 5,
            acquire_timeout_secs: 5,
            idle_timeout_secs: 30,
            max_lifetime_secs: 1800,
            sqlx_logging: false,
            sqlx_logging_level: LevelFilter::Debug,
        }
    }
}

#[cfg(feature = "config")]
impl FromEnv for PostgresConfig {
    /// `DATABASE_URL` is required; pool knobs fall back to [`PostgresConfig::default`].
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let url = env_required("DATABASE_URL")?;

        Ok(Self {
            url,
            max_connections: env_parse("DB_MAX_CONNECTIONS", defaults.max_connections)?,
            min_connections: env_parse("DB_MIN_CONNECTIONS", defaults.min_connections)?,
            connect_timeout_secs: env_parse("DB_CONNECT_TIMEOUT_SECS", defaults.connect_timeout_secs)?,
            acquire_timeout_secs: env_parse("DB_ACQUIRE_TIMEOUT_SECS", defaults.acquire_timeout_secs)?,
            idle_timeout_secs: env_parse("DB_IDLE_TIMEOUT_SECS", defaults.idle_timeout_secs)?,
            max_lifetime_secs: env_parse("DB_MAX_LIFETIME_SECS", defaults.max_lifetime_secs)?,
            sqlx_logging: env_parse("DB_SQLX_LOGGING", defaults.sqlx_logging)?,
            sqlx_logging_level: defaults.sqlx_logging_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_small_pool() {
        let config = PostgresConfig::new("postgresql://localhost/academy");
        assert_eq!(config.url(), "postgresql://localhost/academy");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.idle_timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 5);
        assert!(!config.sqlx_logging);
    }

    #[test]
    fn test_with_pool_size_clamps_min() {
        let config = PostgresConfig::new("postgresql://localhost/academy").with_pool_size(4, 8);
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.min_connections, 4);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_custom() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/academy")),
                ("DB_MAX_CONNECTIONS", Some("20")),
                ("DB_SQLX_LOGGING", Some("true")),
            ],
            || {
                let config = PostgresConfig::from_env().unwrap();
                assert_eq!(config.max_connections, 20);
                assert!(config.sqlx_logging);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_missing_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let err = PostgresConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("DATABASE_URL"));
        });
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_invalid_number() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/academy")),
                ("DB_MAX_CONNECTIONS", Some("lots")),
            ],
            || {
                let err = PostgresConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
            },
        );
    }
}
