//! Server-side caller allow-list.
//!
//! Every inbound call is checked in this order:
//!
//! 1. `x-client-id` (or `client-id`) metadata must name an allowed client.
//!    A call without a client id is rejected.
//! 2. When IP enforcement is on (production), the caller address taken from
//!    `x-forwarded-for`, `x-real-ip` or `remote-addr` metadata must match an
//!    allowed host. Matching is substring in either direction, so a forwarded
//!    chain containing the gateway address passes. Calls carrying none of
//!    these headers skip the address check.
//! 3. A `user-agent` mentioning neither `grpc` nor `campus` is logged but
//!    not rejected.
//!
//! Rejections are `PERMISSION_DENIED`.

use core_config::{ConfigError, Environment, FromEnv, env_first, env_list};
use std::sync::Arc;
use tonic::{Request, Status};
use tracing::{debug, warn};

use super::CLIENT_ID_HEADERS;

const DEFAULT_CLIENT: &str = "campus-api-gateway";
const LOCAL_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "::1"];
const IP_HEADERS: [&str; 3] = ["x-forwarded-for", "x-real-ip", "remote-addr"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowListConfig {
    pub allowed_clients: Vec<String>,
    pub allowed_hosts: Vec<String>,
    /// Reject callers whose address matches no allowed host
    pub enforce_ip: bool,
}

impl AllowListConfig {
    /// Allow-list for `clients`, with only the loopback hosts and IP checks off.
    pub fn new<I, S>(clients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_clients: clients.into_iter().map(Into::into).collect(),
            allowed_hosts: LOCAL_HOSTS.iter().map(|h| h.to_string()).collect(),
            enforce_ip: false,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        let host = host.into();
        if !host.trim().is_empty() {
            self.allowed_hosts.push(host);
        }
        self
    }

    pub fn with_ip_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_ip = enforce;
        self
    }

    pub fn is_client_allowed(&self, client_id: &str) -> bool {
        self.allowed_clients.iter().any(|c| c == client_id)
    }

    pub fn is_address_allowed(&self, address: &str) -> bool {
        self.allowed_hosts
            .iter()
            .any(|host| address.contains(host.as_str()) || host.contains(address))
    }
}

impl Default for AllowListConfig {
    fn default() -> Self {
        Self::new([DEFAULT_CLIENT])
    }
}

impl FromEnv for AllowListConfig {
    /// Reads `ALLOWED_CLIENTS` (comma separated), `GATEWAY_IP`,
    /// `GATEWAY_HOST`, `RENDER_EXTERNAL_HOSTNAME` and `RAILWAY_STATIC_URL`.
    /// IP enforcement follows `APP_ENV=production`.
    fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::new(env_list("ALLOWED_CLIENTS", &[DEFAULT_CLIENT]))
            .with_ip_enforcement(Environment::from_env().is_production());

        for key in [
            "GATEWAY_IP",
            "GATEWAY_HOST",
            "RENDER_EXTERNAL_HOSTNAME",
            "RAILWAY_STATIC_URL",
        ] {
            if let Some(host) = env_first(&[key]) {
                config = config.with_host(host);
            }
        }
        Ok(config)
    }
}

/// Identity of an admitted caller, stored in the request extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerInfo {
    pub client_id: Option<String>,
    pub address: Option<String>,
}

#[derive(Clone, Debug)]
pub struct AllowListInterceptor {
    config: Arc<AllowListConfig>,
}

impl AllowListInterceptor {
    pub fn new(config: AllowListConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AllowListConfig {
        &self.config
    }
}

fn metadata_str<'a>(request: &'a Request<()>, key: &str) -> Option<&'a str> {
    request
        .metadata()
        .get(key)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn caller_address(request: &Request<()>) -> Option<String> {
    IP_HEADERS
        .iter()
        .find_map(|key| metadata_str(request, key))
        .map(str::to_string)
}

impl tonic::service::Interceptor for AllowListInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let Some(client_id) = CLIENT_ID_HEADERS
            .iter()
            .find_map(|key| metadata_str(&request, key))
            .map(str::to_string)
        else {
            warn!("Client without a client id attempted access");
            return Err(Status::permission_denied("Missing client id"));
        };

        if !self.config.is_client_allowed(&client_id) {
            warn!(client_id = %client_id, "Unauthorized client attempted access");
            return Err(Status::permission_denied(format!(
                "Client '{client_id}' is not authorized"
            )));
        }

        let address = caller_address(&request);
        if self.config.enforce_ip
            && let Some(addr) = &address
            && !self.config.is_address_allowed(addr)
        {
            warn!(address = %addr, "Unauthorized IP attempted access");
            return Err(Status::permission_denied(format!(
                "IP '{addr}' is not authorized"
            )));
        }

        if let Some(agent) = metadata_str(&request, "user-agent")
            && !agent.contains("grpc")
            && !agent.contains("campus")
        {
            warn!(user_agent = agent, "Suspicious user-agent");
        }

        debug!(
            client_id = %client_id,
            address = address.as_deref().unwrap_or("unknown"),
            "Authorized request"
        );
        request.extensions_mut().insert(CallerInfo {
            client_id: Some(client_id),
            address,
        });
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::service::Interceptor;

    const GATEWAY: (&str, &str) = ("x-client-id", "campus-api-gateway");

    fn request_with(entries: &[(&'static str, &'static str)]) -> Request<()> {
        let mut request = Request::new(());
        for (key, value) in entries {
            request
                .metadata_mut()
                .insert(*key, value.parse().unwrap());
        }
        request
    }

    fn interceptor(enforce_ip: bool) -> AllowListInterceptor {
        AllowListInterceptor::new(
            AllowListConfig::default()
                .with_host("10.0.0.7")
                .with_ip_enforcement(enforce_ip),
        )
    }

    #[test]
    fn test_allows_known_client() {
        let req = interceptor(false)
            .call(request_with(&[("x-client-id", "campus-api-gateway")]))
            .unwrap();
        let caller = req.extensions().get::<CallerInfo>().unwrap();
        assert_eq!(caller.client_id.as_deref(), Some("campus-api-gateway"));
    }

    #[test]
    fn test_rejects_unknown_client() {
        let status = interceptor(false)
            .call(request_with(&[("x-client-id", "scraper")]))
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::PermissionDenied);
        assert!(status.message().contains("scraper"));
    }

    #[test]
    fn test_legacy_client_id_header() {
        let status = interceptor(false)
            .call(request_with(&[("client-id", "scraper")]))
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::PermissionDenied);
    }

    #[test]
    fn test_missing_client_id_is_denied() {
        for enforce_ip in [false, true] {
            let status = interceptor(enforce_ip).call(Request::new(())).unwrap_err();
            assert_eq!(status.code(), tonic::Code::PermissionDenied);
        }

        let blank = request_with(&[("x-client-id", "  ")]);
        assert!(interceptor(false).call(blank).is_err());
    }

    #[test]
    fn test_ip_checked_only_when_enforced() {
        let foreign = [GATEWAY, ("x-forwarded-for", "203.0.113.9")];
        assert!(interceptor(false).call(request_with(&foreign)).is_ok());

        let status = interceptor(true).call(request_with(&foreign)).unwrap_err();
        assert_eq!(status.code(), tonic::Code::PermissionDenied);
    }

    #[test]
    fn test_forwarded_chain_containing_gateway_passes() {
        let req = request_with(&[GATEWAY, ("x-forwarded-for", "10.0.0.7, 172.16.0.1")]);
        assert!(interceptor(true).call(req).is_ok());

        let req = request_with(&[GATEWAY, ("x-real-ip", "127.0.0.1")]);
        assert!(interceptor(true).call(req).is_ok());
    }

    #[test]
    fn test_no_address_headers_skips_ip_check() {
        let req = interceptor(true).call(request_with(&[GATEWAY])).unwrap();
        let caller = req.extensions().get::<CallerInfo>().unwrap();
        assert_eq!(caller.address, None);
    }

    #[test]
    fn test_suspicious_user_agent_is_not_rejected() {
        let req = request_with(&[GATEWAY, ("user-agent", "curl/8.0")]);
        assert!(interceptor(false).call(req).is_ok());
    }

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                ("ALLOWED_CLIENTS", Some("campus-api-gateway, admin-cli")),
                ("GATEWAY_IP", Some("10.1.2.3")),
                ("GATEWAY_HOST", None),
                ("RENDER_EXTERNAL_HOSTNAME", Some("  ")),
                ("RAILWAY_STATIC_URL", Some("academy.up.railway.app")),
                ("APP_ENV", Some("production")),
            ],
            || {
                let config = AllowListConfig::from_env().unwrap();
                assert_eq!(config.allowed_clients, vec!["campus-api-gateway", "admin-cli"]);
                assert!(config.allowed_hosts.contains(&"10.1.2.3".to_string()));
                assert!(config.allowed_hosts.contains(&"academy.up.railway.app".to_string()));
                assert_eq!(config.allowed_hosts.len(), 5);
                assert!(config.enforce_ip);
            },
        );
    }

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars_unset(["ALLOWED_CLIENTS", "APP_ENV"], || {
            let config = AllowListConfig::from_env().unwrap();
            assert!(config.is_client_allowed("campus-api-gateway"));
            assert!(!config.enforce_ip);
        });
    }
}
