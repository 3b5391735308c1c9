use tonic::metadata::MetadataValue;
use tonic::{Request, Status};

use super::CLIENT_ID_HEADERS;

/// Client-side interceptor that identifies the caller to an
/// [`AllowListInterceptor`](super::AllowListInterceptor)-protected service.
///
/// # Example
/// ```ignore
/// use grpc_client::ClientIdInterceptor;
/// use rpc::courses::v1::courses_service_client::CoursesServiceClient;
///
/// let client = CoursesServiceClient::with_interceptor(
///     channel,
///     ClientIdInterceptor::new("campus-api-gateway"),
/// );
/// ```
#[derive(Clone, Debug)]
pub struct ClientIdInterceptor {
    client_id: String,
    user_agent: Option<String>,
}

impl ClientIdInterceptor {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            user_agent: None,
        }
    }

    /// Also send a `user-agent` entry (tonic's transport sets its own otherwise).
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

impl tonic::service::Interceptor for ClientIdInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let value: MetadataValue<_> = self
            .client_id
            .parse()
            .map_err(|_| Status::internal("Invalid client id header"))?;
        request.metadata_mut().insert(CLIENT_ID_HEADERS[0], value);

        if let Some(agent) = &self.user_agent {
            let value: MetadataValue<_> = agent
                .parse()
                .map_err(|_| Status::internal("Invalid user-agent header"))?;
            request.metadata_mut().insert("user-agent", value);
        }
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::service::Interceptor;

    #[test]
    fn test_sets_client_id() {
        let mut interceptor = ClientIdInterceptor::new("campus-api-gateway");
        let req = interceptor.call(Request::new(())).unwrap();
        assert_eq!(req.metadata().get("x-client-id").unwrap(), "campus-api-gateway");
        assert!(req.metadata().get("user-agent").is_none());
    }

    #[test]
    fn test_sets_user_agent() {
        let mut interceptor = ClientIdInterceptor::new("gw").with_user_agent("campus-gateway/1.0");
        let req = interceptor.call(Request::new(())).unwrap();
        assert_eq!(req.metadata().get("user-agent").unwrap(), "campus-gateway/1.0");
    }

    #[test]
    fn test_rejects_unencodable_id() {
        let mut interceptor = ClientIdInterceptor::new("bad\nid");
        let status = interceptor.call(Request::new(())).unwrap_err();
        assert_eq!(status.code(), tonic::Code::Internal);
    }
}
