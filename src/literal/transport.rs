use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::FetchError;

/// JSON body of a GraphQL POST
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphqlError {
    #[serde(default)]
    pub message: String,
}

/// Raw GraphQL reply: `data` or `errors`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

impl GraphqlResponse {
    /// Decode `data`, failing with the first reported error if `errors` is present
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, FetchError> {
        if let Some(errors) = self.errors {
            let message = errors
                .into_iter()
                .next()
                .map(|e| e.message)
                .unwrap_or_else(|| "Unknown GraphQL error".to_string());
            return Err(FetchError::Graphql(message));
        }
        let data = self.data.unwrap_or(serde_json::Value::Null);
        Ok(serde_json::from_value(data)?)
    }
}

/// One GraphQL round trip. `token`, when given, is sent as a bearer token.
pub trait Transport {
    fn execute(
        &self,
        request: &GraphqlRequest<'_>,
        token: Option<&str>,
    ) -> Result<GraphqlResponse, FetchError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(
        &self,
        request: &GraphqlRequest<'_>,
        token: Option<&str>,
    ) -> Result<GraphqlResponse, FetchError> {
        (**self).execute(request, token)
    }
}

#[cfg(feature = "http")]
pub use self::http::UreqTransport;

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use super::{FetchError, GraphqlRequest, GraphqlResponse, Transport};
    use crate::debug::debug_enabled;

    /// Blocking HTTP transport. Status codes are not errors: the body is
    /// always read as a GraphQL reply.
    pub struct UreqTransport {
        agent: ureq::Agent,
        endpoint: String,
    }

    impl UreqTransport {
        pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Self {
            let agent: ureq::Agent = ureq::Agent::config_builder()
                .timeout_global(timeout)
                .http_status_as_error(false)
                .build()
                .into();
            Self {
                agent,
                endpoint: endpoint.into(),
            }
        }

        pub fn endpoint(&self) -> &str {
            &self.endpoint
        }
    }

    impl Transport for UreqTransport {
        fn execute(
            &self,
            request: &GraphqlRequest<'_>,
            token: Option<&str>,
        ) -> Result<GraphqlResponse, FetchError> {
            let mut builder = self.agent.post(self.endpoint.as_str());
            if let Some(token) = token {
                builder = builder.header("Authorization", format!("Bearer {token}"));
            }

            let mut response = builder
                .send_json(request)
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            if debug_enabled() {
                eprintln!(
                    "[debug] POST {} -> {} (auth: {})",
                    self.endpoint,
                    response.status(),
                    token.is_some()
                );
            }

            response
                .body_mut()
                .read_json::<GraphqlResponse>()
                .map_err(|e| FetchError::Transport(e.to_string()))
        }
    }
}
