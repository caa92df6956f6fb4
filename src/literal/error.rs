use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("No Literal credentials")]
    MissingCredentials,

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("{0}")]
    Graphql(String),

    #[error("Login failed")]
    LoginFailed,

    #[error("Unexpected response: {0}")]
    Malformed(#[from] serde_json::Error),
}
