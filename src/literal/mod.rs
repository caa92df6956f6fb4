//! Literal.club GraphQL client
//!
//! Two calls: the login mutation, then the account's reading states with the
//! returned bearer token.

mod client;
mod error;
mod queries;
mod transport;
mod types;

pub use client::LiteralClient;
#[cfg(test)]
pub(crate) use client::test_support;
pub use error::FetchError;
pub use transport::{GraphqlError, GraphqlRequest, GraphqlResponse, Transport};
#[cfg(feature = "http")]
pub use transport::UreqTransport;
pub use types::{Author, Book, Credentials, ReadingState, ReadingStatus, Session};

/// Public GraphQL endpoint
pub const LITERAL_API: &str = "https://literal.club/graphql/";
