use serde::Deserialize;

use super::error::FetchError;
use super::queries::{LOGIN_MUTATION, READING_STATES_QUERY};
use super::transport::{GraphqlRequest, Transport};
use super::types::{Credentials, ReadingState, Session};
use crate::debug::debug_enabled;

#[derive(Debug, Deserialize)]
struct LoginData {
    login: Option<LoginPayload>,
}

#[derive(Debug, Deserialize)]
struct LoginPayload {
    token: String,
    profile: Profile,
}

#[derive(Debug, Deserialize)]
struct Profile {
    id: String,
    #[serde(default)]
    handle: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReadingStatesData {
    #[serde(default)]
    my_reading_states: Option<Vec<ReadingState>>,
}

/// Literal API client over any [`Transport`]
pub struct LiteralClient<T> {
    transport: T,
}

impl<T: Transport> LiteralClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn login(&self, credentials: &Credentials) -> Result<Session, FetchError> {
        let request = GraphqlRequest {
            query: LOGIN_MUTATION,
            variables: serde_json::json!({
                "email": credentials.email,
                "password": credentials.password,
            }),
        };
        let data: LoginData = self.transport.execute(&request, None)?.into_data()?;
        let payload = data.login.ok_or(FetchError::LoginFailed)?;

        if debug_enabled() {
            eprintln!(
                "[debug] Logged in as {} (profile {})",
                payload.profile.handle.as_deref().unwrap_or("?"),
                payload.profile.id
            );
        }

        Ok(Session {
            token: payload.token,
            profile_id: payload.profile.id,
            handle: payload.profile.handle,
        })
    }

    pub fn reading_states(&self, session: &Session) -> Result<Vec<ReadingState>, FetchError> {
        let request = GraphqlRequest {
            query: READING_STATES_QUERY,
            variables: serde_json::json!({}),
        };
        let data: ReadingStatesData = self
            .transport
            .execute(&request, Some(&session.token))?
            .into_data()?;
        let states = data.my_reading_states.unwrap_or_default();

        if debug_enabled() {
            eprintln!("[debug] {} reading states", states.len());
        }

        Ok(states)
    }
}
