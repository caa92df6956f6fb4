use std::fmt;

use serde::{Deserialize, Serialize};

/// Login pair for the Literal account
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Build from optional parts; an absent or empty value means no credentials
    pub fn from_parts(email: Option<String>, password: Option<String>) -> Option<Self> {
        let email = email.filter(|s| !s.is_empty())?;
        let password = password.filter(|s| !s.is_empty())?;
        Some(Self { email, password })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Authenticated session, valid for one invocation
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub profile_id: String,
    pub handle: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadingStatus {
    IsReading,
    WantsToRead,
    Finished,
    /// Any status the shelf does not display (e.g. dropped books)
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingState {
    pub id: String,
    pub status: ReadingStatus,
    #[serde(default)]
    pub book_id: Option<String>,
    #[serde(default)]
    pub profile_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    pub book: Book,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Book {
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<Author>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}
