use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BEARER_PREFIX: &str = "Bearer ";

/// Caller credential taken from the `Authorization` header.
///
/// The token is kept behind `Secret` so it never ends up in a log line or a
/// `Debug` dump.
#[derive(Clone, Debug)]
pub struct BearerToken(Secret<String>);

impl BearerToken {
    /// Build a token from a raw `Authorization` header value.
    ///
    /// A leading `Bearer ` prefix is stripped; anything else is taken as the
    /// token itself and left for the identity service to judge.
    pub fn from_header_value(value: &str) -> Self {
        let token = value.strip_prefix(BEARER_PREFIX).unwrap_or(value);
        Self(Secret::new(token.to_string()))
    }
}

impl AsRef<Secret<String>> for BearerToken {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for BearerToken {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum UserIdError {
    #[error("User id must not be empty")]
    Empty,
}

/// Opaque id of an auth identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(UserIdError::Empty);
        }
        Ok(Self(value))
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The identity resolved from a bearer token, valid for one request only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedCaller {
    id: UserId,
    email: String,
}

impl AuthenticatedCaller {
    pub fn new(id: UserId, email: String) -> Self {
        Self { id, email }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
