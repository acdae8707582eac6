use async_trait::async_trait;
use thiserror::Error;

use crate::domain::caller::{AuthenticatedCaller, BearerToken, UserId};

// IdentityProvider port trait and errors
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Identity not found")]
    NotFound,
    #[error("Identity service unavailable: {0}")]
    Unavailable(String),
    #[error("Unexpected error {0}")]
    Unexpected(String),
}

impl PartialEq for IdentityError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::InvalidToken, Self::InvalidToken)
                | (Self::NotFound, Self::NotFound)
                | (Self::Unavailable(_), Self::Unavailable(_))
                | (Self::Unexpected(_), Self::Unexpected(_))
        )
    }
}

/// The platform's auth service.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve a bearer token to the identity it was issued for.
    async fn get_user(&self, token: &BearerToken) -> Result<AuthenticatedCaller, IdentityError>;

    /// Permanently remove an identity. Not reversible.
    async fn delete_identity(&self, id: &UserId) -> Result<(), IdentityError>;
}
