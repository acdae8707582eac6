//! Error taxonomy of the edge functions and its HTTP mapping.
//!
//! The `Display` text of every variant is what a caller sees. Internal detail
//! lives in the variant's payload and only ever reaches the log.

use thiserror::Error;
use uncany_application::{DeleteAccountError, SchoolInfoError};
use uncany_core::{
    CorsPolicy, CorsResponseHelpers, DirectoryError, EdgeResponseBuilder, IdentityError,
    SearchInputError,
};

#[derive(Debug, Error)]
pub enum EdgeApiError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("authentication required")]
    MissingAuthorization,

    #[error("invalid token")]
    InvalidToken(#[source] IdentityError),

    #[error("unsupported action")]
    UnsupportedAction,

    #[error("{0}")]
    InvalidInput(#[from] SearchInputError),

    #[error("school not found")]
    NotFound,

    #[error("could not retrieve school information")]
    UpstreamFailure(#[source] DirectoryError),

    #[error("deletion failed, contact support")]
    DeletionFailed(#[source] DeleteAccountError),

    #[error("server configuration error")]
    Configuration(String),

    #[error("internal server error")]
    Internal(String),
}

impl EdgeApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            EdgeApiError::InvalidInput(_) | EdgeApiError::UnsupportedAction => 400,
            EdgeApiError::MissingAuthorization | EdgeApiError::InvalidToken(_) => 401,
            EdgeApiError::NotFound => 404,
            EdgeApiError::MethodNotAllowed => 405,
            EdgeApiError::DeletionFailed(_)
            | EdgeApiError::Configuration(_)
            | EdgeApiError::Internal(_) => 500,
            EdgeApiError::UpstreamFailure(_) => 502,
        }
    }

    /// Log the error and render it as `{ "error": message }`.
    pub fn render<B>(self, builder: B, policy: &CorsPolicy) -> B::Response
    where
        B: EdgeResponseBuilder,
    {
        let status = self.status_code();
        if status >= 500 {
            tracing::error!(status, error = ?self, "Request failed");
        } else {
            tracing::warn!(status, error = %self, "Request rejected");
        }

        builder.cors_error(policy, status, &self.to_string())
    }
}

impl From<IdentityError> for EdgeApiError {
    fn from(error: IdentityError) -> Self {
        match error {
            IdentityError::Unavailable(e) => EdgeApiError::Internal(e),
            IdentityError::InvalidToken
            | IdentityError::NotFound
            | IdentityError::Unexpected(_) => EdgeApiError::InvalidToken(error),
        }
    }
}

impl From<DirectoryError> for EdgeApiError {
    fn from(error: DirectoryError) -> Self {
        EdgeApiError::UpstreamFailure(error)
    }
}

impl From<SchoolInfoError> for EdgeApiError {
    fn from(error: SchoolInfoError) -> Self {
        match error {
            SchoolInfoError::NotFound => EdgeApiError::NotFound,
            SchoolInfoError::Directory(e) => e.into(),
        }
    }
}

impl From<DeleteAccountError> for EdgeApiError {
    fn from(error: DeleteAccountError) -> Self {
        EdgeApiError::DeletionFailed(error)
    }
}
