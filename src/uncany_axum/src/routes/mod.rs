//! Axum-specific route handlers.
//!
//! These routes wrap the Axum request, call the framework-agnostic handlers
//! and render any error with the route's CORS policy.

pub mod delete_account;
pub mod school_directory;

pub use delete_account::{DeleteAccountState, delete_account};
pub use school_directory::{SchoolDirectoryState, school_directory};

use axum::response::{IntoResponse, Response};
use uncany_adapters::EdgeApiError;
use uncany_core::CorsPolicy;

use crate::adapters::response_builder;

/// A handler error paired with the CORS policy of the route it came from.
#[derive(Debug)]
pub struct RouteError {
    error: EdgeApiError,
    policy: CorsPolicy,
}

impl RouteError {
    pub fn new(error: EdgeApiError, policy: CorsPolicy) -> Self {
        Self { error, policy }
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        self.error.render(response_builder(), &self.policy)
    }
}
