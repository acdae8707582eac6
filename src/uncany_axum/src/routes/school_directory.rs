//! Axum-specific school directory route.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    response::Response,
};
use uncany_adapters::handlers::{self, SCHOOL_DIRECTORY_CORS};
use uncany_core::{IdentityProvider, SchoolDirectory};

use super::RouteError;
use crate::adapters::{AxumRequest, response_builder};

/// Shared state of the school directory route.
///
/// `directory` is `None` when no upstream API key is configured.
pub struct SchoolDirectoryState<I, D> {
    identity_provider: Arc<I>,
    directory: Option<Arc<D>>,
}

impl<I, D> SchoolDirectoryState<I, D> {
    pub fn new(identity_provider: Arc<I>, directory: Option<Arc<D>>) -> Self {
        Self {
            identity_provider,
            directory,
        }
    }
}

impl<I, D> Clone for SchoolDirectoryState<I, D> {
    fn clone(&self) -> Self {
        Self {
            identity_provider: Arc::clone(&self.identity_provider),
            directory: self.directory.clone(),
        }
    }
}

/// Axum school directory route.
#[tracing::instrument(name = "School Directory", skip_all)]
pub async fn school_directory<I, D>(
    State(state): State<SchoolDirectoryState<I, D>>,
    request: Request,
) -> Result<Response, RouteError>
where
    I: IdentityProvider + 'static,
    D: SchoolDirectory + 'static,
{
    let request = AxumRequest::from(request);
    let builder = response_builder();

    handlers::handle_school_directory(
        state.identity_provider.as_ref(),
        state.directory.as_deref(),
        &request,
        builder,
    )
    .await
    .map_err(|e| RouteError::new(e, SCHOOL_DIRECTORY_CORS))
}
