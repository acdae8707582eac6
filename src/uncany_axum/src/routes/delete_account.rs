//! Axum-specific account deletion route.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    response::Response,
};
use uncany_adapters::handlers::{self, DELETE_ACCOUNT_CORS};
use uncany_application::DeletionPlan;
use uncany_core::{IdentityProvider, RowStore};

use super::RouteError;
use crate::adapters::{AxumRequest, response_builder};

/// Shared state of the account deletion route.
pub struct DeleteAccountState<I, R> {
    identity_provider: Arc<I>,
    row_store: Arc<R>,
    plan: Arc<DeletionPlan>,
}

impl<I, R> DeleteAccountState<I, R> {
    pub fn new(identity_provider: Arc<I>, row_store: Arc<R>, plan: DeletionPlan) -> Self {
        Self {
            identity_provider,
            row_store,
            plan: Arc::new(plan),
        }
    }
}

impl<I, R> Clone for DeleteAccountState<I, R> {
    fn clone(&self) -> Self {
        Self {
            identity_provider: Arc::clone(&self.identity_provider),
            row_store: Arc::clone(&self.row_store),
            plan: Arc::clone(&self.plan),
        }
    }
}

/// Axum account deletion route.
///
/// Accepts every method so preflights and wrong methods are answered by the
/// handler with the route's CORS headers.
#[tracing::instrument(name = "Delete Account", skip_all)]
pub async fn delete_account<I, R>(
    State(state): State<DeleteAccountState<I, R>>,
    request: Request,
) -> Result<Response, RouteError>
where
    I: IdentityProvider + 'static,
    R: RowStore + 'static,
{
    let request = AxumRequest::from(request);
    let builder = response_builder();

    handlers::handle_delete_account(
        state.identity_provider.as_ref(),
        state.row_store.as_ref(),
        &state.plan,
        &request,
        builder,
    )
    .await
    .map_err(|e| RouteError::new(e, DELETE_ACCOUNT_CORS))
}
