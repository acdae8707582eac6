//! Framework-agnostic account deletion handler.

use chrono::Utc;
use uncany_application::{DeleteAccountUseCase, DeletionPlan};
use uncany_core::{
    CorsPolicy, CorsResponseHelpers, EdgeRequest, EdgeResponseBuilder, IdentityProvider, RowStore,
};

use super::{METHOD_OPTIONS, authenticate};
use crate::error::EdgeApiError;

pub const DELETE_ACCOUNT_CORS: CorsPolicy =
    CorsPolicy::new("POST, OPTIONS").with_methods_on_every_response();

const METHOD_POST: &str = "POST";

/// Framework-agnostic account deletion handler.
///
/// Soft deletes the caller's profile and reservations, then deletes the auth
/// identity. Only the identity deletion can fail the request; a failed soft
/// delete is logged and left behind.
///
/// # Type Parameters
/// * `I` - Identity provider resolving and deleting the caller
/// * `R` - Row store holding the application rows
/// * `Q` - Request wrapper for the framework being used
/// * `B` - Response builder for the framework being used
///
/// # Returns
/// The HTTP response, or an `EdgeApiError` for the route to render with
/// [`DELETE_ACCOUNT_CORS`]
#[tracing::instrument(name = "Delete account", skip_all)]
pub async fn handle_delete_account<I, R, Q, B>(
    identity_provider: &I,
    row_store: &R,
    plan: &DeletionPlan,
    request: &Q,
    builder: B,
) -> Result<B::Response, EdgeApiError>
where
    I: IdentityProvider,
    R: RowStore,
    Q: EdgeRequest,
    B: EdgeResponseBuilder,
{
    match request.method() {
        METHOD_OPTIONS => return Ok(builder.preflight(&DELETE_ACCOUNT_CORS)),
        METHOD_POST => {}
        _ => return Err(EdgeApiError::MethodNotAllowed),
    }

    let caller = authenticate(identity_provider, request).await?;
    tracing::info!(user_id = %caller.id(), "Account deletion requested");

    let outcome = DeleteAccountUseCase::new(identity_provider, row_store, plan)
        .execute(&caller, Utc::now())
        .await?;

    tracing::info!(
        user_id = %caller.id(),
        users_row_updated = outcome.users_row_updated(),
        reservations_rows_updated = outcome.reservations_rows_updated(),
        "Account deleted"
    );

    Ok(builder.cors_json(
        &DELETE_ACCOUNT_CORS,
        200,
        serde_json::json!({ "message": "account deleted" }),
    ))
}
