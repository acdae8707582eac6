use uncany_application::AuthenticateCallerUseCase;
use uncany_core::{AuthenticatedCaller, BearerToken, EdgeRequest, IdentityProvider};

use crate::error::EdgeApiError;

const AUTHORIZATION_HEADER: &str = "authorization";

/// Resolve the caller of `request` from its `Authorization` header.
pub async fn authenticate<I, Q>(
    identity_provider: &I,
    request: &Q,
) -> Result<AuthenticatedCaller, EdgeApiError>
where
    I: IdentityProvider,
    Q: EdgeRequest,
{
    let header = request
        .header(AUTHORIZATION_HEADER)
        .filter(|value| !value.trim().is_empty())
        .ok_or(EdgeApiError::MissingAuthorization)?;
    let token = BearerToken::from_header_value(header);

    AuthenticateCallerUseCase::new(identity_provider)
        .execute(&token)
        .await
        .map_err(EdgeApiError::from)
}
