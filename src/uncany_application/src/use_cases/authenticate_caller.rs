use uncany_core::{AuthenticatedCaller, BearerToken, IdentityError, IdentityProvider};

/// Resolves a bearer token to the calling identity.
pub struct AuthenticateCallerUseCase<'a, I>
where
    I: IdentityProvider,
{
    identity_provider: &'a I,
}

impl<'a, I> AuthenticateCallerUseCase<'a, I>
where
    I: IdentityProvider,
{
    pub fn new(identity_provider: &'a I) -> Self {
        Self { identity_provider }
    }

    #[tracing::instrument(name = "AuthenticateCallerUseCase::execute", skip_all)]
    pub async fn execute(&self, token: &BearerToken) -> Result<AuthenticatedCaller, IdentityError> {
        self.identity_provider.get_user(token).await
    }
}
