use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};
use uncany_core::{AuthenticatedCaller, BearerToken, IdentityError, IdentityProvider, UserId};

use crate::http::{API_KEY_HEADER, endpoint};

/// Identity provider backed by the Supabase auth API.
///
/// Token checks go through `GET /auth/v1/user` with the caller's token;
/// deletions use the admin API with the service role key.
pub struct SupabaseIdentityClient {
    http_client: Client,
    base_url: Url,
    service_role_key: Secret<String>,
}

impl SupabaseIdentityClient {
    pub fn new(base_url: Url, service_role_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            service_role_key,
        }
    }
}

#[async_trait::async_trait]
impl IdentityProvider for SupabaseIdentityClient {
    #[tracing::instrument(name = "Resolving bearer token", skip_all)]
    async fn get_user(&self, token: &BearerToken) -> Result<AuthenticatedCaller, IdentityError> {
        let url = endpoint(&self.base_url, USER_PATH).map_err(IdentityError::Unexpected)?;

        let response = self
            .http_client
            .get(url)
            .header(API_KEY_HEADER, self.service_role_key.expose_secret())
            .bearer_auth(token.as_ref().expose_secret())
            .send()
            .await
            .map_err(|e| IdentityError::Unavailable(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(IdentityError::InvalidToken);
            }
            StatusCode::NOT_FOUND => return Err(IdentityError::NotFound),
            status => {
                return Err(IdentityError::Unexpected(format!(
                    "auth service returned {status}"
                )));
            }
        }

        let user = response
            .json::<UserResponse>()
            .await
            .map_err(|e| IdentityError::Unexpected(e.to_string()))?;

        let id = UserId::try_from(user.id).map_err(|e| IdentityError::Unexpected(e.to_string()))?;
        Ok(AuthenticatedCaller::new(id, user.email.unwrap_or_default()))
    }

    #[tracing::instrument(name = "Deleting auth identity", skip_all, fields(user_id = %id))]
    async fn delete_identity(&self, id: &UserId) -> Result<(), IdentityError> {
        let mut segments = ADMIN_USERS_PATH.to_vec();
        segments.push(id.as_str());
        let url = endpoint(&self.base_url, &segments).map_err(IdentityError::Unexpected)?;

        let response = self
            .http_client
            .delete(url)
            .header(API_KEY_HEADER, self.service_role_key.expose_secret())
            .bearer_auth(self.service_role_key.expose_secret())
            .send()
            .await
            .map_err(|e| IdentityError::Unavailable(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(IdentityError::NotFound),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(IdentityError::Unexpected(format!(
                    "auth service returned {status}: {body}"
                )))
            }
        }
    }
}

const USER_PATH: &[&str] = &["auth", "v1", "user"];
const ADMIN_USERS_PATH: &[&str] = &["auth", "v1", "admin", "users"];

#[derive(serde::Deserialize, Debug)]
struct UserResponse {
    id: String,
    #[serde(default)]
    email: Option<String>,
}
