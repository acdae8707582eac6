use std::collections::HashMap;
use std::sync::Arc;

use secrecy::ExposeSecret;
use tokio::sync::RwLock;
use uncany_core::{AuthenticatedCaller, BearerToken, IdentityError, IdentityProvider, UserId};

/// Identity provider keeping token to identity mappings in memory.
#[derive(Default, Clone)]
pub struct InMemoryIdentityProvider {
    sessions: Arc<RwLock<HashMap<String, AuthenticatedCaller>>>,
    deletion_failure: Arc<RwLock<Option<String>>>,
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            deletion_failure: Arc::new(RwLock::new(None)),
        }
    }

    /// Register `caller` as the identity behind `token`.
    pub async fn add_user(&self, token: &str, caller: AuthenticatedCaller) {
        self.sessions.write().await.insert(token.to_string(), caller);
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.sessions
            .read()
            .await
            .values()
            .any(|caller| caller.id().as_str() == id)
    }

    /// Make every following deletion fail with `reason`.
    pub async fn fail_deletions(&self, reason: &str) {
        *self.deletion_failure.write().await = Some(reason.to_string());
    }
}

#[async_trait::async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn get_user(&self, token: &BearerToken) -> Result<AuthenticatedCaller, IdentityError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(token.as_ref().expose_secret().as_str())
            .cloned()
            .ok_or(IdentityError::InvalidToken)
    }

    async fn delete_identity(&self, id: &UserId) -> Result<(), IdentityError> {
        if let Some(reason) = self.deletion_failure.read().await.clone() {
            return Err(IdentityError::Unexpected(reason));
        }

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, caller| caller.id() != id);

        if sessions.len() == before {
            return Err(IdentityError::NotFound);
        }
        Ok(())
    }
}
