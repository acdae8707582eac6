use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use uncany_core::{RowFilter, RowFilterCondition, RowPatch, RowStore, RowStoreError};

use super::validate_update;
use crate::http::{API_KEY_HEADER, endpoint};

/// Row store talking to the platform's PostgREST data API with the service
/// role key, which bypasses row level security.
pub struct PostgrestRowStore {
    http_client: Client,
    base_url: Url,
    service_role_key: Secret<String>,
}

impl PostgrestRowStore {
    pub fn new(base_url: Url, service_role_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            service_role_key,
        }
    }

    fn update_url(&self, table: &str, filter: &RowFilter) -> Result<Url, RowStoreError> {
        let mut url =
            endpoint(&self.base_url, &["rest", "v1", table]).map_err(RowStoreError::Unexpected)?;

        {
            let mut query = url.query_pairs_mut();
            for condition in filter.conditions() {
                match condition {
                    RowFilterCondition::Eq { column, value } => {
                        query.append_pair(column, &format!("eq.{value}"));
                    }
                    RowFilterCondition::IsNull { column } => {
                        query.append_pair(column, "is.null");
                    }
                }
            }
        }

        Ok(url)
    }
}

#[async_trait::async_trait]
impl RowStore for PostgrestRowStore {
    #[tracing::instrument(name = "Updating rows through the data API", skip(self, patch, filter))]
    async fn update(
        &self,
        table: &str,
        patch: RowPatch,
        filter: RowFilter,
    ) -> Result<(), RowStoreError> {
        validate_update(table, &patch, &filter)?;
        if patch.is_empty() {
            return Ok(());
        }

        let url = self.update_url(table, &filter)?;

        let response = self
            .http_client
            .patch(url)
            .header(API_KEY_HEADER, self.service_role_key.expose_secret())
            .bearer_auth(self.service_role_key.expose_secret())
            .header(PREFER_HEADER, RETURN_MINIMAL)
            .json(&patch.to_json())
            .send()
            .await
            .map_err(|e| RowStoreError::Unexpected(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RowStoreError::Unexpected(format!(
                "data API returned {status}: {body}"
            )));
        }

        Ok(())
    }
}

const PREFER_HEADER: &str = "Prefer";
const RETURN_MINIMAL: &str = "return=minimal";
