//! Construction of the production adapters from settings.

use std::sync::Arc;

use reqwest::{Client, Url};
use secrecy::ExposeSecret;
use thiserror::Error;
use uncany_adapters::{
    config::EdgeSettings,
    directory::NeisSchoolDirectory,
    identity::SupabaseIdentityClient,
    persistence::{PostgresRowStore, PostgrestRowStore, get_postgres_pool},
};
use uncany_core::{RowFilter, RowPatch, RowStore, RowStoreError};

use crate::EdgeService;

#[derive(Debug, Error)]
pub enum WiringError {
    #[error("Invalid {name} URL: {reason}")]
    InvalidUrl { name: &'static str, reason: String },
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("Failed to connect to the database: {0}")]
    Database(#[from] sqlx::Error),
}

/// Where account deletion writes its soft deletes.
pub enum RowStoreBackend {
    DataApi(PostgrestRowStore),
    Database(PostgresRowStore),
}

#[async_trait::async_trait]
impl RowStore for RowStoreBackend {
    async fn update(
        &self,
        table: &str,
        patch: RowPatch,
        filter: RowFilter,
    ) -> Result<(), RowStoreError> {
        match self {
            RowStoreBackend::DataApi(store) => store.update(table, patch, filter).await,
            RowStoreBackend::Database(store) => store.update(table, patch, filter).await,
        }
    }
}

fn parse_url(name: &'static str, value: &str) -> Result<Url, WiringError> {
    Url::parse(value).map_err(|e| WiringError::InvalidUrl {
        name,
        reason: e.to_string(),
    })
}

/// Build the service with the real Supabase and NEIS clients.
///
/// Rows go straight to PostgreSQL when database settings are present and
/// through the data API otherwise.
#[tracing::instrument(name = "Wiring edge service", skip_all)]
pub async fn build_from_settings(settings: &EdgeSettings) -> Result<EdgeService, WiringError> {
    let supabase_url = parse_url("supabase", &settings.supabase.url)?;
    let supabase_client = Client::builder()
        .timeout(settings.supabase.timeout())
        .build()?;

    let identity_provider = Arc::new(SupabaseIdentityClient::new(
        supabase_url.clone(),
        settings.supabase.service_role_key.clone(),
        supabase_client.clone(),
    ));

    let row_store = match &settings.database {
        Some(database) => {
            tracing::info!("Writing rows directly to PostgreSQL");
            let pool =
                get_postgres_pool(database.url.expose_secret(), database.max_connections).await?;
            RowStoreBackend::Database(PostgresRowStore::new(pool))
        }
        None => RowStoreBackend::DataApi(PostgrestRowStore::new(
            supabase_url,
            settings.supabase.service_role_key.clone(),
            supabase_client,
        )),
    };

    let api_key = settings
        .directory
        .api_key
        .as_ref()
        .filter(|key| !key.expose_secret().trim().is_empty());
    let directory = match api_key {
        Some(api_key) => {
            let directory_client = Client::builder()
                .timeout(settings.directory.timeout())
                .build()?;
            Some(Arc::new(NeisSchoolDirectory::new(
                parse_url("directory", &settings.directory.base_url)?,
                api_key.clone(),
                settings.directory.client_id.clone(),
                directory_client,
            )))
        }
        None => {
            tracing::warn!("No school directory API key configured, directory requests will fail");
            None
        }
    };

    Ok(EdgeService::new(
        identity_provider,
        Arc::new(row_store),
        directory,
        settings.deletion_plan(),
    ))
}
