use async_trait::async_trait;
use thiserror::Error;

use crate::domain::row::{RowFilter, RowPatch};

// RowStore port trait and errors
#[derive(Debug, Error)]
pub enum RowStoreError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
    #[error("Refusing to update every row of {0}")]
    UnfilteredUpdate(String),
    #[error("Unexpected error {0}")]
    Unexpected(String),
}

/// The platform's data API.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Apply `patch` to every row of `table` matching `filter`.
    ///
    /// Matching no rows is not an error.
    async fn update(
        &self,
        table: &str,
        patch: RowPatch,
        filter: RowFilter,
    ) -> Result<(), RowStoreError>;
}
