use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    directory::SchoolListing,
    search::{SchoolId, SchoolSearch},
};

// SchoolDirectory port trait and errors
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Upstream returned status {0}")]
    Status(u16),
    #[error("Upstream rejected the request: {0}")]
    Rejected(String),
    #[error("Upstream request failed: {0}")]
    Transport(String),
    #[error("Upstream response could not be decoded: {0}")]
    Decode(String),
}

/// The upstream school directory.
#[async_trait]
pub trait SchoolDirectory: Send + Sync {
    async fn search(&self, search: &SchoolSearch) -> Result<SchoolListing, DirectoryError>;
    async fn lookup(&self, school_id: &SchoolId) -> Result<SchoolListing, DirectoryError>;
}
