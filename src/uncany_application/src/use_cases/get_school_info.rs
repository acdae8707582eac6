use uncany_core::{DirectoryError, DirectoryRecord, SchoolDirectory, SchoolId};

/// Error types for the school info use case
#[derive(Debug, thiserror::Error)]
pub enum SchoolInfoError {
    #[error("School not found")]
    NotFound,
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),
}

/// School info use case - looks up one school by its exact code.
pub struct GetSchoolInfoUseCase<'a, D>
where
    D: SchoolDirectory,
{
    directory: &'a D,
}

impl<'a, D> GetSchoolInfoUseCase<'a, D>
where
    D: SchoolDirectory,
{
    pub fn new(directory: &'a D) -> Self {
        Self { directory }
    }

    #[tracing::instrument(name = "GetSchoolInfoUseCase::execute", skip(self))]
    pub async fn execute(&self, school_id: &SchoolId) -> Result<DirectoryRecord, SchoolInfoError> {
        self.directory
            .lookup(school_id)
            .await?
            .records
            .into_iter()
            .next()
            .ok_or(SchoolInfoError::NotFound)
    }
}
