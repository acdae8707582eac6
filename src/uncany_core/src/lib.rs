pub mod cors;
pub mod domain;
pub mod http_abstraction;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    caller::{AuthenticatedCaller, BearerToken, UserId, UserIdError},
    deletion::{DeletionOutcome, StepOutcome},
    directory::{DirectoryRecord, SchoolListing},
    row::{PatchValue, RowFilter, RowFilterCondition, RowPatch},
    search::{
        EduOfficeCode, PageIndex, PageSize, SchoolId, SchoolQuery, SchoolSearch,
        SearchInputError,
    },
};

pub use ports::{
    directory::{DirectoryError, SchoolDirectory},
    identity::{IdentityError, IdentityProvider},
    rows::{RowStore, RowStoreError},
};

pub use cors::CorsPolicy;
pub use http_abstraction::{CorsResponseHelpers, EdgeRequest, EdgeResponseBuilder};
