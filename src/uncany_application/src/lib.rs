pub mod use_cases;

pub use use_cases::{
    authenticate_caller::AuthenticateCallerUseCase,
    delete_account::{DeleteAccountError, DeleteAccountUseCase, DeletionPlan},
    get_school_info::{GetSchoolInfoUseCase, SchoolInfoError},
    search_schools::{SchoolPage, SearchSchoolsUseCase},
};
