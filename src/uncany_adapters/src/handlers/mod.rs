//! Framework-agnostic edge function handlers.
//!
//! These handlers contain the request flow without any framework dependencies.
//! Framework-specific routes (Axum, etc.) wrap their request type, call these
//! handlers, and render any `EdgeApiError` with the handler's CORS policy.

pub mod authenticate;
pub mod delete_account;
pub mod school_directory;

pub use authenticate::authenticate;
pub use delete_account::{DELETE_ACCOUNT_CORS, handle_delete_account};
pub use school_directory::{SCHOOL_DIRECTORY_CORS, handle_school_directory};

pub(crate) const METHOD_OPTIONS: &str = "OPTIONS";
