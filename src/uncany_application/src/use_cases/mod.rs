pub mod authenticate_caller;
pub mod delete_account;
pub mod get_school_info;
pub mod search_schools;
