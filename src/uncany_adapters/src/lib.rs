pub mod config;
pub mod directory;
pub mod error;
pub mod handlers;
pub mod http;
pub mod identity;
pub mod persistence;

pub use error::EdgeApiError;
