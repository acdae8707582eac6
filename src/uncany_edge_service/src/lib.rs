mod edge_service;
mod tracing;
mod wiring;

pub use edge_service::EdgeService;
pub use wiring::{RowStoreBackend, WiringError, build_from_settings};

// Re-export commonly used types
pub use uncany_adapters::config::EdgeSettings;
pub use uncany_core::{IdentityProvider, RowStore, SchoolDirectory};
