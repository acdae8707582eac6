//! # Uncany - Edge Functions
//!
//! This is a facade crate that re-exports all public APIs from the edge function components.
//! Use this crate to get access to the account deletion and school directory functions in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! uncany = { path = "../uncany" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `UserId`, `SchoolSearch`, `DirectoryRecord`, etc.
//! - **Port traits**: `IdentityProvider`, `RowStore`, `SchoolDirectory`
//! - **Use cases**: `DeleteAccountUseCase`, `SearchSchoolsUseCase`, etc.
//! - **Adapters**: `SupabaseIdentityClient`, `PostgrestRowStore`, `NeisSchoolDirectory`, etc.
//! - **Service**: `EdgeService` - The router serving every edge function

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use uncany_core::*;
}

// Re-export most commonly used core types at the root level
pub use uncany_core::{
    AuthenticatedCaller, BearerToken, CorsPolicy, DeletionOutcome, DirectoryRecord, SchoolId,
    SchoolListing, SchoolSearch, UserId,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use uncany_core::{
        DirectoryError, IdentityError, IdentityProvider, RowStore, RowStoreError, SchoolDirectory,
    };
}

// Re-export port traits at root level
pub use ports::{
    DirectoryError, IdentityError, IdentityProvider, RowStore, RowStoreError, SchoolDirectory,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use uncany_application::*;
}

// Re-export use cases at root level
pub use uncany_application::{
    AuthenticateCallerUseCase, DeleteAccountUseCase, DeletionPlan, GetSchoolInfoUseCase,
    SearchSchoolsUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic handlers
    pub mod handlers {
        pub use uncany_adapters::handlers::*;
    }

    /// Identity provider implementations
    pub mod identity {
        pub use uncany_adapters::identity::*;
    }

    /// Row store implementations
    pub mod persistence {
        pub use uncany_adapters::persistence::*;
    }

    /// School directory implementations
    pub mod directory {
        pub use uncany_adapters::directory::*;
    }

    /// Configuration
    pub mod config {
        pub use uncany_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use uncany_adapters::{
    EdgeApiError,
    directory::NeisSchoolDirectory,
    identity::{InMemoryIdentityProvider, SupabaseIdentityClient},
    persistence::{InMemoryRowStore, PostgresRowStore, PostgrestRowStore},
};

// ============================================================================
// Axum Integration
// ============================================================================

/// Axum request/response adapters and route functions
pub mod axum {
    pub use uncany_axum::*;
}

// ============================================================================
// Edge Service (Main Entry Point)
// ============================================================================

/// Main edge service
pub use uncany_edge_service::{
    EdgeService, EdgeSettings, RowStoreBackend, WiringError, build_from_settings,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
