//! Axum integration for the Uncany edge functions.
//!
//! This crate provides thin Axum adapters for the framework-agnostic
//! handlers defined in `uncany_adapters`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  uncany_core: HTTP trait definitions     │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  uncany_axum: Axum implementations       │
//! │  - AxumRequest wrapper                   │
//! │  - AxumResponseBuilder                   │
//! │  - Axum route handlers                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use axum::{Router, routing::any};
//! use uncany_axum::routes::{self, DeleteAccountState};
//!
//! let app = Router::new()
//!     .route("/delete-account", any(routes::delete_account::<I, R>))
//!     .with_state(DeleteAccountState::new(identity, rows, plan));
//! ```

pub mod adapters;
pub mod routes;

// Re-export for convenience
pub use adapters::{AxumRequest, AxumResponseBuilder, response_builder};
