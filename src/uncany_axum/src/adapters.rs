//! Axum framework adapters for the edge function handlers.
//!
//! This module implements `EdgeRequest` and `EdgeResponseBuilder` for Axum's
//! types using wrappers to avoid the orphan rule.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │  uncany_core::EdgeRequest (trait)          │
//! └────────────────┬───────────────────────────┘
//!                  │
//!                  ▼
//! ┌────────────────────────────────────────────┐
//! │  AxumRequest { parts, query }              │
//! │  impl EdgeRequest for AxumRequest { }      │
//! └────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use axum::body::Body;
use axum::extract::{Query, Request};
use axum::http::{Response, StatusCode, request::Parts};
use uncany_core::{EdgeRequest, EdgeResponseBuilder};

/// Wrapper around the head of an Axum request with its decoded query string.
///
/// The handlers never read a body, so it is dropped on construction.
pub struct AxumRequest {
    parts: Parts,
    query: HashMap<String, String>,
}

impl From<Request> for AxumRequest {
    fn from(req: Request) -> Self {
        let (parts, _body) = req.into_parts();
        // A query string that does not decode is treated as absent
        let query = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map(|Query(query)| query)
            .unwrap_or_default();
        AxumRequest { parts, query }
    }
}

impl EdgeRequest for AxumRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name)?.to_str().ok()
    }

    fn method(&self) -> &str {
        self.parts.method.as_str()
    }

    fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}

/// Wrapper around Axum's response builder.
pub struct AxumResponseBuilder {
    builder: axum::http::response::Builder,
    body: Option<String>,
}

impl AxumResponseBuilder {
    /// Create a new Axum response builder
    pub fn new() -> Self {
        Self {
            builder: Response::builder(),
            body: None,
        }
    }
}

impl Default for AxumResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeResponseBuilder for AxumResponseBuilder {
    type Response = Response<Body>;

    fn status(mut self, code: u16) -> Self {
        self.builder = self.builder.status(code);
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    fn json_body(mut self, body: serde_json::Value) -> Self {
        self.builder = self.builder.header("content-type", "application/json");
        self.body = Some(body.to_string());
        self
    }

    fn build(self) -> Self::Response {
        let body = self.body.unwrap_or_default();
        self.builder.body(Body::from(body)).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Invalid response parts");
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        })
    }
}

/// Helper function to create an Axum response builder
///
/// ```ignore
/// let builder = response_builder();
/// handlers::handle_delete_account(&identity, &rows, &plan, &request, builder).await
/// ```
pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::new()
}
