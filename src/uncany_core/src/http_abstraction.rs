//! Framework-agnostic HTTP abstraction for the edge function handlers.
//!
//! Handlers are written against these traits; web frameworks implement them
//! on newtype wrappers of their own request and response types.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  uncany_core: Defines HTTP traits        │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  uncany_axum: Newtype wrappers           │
//! │  impl EdgeRequest for AxumRequest { }    │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  uncany_adapters::handlers use the       │
//! │  trait methods (generic over framework)  │
//! └──────────────────────────────────────────┘
//! ```

use crate::cors::CorsPolicy;

/// Trait for incoming requests handled by an edge function.
pub trait EdgeRequest {
    /// Get a header value by name.
    ///
    /// Header lookup is case-insensitive.
    /// Returns `None` if the header doesn't exist or isn't valid UTF-8.
    fn header(&self, name: &str) -> Option<&str>;

    /// Get the HTTP method (GET, POST, etc.)
    fn method(&self) -> &str;

    /// Get a decoded query string parameter by name.
    fn query_param(&self, name: &str) -> Option<&str>;
}

/// Trait for building HTTP responses.
///
/// Follows the builder pattern:
/// ```ignore
/// builder
///     .status(200)
///     .header("access-control-allow-origin", "*")
///     .json_body(json!({"message": "account deleted"}))
///     .build()
/// ```
pub trait EdgeResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Set a JSON body with Content-Type header
    fn json_body(self, body: serde_json::Value) -> Self;

    /// Build the final response
    fn build(self) -> Self::Response;
}

/// Response shapes shared by every edge function.
///
/// Automatically implemented for all types that implement `EdgeResponseBuilder`.
pub trait CorsResponseHelpers: EdgeResponseBuilder {
    /// A JSON response carrying the CORS headers of `policy`.
    fn cors_json(self, policy: &CorsPolicy, status: u16, body: serde_json::Value) -> Self::Response {
        policy
            .response_headers()
            .into_iter()
            .fold(self.status(status), |builder, (name, value)| {
                builder.header(name, value)
            })
            .json_body(body)
            .build()
    }

    /// A 204 `OPTIONS` preflight response without a body.
    fn preflight(self, policy: &CorsPolicy) -> Self::Response {
        policy
            .preflight_headers()
            .into_iter()
            .fold(self.status(204), |builder, (name, value)| {
                builder.header(name, value)
            })
            .build()
    }

    /// `{ "error": message }` with the given status.
    fn cors_error(self, policy: &CorsPolicy, status: u16, message: &str) -> Self::Response {
        self.cors_json(policy, status, serde_json::json!({ "error": message }))
    }
}

// Blanket implementation for all EdgeResponseBuilder types
impl<T: EdgeResponseBuilder> CorsResponseHelpers for T {}
