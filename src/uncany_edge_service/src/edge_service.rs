use std::any::Any;
use std::sync::Arc;

use axum::{
    Json, Router,
    response::Response,
    routing::{any, get},
};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use uncany_application::DeletionPlan;
use uncany_axum::{
    response_builder,
    routes::{DeleteAccountState, SchoolDirectoryState, delete_account, school_directory},
};
use uncany_core::{CorsPolicy, CorsResponseHelpers, IdentityProvider, RowStore, SchoolDirectory};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// CORS headers for responses produced outside of any handler.
const FALLBACK_CORS: CorsPolicy = CorsPolicy::new("GET, POST, OPTIONS");

/// The edge functions behind one router
pub struct EdgeService {
    router: Router,
}

impl EdgeService {
    /// Create a new EdgeService with the provided ports
    ///
    /// # Arguments
    /// * `identity_provider` - Resolves bearer tokens and deletes identities
    /// * `row_store` - Receives the soft deletes of account deletion
    /// * `directory` - Upstream school directory, `None` when no API key is configured
    /// * `plan` - Tables and columns touched by account deletion
    ///
    /// # Note on Architecture
    /// Each route is given only the state it needs.
    pub fn new<I, R, D>(
        identity_provider: Arc<I>,
        row_store: Arc<R>,
        directory: Option<Arc<D>>,
        plan: DeletionPlan,
    ) -> Self
    where
        I: IdentityProvider + 'static,
        R: RowStore + 'static,
        D: SchoolDirectory + 'static,
    {
        let router = Router::new()
            // Account deletion needs the identity provider and the row store
            .route("/delete-account", any(delete_account::<I, R>))
            .with_state(DeleteAccountState::new(
                Arc::clone(&identity_provider),
                row_store,
                plan,
            ))
            // The directory proxy needs the identity provider and the directory
            .route("/neis-api", any(school_directory::<I, D>))
            .with_state(SchoolDirectoryState::new(identity_provider, directory))
            .route("/health", get(health));

        Self { router }
    }

    fn with_layers(mut self) -> Self {
        self.router = self
            .router
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            )
            .layer(CatchPanicLayer::custom(handle_panic));
        self
    }

    /// Convert the EdgeService into a router that can be nested into another application
    pub fn as_router(self) -> Router {
        self.with_layers().router
    }

    /// Run the edge service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.as_router();

        tracing::info!("Edge service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(%detail, "Handler panicked");

    response_builder().cors_error(&FALLBACK_CORS, 500, "internal server error")
}
