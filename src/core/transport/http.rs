//! HTTP transport implementation.
//!
//! HTTP server with JSON-RPC over POST requests. Status code mapping:
//! `200` for every fully-handled request including embedded-error envelopes,
//! `202` with an empty body for notifications, `400` for unrecognized
//! methods, `405` for GET on the RPC path, `500` for unparseable bodies.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, instrument};

use crate::core::context::RequestContext;
use crate::core::dispatcher::{DispatchOutcome, RequestDispatcher};
use crate::core::server::McpServer;

use super::config::HttpConfig;
use super::error::{TransportError, TransportResult};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
struct AppState {
    dispatcher: Arc<RequestDispatcher>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let app = build_router(server.dispatcher(), &self.config.rpc_path, self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, CORS {})",
            addr,
            if self.config.enable_cors { "enabled" } else { "disabled" }
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the axum router for the RPC endpoint and the health probe.
///
/// The RPC path only accepts POST; axum's method routing answers GET (and
/// any other verb) with `405 Method Not Allowed`.
fn build_router(dispatcher: Arc<RequestDispatcher>, rpc_path: &str, enable_cors: bool) -> Router {
    let state = AppState { dispatcher };

    let mut app = Router::new()
        .route(rpc_path, post(handle_rpc))
        .route("/health", get(health_check))
        .with_state(state);

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle JSON-RPC requests.
#[instrument(skip_all)]
async fn handle_rpc(State(state): State<AppState>, headers: HeaderMap, body: String) -> Response {
    let ctx = RequestContext::with_headers(headers.iter().filter_map(|(name, value)| {
        value
            .to_str()
            .ok()
            .map(|v| (name.as_str().to_string(), v.to_string()))
    }));

    match state.dispatcher.dispatch(&body, &ctx).await {
        DispatchOutcome::Reply(response) => (StatusCode::OK, Json(response)).into_response(),
        DispatchOutcome::BadRequest(response) => {
            (StatusCode::BAD_REQUEST, Json(response)).into_response()
        }
        DispatchOutcome::Accepted => StatusCode::ACCEPTED.into_response(),
        DispatchOutcome::ParseFailure => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
