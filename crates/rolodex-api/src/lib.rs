//! # rolodex-api
//!
//! HTTP API server for the rolodex contact service.
//!
//! Exposes contact CRUD over `/api/contacts` with JSON bodies. Every
//! handler performs a full load → filter/mutate → save cycle against the
//! flat-file store; there is no cross-request state beyond the store path.

pub mod handlers;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use rolodex_core::FieldErrors;
use rolodex_store::ContactStore;

use handlers::{create_contact, delete_contact, get_contact, health, list_contacts, update_contact};

// =============================================================================
// REQUEST ID (UUIDv7)
// =============================================================================

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically — useful for
/// log correlation when tracing a sequence of contact mutations.
#[derive(Clone, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

// =============================================================================
// APPLICATION STATE & ROUTER
// =============================================================================

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The backing contact store; the file is the sole source of truth.
    pub store: Arc<dyn ContactStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }
}

/// Build the application router.
///
/// Used by both the binary and the integration tests so they exercise the
/// same routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/contacts", get(list_contacts).post(create_contact))
        .route(
            "/api/contacts/:id",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        // Contact payloads are tiny; anything bigger is not a contact.
        .layer(RequestBodyLimitLayer::new(64 * 1024))
        .with_state(state)
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

/// HTTP-facing error, mapped from `rolodex_core::Error`.
#[derive(Debug)]
pub enum ApiError {
    Validation(FieldErrors),
    DuplicateEmail,
    NotFound(String),
    Internal(String),
}

impl From<rolodex_core::Error> for ApiError {
    fn from(err: rolodex_core::Error) -> Self {
        match err {
            rolodex_core::Error::Validation(errors) => ApiError::Validation(errors),
            rolodex_core::Error::DuplicateEmail => ApiError::DuplicateEmail,
            rolodex_core::Error::NotFound(msg) => ApiError::NotFound(msg),
            rolodex_core::Error::Corrupt(msg) => {
                ApiError::Internal(format!("contact store is corrupt: {}", msg))
            }
            rolodex_core::Error::Serialization(msg) => ApiError::Internal(msg),
            rolodex_core::Error::Io(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "message": "Validation failed.",
                    "errors": errors,
                }),
            ),
            ApiError::DuplicateEmail => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "message": "A contact with this email already exists.",
                }),
            ),
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "message": msg }),
            ),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({
                        "message": "The contact store could not be read or written.",
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
