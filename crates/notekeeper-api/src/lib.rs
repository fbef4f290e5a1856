//! notekeeper-api - HTTP routing layer for notekeeper.
//!
//! The binary in `main.rs` only wires configuration, logging and the database
//! together; everything reachable over HTTP is assembled here so tests can
//! drive the real router in-process.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::get,
    Router,
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use notekeeper_core::NoteRepository;

pub use error::ApiError;

/// Prefixes the note routes are mounted under. The doubled prefix is kept for
/// clients written against the older router.
pub const NOTE_ROUTE_PREFIXES: [&str; 2] = ["/notes", "/notes/notes"];

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<dyn NoteRepository>,
}

impl AppState {
    pub fn new(notes: impl NoteRepository + 'static) -> Self {
        Self {
            notes: Arc::new(notes),
        }
    }
}

fn mount_note_routes(router: Router<AppState>, prefix: &str) -> Router<AppState> {
    router
        .route(
            &format!("{prefix}/"),
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            &format!("{prefix}/:id"),
            get(handlers::get_note)
                .put(handlers::update_note)
                .delete(handlers::delete_note),
        )
}

/// Routes only, without middleware.
pub fn router(state: AppState) -> Router {
    let base = Router::new()
        .route("/", get(handlers::live_message))
        .route("/openapi.json", get(openapi::openapi_json));

    NOTE_ROUTE_PREFIXES
        .iter()
        .fold(base, |router, prefix| mount_note_routes(router, prefix))
        .with_state(state)
}

/// Full application: routes plus timing, tracing, request-id and CORS layers.
pub fn app(state: AppState, allowed_origins: Vec<HeaderValue>) -> Router {
    router(state)
        .layer(axum::middleware::from_fn(
            middleware::add_process_time_header,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuidV7))
        .layer(middleware::cors_layer(allowed_origins))
}
