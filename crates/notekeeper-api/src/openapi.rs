//! OpenAPI document served at `/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use notekeeper_core::{Note, NoteInput};

use crate::handlers::{self, ErrorDetail, LiveMessage};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "notekeeper API",
        description = "Create, list, read, update and delete short text notes"
    ),
    paths(
        handlers::health::live_message,
        handlers::notes::create_note,
        handlers::notes::list_notes,
        handlers::notes::get_note,
        handlers::notes::update_note,
        handlers::notes::delete_note,
    ),
    components(schemas(Note, NoteInput, LiveMessage, ErrorDetail)),
    tags(
        (name = "notes", description = "Note CRUD operations"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
