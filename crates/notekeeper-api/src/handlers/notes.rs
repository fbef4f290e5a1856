//! Note HTTP handlers.
//!
//! Each handler performs exactly one repository call, so a request holds at
//! most one storage session. Absent notes become `404 {"detail":"Note not found"}`.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use notekeeper_core::{Note, NoteId, NoteInput};

use crate::{ApiError, AppState};

/// Error body shared by every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Create a note.
///
/// # Returns
/// - 200 OK with the created note, including its assigned id
/// - 4xx if the body is not `{"name": string, "node": string}`
/// - 500 Internal Server Error if the insert fails
#[utoipa::path(
    post,
    path = "/notes/",
    tag = "notes",
    request_body = NoteInput,
    responses(
        (status = 200, description = "Note created", body = Note),
        (status = 422, description = "Invalid note body", body = ErrorDetail)
    )
)]
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<NoteInput>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let Json(input) = payload?;
    let note = state.notes.create(input).await?;
    info!(subsystem = "api", op = "create_note", note_id = note.id, "Note created");
    Ok(Json(note))
}

/// List every note.
#[utoipa::path(
    get,
    path = "/notes/",
    tag = "notes",
    responses((status = 200, description = "All notes", body = [Note]))
)]
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state.notes.list().await?;
    Ok(Json(notes))
}

/// Get a note by id.
#[utoipa::path(
    get,
    path = "/notes/{id}",
    tag = "notes",
    params(("id" = i64, Path, description = "Note id")),
    responses(
        (status = 200, description = "The note", body = Note),
        (status = 404, description = "Note not found", body = ErrorDetail),
        (status = 422, description = "Id is not an integer", body = ErrorDetail)
    )
)]
pub async fn get_note(
    State(state): State<AppState>,
    id: Result<Path<NoteId>, PathRejection>,
) -> Result<Json<Note>, ApiError> {
    let Path(id) = id?;
    let note = state
        .notes
        .get(id)
        .await?
        .ok_or_else(ApiError::note_not_found)?;
    Ok(Json(note))
}

/// Replace a note's name and body.
///
/// # Returns
/// - 200 OK with the updated note
/// - 404 Not Found if no note has this id (nothing is written)
/// - 4xx for a non-integer id or an invalid body
#[utoipa::path(
    put,
    path = "/notes/{id}",
    tag = "notes",
    params(("id" = i64, Path, description = "Note id")),
    request_body = NoteInput,
    responses(
        (status = 200, description = "Note updated", body = Note),
        (status = 404, description = "Note not found", body = ErrorDetail),
        (status = 422, description = "Invalid id or body", body = ErrorDetail)
    )
)]
pub async fn update_note(
    State(state): State<AppState>,
    id: Result<Path<NoteId>, PathRejection>,
    payload: Result<Json<NoteInput>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let note = state
        .notes
        .update(id, input)
        .await?
        .ok_or_else(ApiError::note_not_found)?;
    info!(subsystem = "api", op = "update_note", note_id = id, "Note updated");
    Ok(Json(note))
}

/// Delete a note, returning it as it was before removal.
#[utoipa::path(
    delete,
    path = "/notes/{id}",
    tag = "notes",
    params(("id" = i64, Path, description = "Note id")),
    responses(
        (status = 200, description = "Deleted note", body = Note),
        (status = 404, description = "Note not found", body = ErrorDetail),
        (status = 422, description = "Id is not an integer", body = ErrorDetail)
    )
)]
pub async fn delete_note(
    State(state): State<AppState>,
    id: Result<Path<NoteId>, PathRejection>,
) -> Result<Json<Note>, ApiError> {
    let Path(id) = id?;
    let note = state
        .notes
        .delete(id)
        .await?
        .ok_or_else(ApiError::note_not_found)?;
    info!(subsystem = "api", op = "delete_note", note_id = id, "Note deleted");
    Ok(Json(note))
}
