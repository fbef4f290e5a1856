//! Core traits for notekeeper abstractions.
//!
//! The HTTP layer depends only on these traits, so the PostgreSQL backend can
//! be swapped for a test double.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Note, NoteId, NoteInput};

// =============================================================================
// NOTE REPOSITORY TRAITS
// =============================================================================

/// Repository for note CRUD operations.
///
/// Implementations run each call inside one storage session and commit any
/// write before returning. A missing note yields `Ok(None)`; `Err` is reserved
/// for genuine storage failures.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a new note. `created_at` and `updated_at` are set to the same instant.
    async fn create(&self, input: NoteInput) -> Result<Note>;

    /// List all notes in insertion order.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Fetch a note by ID.
    async fn get(&self, id: NoteId) -> Result<Option<Note>>;

    /// Replace name and body, refreshing `updated_at`.
    async fn update(&self, id: NoteId, input: NoteInput) -> Result<Option<Note>>;

    /// Permanently delete a note, returning it as it was before removal.
    async fn delete(&self, id: NoteId) -> Result<Option<Note>>;
}
