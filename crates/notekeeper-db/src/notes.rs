//! Note repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres, Row, Transaction};
use tracing::debug;

use notekeeper_core::{Error, Note, NoteId, NoteInput, NoteRepository, Result};

/// Columns returned by every note query, in `map_row_to_note` order.
const NOTE_COLUMNS: &str = "id, name, node, createdate, updatedate";

/// PostgreSQL implementation of NoteRepository.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Map a database row to a Note.
fn map_row_to_note(row: sqlx::postgres::PgRow) -> Note {
    Note {
        id: row.get("id"),
        name: row.get("name"),
        body: row.get("node"),
        created_at: row.get("createdate"),
        updated_at: row.get("updatedate"),
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn create(&self, input: NoteInput) -> Result<Note> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        let note = self.create_tx(&mut tx, input).await?;
        tx.commit().await.map_err(Error::Database)?;
        Ok(note)
    }

    async fn list(&self) -> Result<Vec<Note>> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        let notes = self.list_tx(&mut tx).await?;
        tx.commit().await.map_err(Error::Database)?;
        Ok(notes)
    }

    async fn get(&self, id: NoteId) -> Result<Option<Note>> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        let note = self.get_tx(&mut tx, id).await?;
        tx.commit().await.map_err(Error::Database)?;
        Ok(note)
    }

    async fn update(&self, id: NoteId, input: NoteInput) -> Result<Option<Note>> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        let note = self.update_tx(&mut tx, id, input).await?;
        tx.commit().await.map_err(Error::Database)?;
        Ok(note)
    }

    async fn delete(&self, id: NoteId) -> Result<Option<Note>> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        let note = self.delete_tx(&mut tx, id).await?;
        tx.commit().await.map_err(Error::Database)?;
        Ok(note)
    }
}

// =============================================================================
// TRANSACTION-AWARE VARIANTS
// =============================================================================

/// Transaction-aware variants.
///
/// These accept an open transaction so several note operations can share one
/// session. Nothing here commits; the caller owns the transaction, and
/// dropping it uncommitted rolls every statement back.
impl PgNoteRepository {
    /// Insert a note within an existing transaction.
    pub async fn create_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        input: NoteInput,
    ) -> Result<Note> {
        let now = Utc::now();
        let row = sqlx::query(&format!(
            "INSERT INTO note (name, node, createdate, updatedate)
             VALUES ($1, $2, $3, $3)
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.body)
        .bind(now)
        .fetch_one(&mut **tx)
        .await
        .map_err(Error::Database)?;

        let note = map_row_to_note(row);
        debug!(
            subsystem = "database",
            component = "notes",
            op = "create",
            note_id = note.id,
            "Note created"
        );
        Ok(note)
    }

    /// List all notes within an existing transaction.
    pub async fn list_tx(&self, tx: &mut Transaction<'_, Postgres>) -> Result<Vec<Note>> {
        let rows = sqlx::query(&format!("SELECT {NOTE_COLUMNS} FROM note ORDER BY id ASC"))
            .fetch_all(&mut **tx)
            .await
            .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "notes",
            op = "list",
            result_count = rows.len(),
            "Notes listed"
        );
        Ok(rows.into_iter().map(map_row_to_note).collect())
    }

    /// Fetch a note within an existing transaction.
    pub async fn get_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: NoteId,
    ) -> Result<Option<Note>> {
        let row = sqlx::query(&format!("SELECT {NOTE_COLUMNS} FROM note WHERE id = $1"))
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(Error::Database)?;
        Ok(row.map(map_row_to_note))
    }

    /// Replace a note's name and body within an existing transaction.
    ///
    /// `updatedate` never moves behind `createdate`, even if the server clock
    /// stepped backwards since the note was created.
    pub async fn update_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: NoteId,
        input: NoteInput,
    ) -> Result<Option<Note>> {
        let now = Utc::now();
        let row = sqlx::query(&format!(
            "UPDATE note
             SET name = $1, node = $2, updatedate = GREATEST(createdate, $3)
             WHERE id = $4
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.body)
        .bind(now)
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "notes",
            op = "update",
            note_id = id,
            found = row.is_some(),
            "Note update"
        );
        Ok(row.map(map_row_to_note))
    }

    /// Delete a note within an existing transaction, returning the removed row.
    pub async fn delete_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: NoteId,
    ) -> Result<Option<Note>> {
        let row = sqlx::query(&format!(
            "DELETE FROM note WHERE id = $1 RETURNING {NOTE_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "notes",
            op = "delete",
            note_id = id,
            found = row.is_some(),
            "Note delete"
        );
        Ok(row.map(map_row_to_note))
    }
}
