//! HTTP handlers for notekeeper-api.

pub mod health;
pub mod notes;

pub use health::{live_message, LiveMessage};
pub use notes::{create_note, delete_note, get_note, list_notes, update_note, ErrorDetail};
