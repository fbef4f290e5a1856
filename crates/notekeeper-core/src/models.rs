//! Core data models for notekeeper.
//!
//! Wire names follow the established JSON contract: the note body travels as
//! `node` and the timestamps as `createdate` / `updatedate`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// Store-assigned note identifier.
pub type NoteId = i64;

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A persisted note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Note {
    pub id: NoteId,
    pub name: String,
    /// Free-form text content.
    #[serde(rename = "node", alias = "body")]
    pub body: String,
    /// Set once when the note is created.
    #[serde(rename = "createdate")]
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update.
    #[serde(rename = "updatedate")]
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or replacing a note.
///
/// Only a JSON object is accepted; unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct NoteInput {
    pub name: String,
    #[serde(rename = "node")]
    pub body: String,
}

impl NoteInput {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

impl<'de> Deserialize<'de> for NoteInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(NoteInputVisitor)
    }
}

struct NoteInputVisitor;

impl<'de> Visitor<'de> for NoteInputVisitor {
    type Value = NoteInput;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a note object with string fields `name` and `node`")
    }

    fn visit_map<A>(self, mut map: A) -> Result<NoteInput, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut name: Option<String> = None;
        let mut body: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "name" => {
                    if name.is_some() {
                        return Err(de::Error::duplicate_field("name"));
                    }
                    name = Some(map.next_value()?);
                }
                // `body` is an input alias for `node`
                "node" | "body" => {
                    if body.is_some() {
                        return Err(de::Error::duplicate_field("node"));
                    }
                    body = Some(map.next_value()?);
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(NoteInput {
            name: name.ok_or_else(|| de::Error::missing_field("name"))?,
            body: body.ok_or_else(|| de::Error::missing_field("node"))?,
        })
    }
}
