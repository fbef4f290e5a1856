//! # notekeeper-core
//!
//! Core types, traits, and abstractions for notekeeper.
//!
//! This crate provides the note data model, the error taxonomy, and the
//! repository trait that the storage and HTTP crates depend on.

pub mod error;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
