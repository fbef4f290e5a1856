//! Error types for notekeeper.

use thiserror::Error;

/// Result type alias using notekeeper's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for notekeeper operations.
///
/// A missing note is not an error: repository lookups return `Option` and
/// leave the status decision to the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("PORT out of range".to_string());
        assert_eq!(err.to_string(), "Configuration error: PORT out of range");
    }

    #[test]
    fn test_from_sqlx_error() {
        let err: Error = sqlx::Error::RowNotFound.into();
        match err {
            Error::Database(sqlx::Error::RowNotFound) => {}
            other => panic!("Expected Database error, got {:?}", other),
        }
    }

    #[test]
    fn test_database_error_display_includes_cause() {
        let err: Error = sqlx::Error::PoolTimedOut.into();
        assert!(err.to_string().starts_with("Database error: "));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
