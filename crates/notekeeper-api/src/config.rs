//! Server configuration loaded from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_URL` | `postgres://localhost:5432/notes` |
//! | `DATABASE_MAX_CONNECTIONS` | `10` |
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `8000` |
//! | `ALLOWED_ORIGINS` | `http://localhost,http://localhost:3000` |
//! | `RUN_MIGRATIONS` | `true` |
//!
//! Logging variables (`LOG_FORMAT`, `LOG_FILE`, `LOG_ANSI`, `RUST_LOG`) are
//! read by [`LogConfig`].
//!
//! Unparseable numeric values fall back to their defaults.

use std::net::SocketAddr;

use notekeeper_core::{Error, Result};

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/notes";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost,http://localhost:3000";
pub const DEFAULT_LOG_FILTER: &str = "notekeeper_api=debug,notekeeper_db=debug,tower_http=debug";

/// Interpret common truthy spellings.
fn parse_flag(value: &str) -> bool {
    matches!(value.trim(), "true" | "1" | "yes")
}

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    /// Raw comma-separated CORS origin list.
    pub allowed_origins: String,
    pub run_migrations: bool,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: lookup("PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string()),
            run_migrations: lookup("RUN_MIGRATIONS")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| Error::Config(format!("invalid bind address '{}': {}", addr, e)))
    }
}

/// Logging output settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
    /// Optional log file path; enables daily rotation.
    pub file: Option<String>,
    /// Force ANSI colors on or off. `None` auto-detects (and disables for files).
    pub ansi: Option<bool>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            json: lookup("LOG_FORMAT").is_some_and(|v| v.trim().eq_ignore_ascii_case("json")),
            file: lookup("LOG_FILE").filter(|v| !v.trim().is_empty()),
            ansi: lookup("LOG_ANSI").map(|v| parse_flag(&v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.allowed_origins, DEFAULT_ALLOWED_ORIGINS);
        assert!(config.run_migrations);
    }

    #[test]
    fn test_values_from_lookup() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db.internal/notes"),
            ("DATABASE_MAX_CONNECTIONS", "25"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("ALLOWED_ORIGINS", "https://notes.example.com"),
            ("RUN_MIGRATIONS", "false"),
        ]));
        assert_eq!(config.database_url, "postgres://db.internal/notes");
        assert_eq!(config.max_connections, 25);
        assert_eq!(config.port, 9090);
        assert_eq!(config.allowed_origins, "https://notes.example.com");
        assert!(!config.run_migrations);
        assert_eq!(
            config.bind_addr().unwrap(),
            "127.0.0.1:9090".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "eighty"),
            ("DATABASE_MAX_CONNECTIONS", "0"),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn test_bind_addr_rejects_bad_host() {
        let config = ServerConfig::from_lookup(lookup_from(&[("HOST", "not a host")]));
        match config.bind_addr() {
            Err(Error::Config(msg)) => assert!(msg.contains("not a host:8000")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_log_config() {
        let default = LogConfig::from_lookup(|_| None);
        assert!(!default.json);
        assert!(default.file.is_none());
        assert!(default.ansi.is_none());

        let custom = LogConfig::from_lookup(lookup_from(&[
            ("LOG_FORMAT", "JSON"),
            ("LOG_FILE", "/var/log/notekeeper/api.log"),
            ("LOG_ANSI", "1"),
        ]));
        assert!(custom.json);
        assert_eq!(custom.file.as_deref(), Some("/var/log/notekeeper/api.log"));
        assert_eq!(custom.ansi, Some(true));
    }
}
