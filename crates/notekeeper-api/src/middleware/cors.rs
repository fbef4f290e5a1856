//! CORS configuration with an explicit origin allow-list.
//!
//! Credentials are allowed, so wildcard origins and headers are never used;
//! request headers are mirrored back instead.

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::config::DEFAULT_ALLOWED_ORIGINS;

/// Parse a comma-separated origin list. Blank input yields the defaults;
/// entries that are not valid header values are skipped with a warning.
pub fn parse_allowed_origins(origins_str: &str) -> Vec<HeaderValue> {
    let source = if origins_str.trim().is_empty() {
        DEFAULT_ALLOWED_ORIGINS
    } else {
        origins_str
    };

    source
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!("Invalid CORS origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect()
}

/// Build the CORS layer for the given origins.
pub fn cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
