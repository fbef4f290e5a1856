//! `X-Process-Time` response header.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

pub static X_PROCESS_TIME: HeaderName = HeaderName::from_static("x-process-time");

/// Record how long the inner service took, in seconds, on every response.
pub async fn add_process_time_header(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let mut response = next.run(request).await;
    let elapsed = start.elapsed().as_secs_f64();

    if let Ok(value) = HeaderValue::from_str(&format!("{:.6}", elapsed)) {
        response.headers_mut().insert(X_PROCESS_TIME.clone(), value);
    }
    response
}
