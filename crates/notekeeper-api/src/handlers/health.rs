//! Liveness endpoint.

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed payload proving the process is up. Does not touch the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LiveMessage {
    pub name: String,
    pub message: String,
}

impl LiveMessage {
    pub fn live() -> Self {
        Self {
            name: "Server".to_string(),
            message: "Live".to_string(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Server is live", body = LiveMessage))
)]
pub async fn live_message() -> Json<LiveMessage> {
    Json(LiveMessage::live())
}
