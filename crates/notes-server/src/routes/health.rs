//! Health check endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Number of notes currently held in memory.
    pub notes: usize,
}

/// GET /health - Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let notes = state.store().read().await.len();
    Json(HealthResponse {
        status: "ok".to_string(),
        notes,
    })
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_store::NoteStore;

    use crate::config::ServerConfig;

    #[tokio::test]
    async fn test_health_check() {
        let mut store = NoteStore::new();
        store.create(None, "note".to_string()).unwrap();
        let state = AppState::new(store, ServerConfig::default());

        let response = health_check(State(state)).await;
        assert_eq!(response.status, "ok");
        assert_eq!(response.notes, 1);
    }
}
