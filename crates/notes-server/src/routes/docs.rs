//! OpenAPI document for the HTTP API.

use axum::{Json, Router, routing::get};
use utoipa::OpenApi;

use super::{health, notes};
use crate::extract::NoteRequest;
use crate::state::AppState;

/// OpenAPI description generated from the handler annotations.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notes service",
        version = "1.0",
        description = "Create, list, fetch, update and delete short text notes"
    ),
    paths(
        notes::list_notes,
        notes::create_note,
        notes::get_note,
        notes::update_note,
        notes::delete_note,
        health::health_check,
    ),
    components(schemas(NoteRequest, notes::NoteResponse, health::HealthResponse)),
    tags(
        (name = "notes", description = "Notes APIs"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// GET /swagger.json - Serve the OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build documentation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/swagger.json", get(openapi_json))
}
