//! Note routes.
//!
//! This module implements the note HTTP endpoints:
//! - GET /notes/ - List notes, optionally filtered by `query`
//! - POST /notes/ - Create a note
//! - GET /notes/{id} - Get a note
//! - PUT /notes/{id} - Replace a note's title and content
//! - DELETE /notes/{id} - Delete a note
//!
//! Every note in a response carries its display title: the stored title, or
//! the first N characters of the content when the title is empty.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use notes_core::{Note, NoteId};

use crate::error::{ApiError, ApiResult};
use crate::extract::{ListQuery, NoteBody, NoteIdPath, NoteRequest};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// A note as returned to callers.
#[derive(Debug, Serialize, ToSchema)]
#[schema(title = "Note with id")]
pub struct NoteResponse {
    /// Note identifier.
    #[schema(value_type = u64)]
    pub id: NoteId,
    /// Display title. Falls back to the start of the content when the note
    /// has no title.
    pub title: String,
    /// Note text.
    pub content: String,
}

impl NoteResponse {
    /// Build the display form of a note.
    pub fn from_note(note: Note, prefix_len: usize) -> Self {
        let title = note.display_title(prefix_len);
        Self {
            id: note.id,
            title,
            content: note.content,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /notes/ - List notes.
///
/// Without `query`, or with an empty one, every note is returned. Otherwise
/// only notes whose title or content contains the query (case-sensitive).
/// Notes are ordered by id. A repeated `query` uses its first value.
#[utoipa::path(
    get,
    path = "/notes/",
    tag = "notes",
    params(
        ("query" = Option<String>, Query,
            description = "Filter: only notes whose title or content contains this text"),
    ),
    responses((status = 200, description = "List of notes", body = [NoteResponse]))
)]
pub async fn list_notes(
    State(state): State<AppState>,
    ListQuery(query): ListQuery,
) -> Json<Vec<NoteResponse>> {
    let prefix_len = state.title_prefix_len();
    let notes = state.store().read().await.list(query.as_deref());

    tracing::info!(count = notes.len(), query = ?query, "Listed notes");

    Json(
        notes
            .into_iter()
            .map(|note| NoteResponse::from_note(note, prefix_len))
            .collect(),
    )
}

/// POST /notes/ - Create a note.
///
/// # Response
///
/// - 200 OK: the created note
/// - 400 Bad Request: `content` missing or empty, or body is not a JSON object
#[utoipa::path(
    post,
    path = "/notes/",
    tag = "notes",
    request_body = NoteRequest,
    responses(
        (status = 200, description = "The created note", body = NoteResponse),
        (status = 400, description = "Invalid arguments"),
    )
)]
pub async fn create_note(
    State(state): State<AppState>,
    NoteBody(request): NoteBody,
) -> ApiResult<Json<NoteResponse>> {
    let content = request
        .content
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::BadRequest("content is required".to_string()))?;

    let note = state.store().write().await.create(request.title, content)?;

    tracing::info!(note_id = %note.id, "Note created");

    Ok(Json(NoteResponse::from_note(note, state.title_prefix_len())))
}

/// GET /notes/{id} - Get a note.
///
/// # Response
///
/// - 200 OK: the note
/// - 400 Bad Request: no note with this id
#[utoipa::path(
    get,
    path = "/notes/{id}",
    tag = "notes",
    params(("id" = u64, Path, description = "Note identifier")),
    responses(
        (status = 200, description = "Note found", body = NoteResponse),
        (status = 400, description = "Note not found"),
    )
)]
pub async fn get_note(
    State(state): State<AppState>,
    NoteIdPath(id): NoteIdPath,
) -> ApiResult<Json<NoteResponse>> {
    let note = state
        .store()
        .read()
        .await
        .get(id)
        .ok_or(ApiError::NotFound(id))?;

    Ok(Json(NoteResponse::from_note(note, state.title_prefix_len())))
}

/// PUT /notes/{id} - Replace a note's title and content.
///
/// Both fields are replaced; an omitted field is stored as empty. Content is
/// not required to be non-empty here.
///
/// # Response
///
/// - 200 OK: the updated note
/// - 400 Bad Request: no note with this id
#[utoipa::path(
    put,
    path = "/notes/{id}",
    tag = "notes",
    params(("id" = u64, Path, description = "Note identifier")),
    request_body = NoteRequest,
    responses(
        (status = 200, description = "The updated note", body = NoteResponse),
        (status = 400, description = "Note not found"),
    )
)]
pub async fn update_note(
    State(state): State<AppState>,
    NoteIdPath(id): NoteIdPath,
    NoteBody(request): NoteBody,
) -> ApiResult<Json<NoteResponse>> {
    let content = request.content.unwrap_or_default();

    let note = state
        .store()
        .write()
        .await
        .update(id, request.title, content)
        .ok_or(ApiError::NotFound(id))?;

    tracing::info!(note_id = %id, "Note updated");

    Ok(Json(NoteResponse::from_note(note, state.title_prefix_len())))
}

/// DELETE /notes/{id} - Delete a note.
///
/// # Response
///
/// - 200 OK: empty body
/// - 400 Bad Request: no note with this id
#[utoipa::path(
    delete,
    path = "/notes/{id}",
    tag = "notes",
    params(("id" = u64, Path, description = "Note identifier")),
    responses(
        (status = 200, description = "Note deleted"),
        (status = 400, description = "Note not found"),
    )
)]
pub async fn delete_note(
    State(state): State<AppState>,
    NoteIdPath(id): NoteIdPath,
) -> ApiResult<StatusCode> {
    if !state.store().write().await.delete(id) {
        return Err(ApiError::NotFound(id));
    }

    tracing::info!(note_id = %id, "Note deleted");

    Ok(StatusCode::OK)
}

/// Build note routes.
///
/// The collection is served both with and without the trailing slash.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/", get(list_notes).post(create_note))
        .route(
            "/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_uses_stored_title() {
        let note = Note::new(NoteId(1), Some("Groceries".to_string()), "Buy milk");
        let response = NoteResponse::from_note(note, 3);
        assert_eq!(response.title, "Groceries");
        assert_eq!(response.content, "Buy milk");
    }

    #[test]
    fn test_response_falls_back_to_content_prefix() {
        let note = Note::new(NoteId(1), None, "Buy milk and eggs");
        let response = NoteResponse::from_note(note, 5);
        assert_eq!(response.title, "Buy m");
    }

    #[test]
    fn test_response_serialize_shape() {
        let note = Note::new(NoteId(1), None, "Buy milk and eggs");
        let json = serde_json::to_value(NoteResponse::from_note(note, 5)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "title": "Buy m", "content": "Buy milk and eggs"})
        );
    }
}
