//! Request extractors that reject with [`ApiError`] instead of axum's default
//! plain-text rejections, so malformed input gets the same bare 400 as every
//! other failure.

use std::convert::Infallible;

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use notes_core::NoteId;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::ApiError;

/// Request body for creating or replacing a note.
///
/// Both fields are optional at the JSON level; the create handler enforces a
/// non-empty `content` itself.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[schema(title = "Note without id")]
pub struct NoteRequest {
    /// Note title. If absent, the first N characters of the content are
    /// returned in its place.
    #[serde(default)]
    pub title: Option<String>,

    /// Note text. Must not be empty when creating a note.
    #[serde(default)]
    pub content: Option<String>,
}

/// JSON note body extractor.
pub struct NoteBody(pub NoteRequest);

impl<S> FromRequest<S> for NoteBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<NoteRequest>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(Self(body))
    }
}

/// `{id}` path segment parsed as a [`NoteId`].
pub struct NoteIdPath(pub NoteId);

impl<S> FromRequestParts<S> for NoteIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<u64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(Self(NoteId::new(id)))
    }
}

/// Optional `query` filter for the note listing.
///
/// Never rejects: when `query` is repeated the first value wins, and a query
/// string that cannot be decoded is treated as having no filter.
pub struct ListQuery(pub Option<String>);

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => pairs,
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Ignoring undecodable query string");
                Vec::new()
            }
        };
        Ok(Self(first_query_value(pairs)))
    }
}

fn first_query_value(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == "query")
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_request_all_fields() {
        let json = r#"{"title": "Groceries", "content": "Buy milk"}"#;
        let request: NoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.title.as_deref(), Some("Groceries"));
        assert_eq!(request.content.as_deref(), Some("Buy milk"));
    }

    #[test]
    fn test_note_request_missing_fields() {
        let request: NoteRequest = serde_json::from_str("{}").unwrap();
        assert!(request.title.is_none());
        assert!(request.content.is_none());
    }

    #[test]
    fn test_first_query_value_keeps_first() {
        let pairs = vec![
            ("other".to_string(), "x".to_string()),
            ("query".to_string(), "milk".to_string()),
            ("query".to_string(), "eggs".to_string()),
        ];
        assert_eq!(first_query_value(pairs).as_deref(), Some("milk"));
    }

    #[test]
    fn test_first_query_value_absent() {
        assert!(first_query_value(Vec::new()).is_none());
        let pairs = vec![("q".to_string(), "milk".to_string())];
        assert!(first_query_value(pairs).is_none());
    }

    #[test]
    fn test_note_request_null_fields() {
        let json = r#"{"title": null, "content": null}"#;
        let request: NoteRequest = serde_json::from_str(json).unwrap();
        assert!(request.title.is_none());
        assert!(request.content.is_none());
    }
}
