//! Core data types for the notes service.
//!
//! A note is a short piece of text with an optional title. Notes are stored
//! as written; the title shown to callers is derived on read by
//! [`Note::display_title`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of content characters substituted for a missing title when no
/// other value is configured.
pub const DEFAULT_TITLE_PREFIX_LEN: usize = 30;

// ============================================================================
// ID Types
// ============================================================================

/// Identifier of a note.
///
/// Assigned by the store from a monotonic counter starting at 1. An id is
/// never reused, even after the note holding it is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub u64);

impl NoteId {
    /// Creates a NoteId from a raw integer.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

// ============================================================================
// Note
// ============================================================================

/// A stored note.
///
/// `title` holds exactly what the caller supplied; an absent title and an
/// empty title are both treated as "no title" by [`Note::display_title`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned identifier.
    pub id: NoteId,
    /// Caller-supplied title, possibly absent or empty.
    pub title: Option<String>,
    /// Note body.
    pub content: String,
}

impl Note {
    /// Creates a note value. Does not validate `content`.
    pub fn new(id: NoteId, title: Option<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title,
            content: content.into(),
        }
    }

    /// Title as presented to callers.
    ///
    /// Returns the stored title when it is non-empty, otherwise the first
    /// `prefix_len` characters of the content.
    pub fn display_title(&self, prefix_len: usize) -> String {
        display_title(self.title.as_deref(), &self.content, prefix_len)
    }

    /// Whether the title or content contains `query` as a literal,
    /// case-sensitive substring. An empty query matches every note.
    pub fn matches(&self, query: &str) -> bool {
        query.is_empty()
            || self.title.as_deref().is_some_and(|t| t.contains(query))
            || self.content.contains(query)
    }
}

/// Resolve the title shown for a note.
///
/// Counts characters, not bytes, so multi-byte content is never split.
pub fn display_title(title: Option<&str>, content: &str, prefix_len: usize) -> String {
    match title {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => content.chars().take(prefix_len).collect(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_uses_stored_title() {
        let note = Note::new(NoteId(1), Some("Groceries".to_string()), "Buy milk and eggs");
        assert_eq!(note.display_title(5), "Groceries");
    }

    #[test]
    fn test_display_title_falls_back_to_content_prefix() {
        let note = Note::new(NoteId(1), None, "Buy milk and eggs");
        assert_eq!(note.display_title(5), "Buy m");

        let note = Note::new(NoteId(2), Some(String::new()), "Buy milk and eggs");
        assert_eq!(note.display_title(5), "Buy m");
    }

    #[test]
    fn test_display_title_short_content() {
        let note = Note::new(NoteId(1), None, "Hi");
        assert_eq!(note.display_title(30), "Hi");
    }

    #[test]
    fn test_display_title_counts_characters() {
        let note = Note::new(NoteId(1), None, "Купить молоко");
        assert_eq!(note.display_title(6), "Купить");
    }

    #[test]
    fn test_display_title_zero_prefix() {
        let note = Note::new(NoteId(1), None, "anything");
        assert_eq!(note.display_title(0), "");
    }

    #[test]
    fn test_matches_title_or_content() {
        let note = Note::new(NoteId(1), Some("Shopping".to_string()), "Buy milk");
        assert!(note.matches("Shop"));
        assert!(note.matches("milk"));
        assert!(!note.matches("eggs"));
    }

    #[test]
    fn test_matches_is_case_sensitive() {
        let note = Note::new(NoteId(1), None, "Buy milk");
        assert!(!note.matches("Milk"));
        assert!(!note.matches("BUY"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let note = Note::new(NoteId(1), None, "x");
        assert!(note.matches(""));
    }

    #[test]
    fn test_note_id_parse_and_display() {
        let id: NoteId = "42".parse().unwrap();
        assert_eq!(id, NoteId::new(42));
        assert_eq!(id.to_string(), "42");
        assert!("abc".parse::<NoteId>().is_err());
    }

    #[test]
    fn test_note_id_serializes_transparently() {
        let json = serde_json::to_string(&NoteId(7)).unwrap();
        assert_eq!(json, "7");
    }
}
