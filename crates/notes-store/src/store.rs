//! In-memory note store.
//!
//! The `NoteStore` type owns every note and the id counter. It is not
//! synchronised; callers sharing it across tasks wrap it in a lock and hold
//! the write side for the whole of each mutating call.

use std::collections::BTreeMap;

use notes_core::{Note, NoteId};

use crate::error::{StoreError, StoreResult};

/// In-memory store for notes.
///
/// Notes live in an ordered map so listings come back in ascending id order.
/// The counter is independent of the map contents: deleting the newest note
/// does not make its id available again.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: BTreeMap<NoteId, Note>,
    /// Last id handed out; 0 before the first create.
    counter: u64,
}

impl NoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a note and assign it the next id.
    ///
    /// Fails with [`StoreError::EmptyContent`] if `content` is empty; the
    /// counter is not advanced in that case.
    pub fn create(&mut self, title: Option<String>, content: String) -> StoreResult<Note> {
        if content.is_empty() {
            return Err(StoreError::EmptyContent);
        }

        self.counter += 1;
        let id = NoteId::new(self.counter);
        let note = Note::new(id, title, content);
        self.notes.insert(id, note.clone());

        tracing::debug!(note_id = %id, "Note stored");

        Ok(note)
    }

    /// Get a note by id.
    pub fn get(&self, id: NoteId) -> Option<Note> {
        self.notes.get(&id).cloned()
    }

    /// List notes in ascending id order.
    ///
    /// With no query, or an empty one, every note is returned. Otherwise only
    /// notes whose title or content contains the query verbatim.
    pub fn list(&self, query: Option<&str>) -> Vec<Note> {
        let query = query.unwrap_or_default();
        self.notes
            .values()
            .filter(|note| note.matches(query))
            .cloned()
            .collect()
    }

    /// Replace the title and content of an existing note.
    ///
    /// Returns `None` without side effects if `id` is unknown. Content is not
    /// checked for emptiness here.
    pub fn update(&mut self, id: NoteId, title: Option<String>, content: String) -> Option<Note> {
        let note = self.notes.get_mut(&id)?;
        note.title = title;
        note.content = content;

        tracing::debug!(note_id = %id, "Note replaced");

        Some(note.clone())
    }

    /// Delete a note. Returns `false` if it did not exist.
    pub fn delete(&mut self, id: NoteId) -> bool {
        let removed = self.notes.remove(&id).is_some();
        if removed {
            tracing::debug!(note_id = %id, "Note removed");
        }
        removed
    }

    /// Number of stored notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(contents: &[&str]) -> NoteStore {
        let mut store = NoteStore::new();
        for content in contents {
            store.create(None, content.to_string()).unwrap();
        }
        store
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let mut store = NoteStore::new();
        let a = store.create(None, "first".to_string()).unwrap();
        let b = store.create(Some("t".to_string()), "second".to_string()).unwrap();

        assert_eq!(a.id, NoteId(1));
        assert_eq!(b.id, NoteId(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_create_rejects_empty_content() {
        let mut store = NoteStore::new();
        let err = store.create(Some("title".to_string()), String::new()).unwrap_err();
        assert_eq!(err, StoreError::EmptyContent);
        assert!(store.is_empty());

        // A rejected create must not consume an id.
        let note = store.create(None, "ok".to_string()).unwrap();
        assert_eq!(note.id, NoteId(1));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = store_with(&["a", "b"]);
        assert!(store.delete(NoteId(2)));

        let note = store.create(None, "c".to_string()).unwrap();
        assert_eq!(note.id, NoteId(3));
    }

    #[test]
    fn test_get_returns_stored_note() {
        let mut store = NoteStore::new();
        let created = store
            .create(Some("Groceries".to_string()), "Buy milk".to_string())
            .unwrap();

        assert_eq!(store.get(created.id), Some(created));
        assert_eq!(store.get(NoteId(99)), None);
    }

    #[test]
    fn test_list_without_query_returns_all_in_id_order() {
        let store = store_with(&["one", "two", "three"]);

        let ids: Vec<_> = store.list(None).iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![NoteId(1), NoteId(2), NoteId(3)]);

        assert_eq!(store.list(Some("")).len(), 3);
    }

    #[test]
    fn test_list_filters_on_title_and_content() {
        let mut store = NoteStore::new();
        store.create(Some("milk run".to_string()), "errands".to_string()).unwrap();
        store.create(None, "Buy milk and eggs".to_string()).unwrap();
        store.create(None, "Call mom".to_string()).unwrap();

        let ids: Vec<_> = store.list(Some("milk")).iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![NoteId(1), NoteId(2)]);
    }

    #[test]
    fn test_list_is_case_sensitive() {
        let store = store_with(&["Buy milk"]);
        assert!(store.list(Some("MILK")).is_empty());
    }

    #[test]
    fn test_list_no_matches_is_empty() {
        let store = store_with(&["a", "b"]);
        assert!(store.list(Some("zzz")).is_empty());
    }

    #[test]
    fn test_update_replaces_both_fields() {
        let mut store = NoteStore::new();
        let note = store
            .create(Some("old".to_string()), "old body".to_string())
            .unwrap();

        let updated = store.update(note.id, None, "new body".to_string()).unwrap();
        assert_eq!(updated.id, note.id);
        assert_eq!(updated.title, None);
        assert_eq!(updated.content, "new body");
        assert_eq!(store.get(note.id), Some(updated));
    }

    #[test]
    fn test_update_missing_id_has_no_side_effect() {
        let mut store = NoteStore::new();
        assert!(store.update(NoteId(1), None, "x".to_string()).is_none());
        assert!(store.is_empty());

        // The failed update must not have advanced the counter.
        let note = store.create(None, "x".to_string()).unwrap();
        assert_eq!(note.id, NoteId(1));
    }

    #[test]
    fn test_update_accepts_empty_content() {
        let mut store = store_with(&["body"]);
        let updated = store.update(NoteId(1), None, String::new()).unwrap();
        assert_eq!(updated.content, "");
    }

    #[test]
    fn test_delete() {
        let mut store = store_with(&["a"]);
        assert!(store.delete(NoteId(1)));
        assert!(!store.delete(NoteId(1)));
        assert!(store.get(NoteId(1)).is_none());
        assert!(store.update(NoteId(1), None, "x".to_string()).is_none());
    }
}
