//! notes-store: Storage layer for the notes service
//!
//! This crate provides:
//! - An in-memory [`NoteStore`] keyed by a monotonic integer id
//! - Substring filtering over titles and contents
//!
//! Nothing is persisted; a process restart clears every note.
//!
//! # Usage
//!
//! ```rust
//! use notes_store::NoteStore;
//!
//! let mut store = NoteStore::new();
//! let note = store.create(None, "Buy milk".to_string()).unwrap();
//! assert_eq!(store.get(note.id), Some(note));
//! ```

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::NoteStore;

// Re-export notes-core for downstream crates
pub use notes_core;
