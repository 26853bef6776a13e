//! notes-core: Core types for the notes service
//!
//! This crate provides:
//! - [`NoteId`], the store-assigned integer identifier
//! - [`Note`], the sole entity of the service
//! - [`display_title`], the title fallback applied whenever a note is presented
//!
//! All other crates in the workspace (store, server, CLI) depend on these
//! definitions so that the display rule is computed the same way everywhere.

pub mod types;

pub use types::{DEFAULT_TITLE_PREFIX_LEN, Note, NoteId, display_title};
