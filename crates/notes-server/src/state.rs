//! Application state shared across handlers.

use std::sync::Arc;

use notes_store::NoteStore;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
/// The store sits behind a single lock; mutating handlers hold the write side
/// for the whole store call.
#[derive(Clone)]
pub struct AppState {
    /// Note store.
    store: Arc<RwLock<NoteStore>>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: NoteStore, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }

    /// Get a reference to the locked note store.
    pub fn store(&self) -> &RwLock<NoteStore> {
        &self.store
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Characters of content substituted for a missing title.
    pub fn title_prefix_len(&self) -> usize {
        self.config.title_prefix_len
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
