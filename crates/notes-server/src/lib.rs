//! notes-server: HTTP API server for the notes service
//!
//! This crate provides:
//! - REST endpoints under `/notes` backed by an in-memory [`NoteStore`]
//! - An OpenAPI document at `/swagger.json`
//! - A health check at `/health`
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! Every error is reported as `400 Bad Request` with an empty body.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_server::{AppState, ServerConfig, build_app};
//! use notes_store::NoteStore;
//!
//! let config = ServerConfig::from_env()?;
//! let app = build_app(AppState::new(NoteStore::new(), config));
//! ```
//!
//! [`NoteStore`]: notes_store::NoteStore

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use app::build_app;
pub use config::{ConfigError, LogFormat, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use notes_core;
pub use notes_store;
