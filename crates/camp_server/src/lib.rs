//! HTTP surface for the camp signup API.
//!
//! # Responsibility
//! - Map HTTP verbs and paths onto `camp_core` services.
//! - Translate domain failures into the public error bodies.
//! - Parse process configuration for the `camp-server` binary.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::{ConfigError, DatabaseLocation, ServerConfig};
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
