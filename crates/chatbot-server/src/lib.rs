//! chatbot-server: HTTP API server for the foundation chatbot
//!
//! This crate provides:
//! - `POST /api/chatbot/chat` to classify a message
//! - `GET /api/chatbot/status` for index introspection
//! - `POST /api/chatbot/initialize` to rebuild the index
//! - `GET /health`
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use chatbot_server::{config::ServerConfig, routes, state::AppState};
//!
//! let config = ServerConfig::from_env()?;
//! let state = AppState::new(config);
//! state.chat().initialize()?;
//! let app = routes::build_router(state);
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use chatbot_core;
pub use chatbot_intent;
