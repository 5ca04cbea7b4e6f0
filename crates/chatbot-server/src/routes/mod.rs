//! Route definitions for the HTTP API.

pub mod chatbot;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(chatbot::routes())
        .with_state(state)
}
