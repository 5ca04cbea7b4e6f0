//! Application state shared across handlers.

use std::sync::Arc;

use chatbot_intent::ChatService;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    config: Arc<ServerConfig>,
    /// Chat service owning the intent index.
    chat: Arc<ChatService>,
}

impl AppState {
    /// Create new application state with an uninitialized chat service
    /// reading from the configured corpus source.
    pub fn new(config: ServerConfig) -> Self {
        let chat = ChatService::new(config.corpus_source());
        Self::with_service(config, chat)
    }

    /// Create application state around an existing chat service.
    pub fn with_service(config: ServerConfig, chat: ChatService) -> Self {
        Self {
            config: Arc::new(config),
            chat: Arc::new(chat),
        }
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get a reference to the chat service.
    pub fn chat(&self) -> &Arc<ChatService> {
        &self.chat
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("chat", &self.chat)
            .finish()
    }
}
