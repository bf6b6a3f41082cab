//! Application state containing configuration and shared resources

use std::sync::Arc;

use crate::config::Config;
use crate::llm::ChatClient;

/// Application state shared across all handlers.
///
/// There is no mutable state here; concurrent requests share the
/// configuration and the HTTP client's connection pool, nothing else.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    chat: Arc<ChatClient>,
    /// Identifier reported by the health endpoint ("cas" or "robotics").
    service: &'static str,
}

impl AppState {
    pub fn new(config: Config, service: &'static str) -> Self {
        let chat = Arc::new(ChatClient::new(&config));
        Self {
            config: Arc::new(config),
            chat,
            service,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn chat(&self) -> &ChatClient {
        &self.chat
    }

    pub fn service(&self) -> &'static str {
        self.service
    }
}
