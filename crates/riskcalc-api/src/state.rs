//! Application state.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Application state shared across handlers.
///
/// Assessment itself is stateless; the state only carries the configuration
/// the server was started with.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Server configuration snapshot.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create state from a server configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_default_config() {
        let state = AppState::default();
        assert_eq!(state.config.port, 8080);
        assert_eq!(state.config.host, "127.0.0.1");
    }

    #[test]
    fn test_state_is_clone() {
        let state = AppState::new(ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
        });
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.config, &cloned.config));
        assert_eq!(cloned.config.port, 9000);
    }
}
