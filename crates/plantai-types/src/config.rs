use serde::{Deserialize, Serialize};

/// Maximum number of most-recent messages kept in durable storage.
/// Retention is a backpressure policy on persisted state size, so it is
/// a named constant and an `AppConfig` field rather than a literal in the
/// session logic.
pub const DEFAULT_HISTORY_RETENTION: usize = 10;

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub history_retention: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            history_retention: DEFAULT_HISTORY_RETENTION,
        }
    }
}

/// Address and credential of the remote RAG service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
    pub api_key: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            api_key: "dev-key".to_string(),
        }
    }
}
