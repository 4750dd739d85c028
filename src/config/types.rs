use serde::Deserialize;

use crate::api::DEFAULT_ENDPOINT;

/// Root configuration container.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub ui: UiConfig,
}

/// Search settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Base URL the query is appended to when forming a request target.
    pub endpoint: String,
    /// Query used when no preference has been persisted yet.
    pub default_query: String,
}

/// UI settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Draw/tick interval in milliseconds.
    pub tick_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_query: "React".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_ms: 250 }
    }
}
