//! Provider selection defaults.

use serde::{Deserialize, Serialize};

/// Which provider each pane shows when it opens without an explicit choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub default_left: String,
    pub default_right: String,
    pub default_third: String,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            default_left: "chatgpt".into(),
            default_right: "claude".into(),
            default_third: "gemini".into(),
        }
    }
}
