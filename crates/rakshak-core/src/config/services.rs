use serde::{Deserialize, Serialize};

use super::defaults::*;

/// External service configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub gemini: Option<GeminiConfig>,
    pub safe_browsing: Option<SafeBrowsingConfig>,
    pub translate: Option<TranslateConfig>,
}

/// Google Gemini analyzer config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_gemini_model")]
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: String::new(),
            model: default_gemini_model(),
        }
    }
}

/// Google Safe Browsing v4 config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafeBrowsingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: String,
    /// Client ID reported in the lookup payload.
    #[serde(default = "default_safe_browsing_client_id")]
    pub client_id: String,
}

impl Default for SafeBrowsingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: String::new(),
            client_id: default_safe_browsing_client_id(),
        }
    }
}

/// Google Cloud Translation v2 config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: String,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: String::new(),
        }
    }
}
