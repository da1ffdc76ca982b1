mod channels;
mod defaults;
mod services;


pub use channels::*;
pub use services::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::RakshakError;
use defaults::*;

/// Top-level Rakshak configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub channel: ChannelConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Language used before a user picks one ("English" or "Hindi").
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
            default_language: default_language(),
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist. API keys and the bot
/// token may also come from the environment; env vars fill in any value the
/// file leaves empty.
pub fn load(path: &str) -> Result<Config, RakshakError> {
    let path = Path::new(&shellexpand(path)).to_path_buf();

    let mut config = if path.exists() {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| RakshakError::Config(format!("failed to read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| RakshakError::Config(format!("failed to parse config: {e}")))?
    } else {
        tracing::info!("Config file not found at {}, using defaults", path.display());
        Config::default()
    };

    apply_env_fallbacks(&mut config);
    Ok(config)
}

/// Fill empty secrets from the environment.
///
/// `TELEGRAM_BOT_TOKEN`, `GEMINI_API_KEY`, `GOOGLE_SAFE_BROWSING_API_KEY`,
/// and `GOOGLE_TRANSLATE_API_KEY`. A var also enables the corresponding
/// section when the config file never mentioned it.
fn apply_env_fallbacks(config: &mut Config) {
    if let Ok(token) = std::env::var("TELEGRAM_BOT_TOKEN") {
        let tg = config.channel.telegram.get_or_insert_with(|| TelegramConfig {
            enabled: true,
            ..Default::default()
        });
        if tg.bot_token.is_empty() {
            tg.bot_token = token;
        }
    }

    if let Ok(key) = std::env::var("GEMINI_API_KEY") {
        let gemini = config.service.gemini.get_or_insert_with(GeminiConfig::default);
        if gemini.api_key.is_empty() {
            gemini.api_key = key;
        }
    }

    if let Ok(key) = std::env::var("GOOGLE_SAFE_BROWSING_API_KEY") {
        let sb = config
            .service
            .safe_browsing
            .get_or_insert_with(SafeBrowsingConfig::default);
        if sb.api_key.is_empty() {
            sb.api_key = key;
        }
    }

    if let Ok(key) = std::env::var("GOOGLE_TRANSLATE_API_KEY") {
        let tr = config
            .service
            .translate
            .get_or_insert_with(TranslateConfig::default);
        if tr.api_key.is_empty() {
            tr.api_key = key;
        }
    }
}
