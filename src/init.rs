//! Init wizard — interactive setup with cliclack styled prompts.
//!
//! Asks for the bot token and service keys, then writes the config file.
//! Every key is optional: with none of them, the bot still runs on the
//! local keyword engine.

use rakshak_core::config::{
    Config, GeminiConfig, SafeBrowsingConfig, TelegramConfig, TranslateConfig,
};
use std::path::Path;

pub(crate) const LOGO: &str = r#"
  ____       _        _           _
 |  _ \ __ _| | _____| |__   __ _| | __
 | |_) / _` | |/ / __| '_ \ / _` | |/ /
 |  _ < (_| |   <\__ \ | | | (_| |   <
 |_| \_\__,_|_|\_\___/_| |_|\__,_|_|\_\  🛡
"#;

/// Run the interactive init wizard.
pub async fn run(config_path: &str) -> anyhow::Result<()> {
    println!("{LOGO}");
    cliclack::intro("rakshak init")?;

    if Path::new(config_path).exists() {
        let overwrite: bool = cliclack::confirm(format!(
            "{config_path} already exists. Overwrite?"
        ))
        .initial_value(false)
        .interact()?;
        if !overwrite {
            cliclack::outro("Keeping the existing config.")?;
            return Ok(());
        }
    }

    let bot_token: String = cliclack::input("Telegram bot token")
        .placeholder("Paste token from @BotFather (or Enter to skip)")
        .required(false)
        .default_input("")
        .interact()?;

    let gemini_key: String = cliclack::input("Gemini API key")
        .placeholder("Empty = local keyword detection only")
        .required(false)
        .default_input("")
        .interact()?;

    let safe_browsing_key: String = cliclack::input("Google Safe Browsing API key")
        .placeholder("Empty = local URL heuristics only")
        .required(false)
        .default_input("")
        .interact()?;

    let translate_key: String = cliclack::input("Google Translate API key")
        .placeholder("Empty = canned strings only")
        .required(false)
        .default_input("")
        .interact()?;

    let default_language: &str = cliclack::select("Default language")
        .item("English", "English", "")
        .item("Hindi", "Hindi", "हिंदी")
        .interact()?;

    let mut config = Config::default();
    config.bot.default_language = default_language.to_string();
    if !bot_token.is_empty() {
        config.channel.telegram = Some(TelegramConfig {
            enabled: true,
            bot_token,
            allowed_users: Vec::new(),
        });
    }
    if !gemini_key.is_empty() {
        config.service.gemini = Some(GeminiConfig {
            api_key: gemini_key,
            ..Default::default()
        });
    }
    if !safe_browsing_key.is_empty() {
        config.service.safe_browsing = Some(SafeBrowsingConfig {
            api_key: safe_browsing_key,
            ..Default::default()
        });
    }
    if !translate_key.is_empty() {
        config.service.translate = Some(TranslateConfig {
            api_key: translate_key,
            ..Default::default()
        });
    }

    let toml = toml::to_string_pretty(&config)?;
    std::fs::write(config_path, toml)?;
    cliclack::log::success(format!("{config_path} — written"))?;

    let next = if config.channel.telegram.is_some() {
        "Run `rakshak start` to go live, or `rakshak chat` to try it here."
    } else {
        "No bot token set — run `rakshak chat` to try it in the terminal."
    };
    cliclack::outro(next)?;
    Ok(())
}
