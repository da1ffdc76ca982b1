//! Built-in bot commands — canned responses, resolved before any analysis.

#[cfg(test)]
mod tests;

use crate::i18n;
use rakshak_core::traits::{Analyzer, Translator, UrlScanner};
use std::time::Instant;

/// Known bot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Analyze,
    CheckUrl,
    Scams,
    Emergency,
    Language,
    Status,
}

impl Command {
    /// Parse a command from message text. Returns `None` for anything that
    /// is not a known `/` command (which then goes to the analysis flow).
    pub fn parse(text: &str) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        // Strip @botname suffix (e.g. "/help@rakshak_bot" → "/help").
        let cmd = first.split('@').next().unwrap_or(first);
        match cmd {
            "/start" => Some(Self::Start),
            "/help" => Some(Self::Help),
            "/analyze" => Some(Self::Analyze),
            "/checkurl" | "/check_url" => Some(Self::CheckUrl),
            "/scams" | "/learn" => Some(Self::Scams),
            "/emergency" => Some(Self::Emergency),
            "/language" | "/lang" => Some(Self::Language),
            "/status" => Some(Self::Status),
            _ => None,
        }
    }
}

/// The text after the command word, trimmed.
pub fn arg(text: &str) -> &str {
    match text.split_once(char::is_whitespace) {
        Some((_, rest)) => rest.trim(),
        None => "",
    }
}

/// What the gateway should do with a handled command.
#[derive(Debug)]
pub enum CommandReply {
    /// Send this text, done.
    Text(String),
    /// Send this text with the main menu attached.
    Menu(String),
    /// Send this prompt and wait for the next message to analyze.
    AwaitMessage(String),
    /// Send this prompt and wait for the next message as a URL.
    AwaitUrl(String),
    /// Run the analysis flow on this text now.
    AnalyzeNow(String),
    /// Run the URL flow on this URL now.
    ScanUrl(String),
    /// Switch the user's language, then send this confirmation.
    SetLanguage { lang: &'static str, text: String },
}

/// Grouped context for command execution.
pub struct CommandContext<'a> {
    pub lang: &'a str,
    pub uptime: &'a Instant,
    pub rulebook_len: usize,
    pub analyzer: Option<&'a dyn Analyzer>,
    pub url_scanner: Option<&'a dyn UrlScanner>,
    pub translator: Option<&'a dyn Translator>,
}

/// Handle a command and decide the reply.
pub async fn handle(cmd: Command, text: &str, ctx: &CommandContext<'_>) -> CommandReply {
    let lang = ctx.lang;
    match cmd {
        Command::Start => CommandReply::Menu(i18n::welcome(lang).to_string()),
        Command::Help => CommandReply::Text(i18n::help(lang).to_string()),
        Command::Scams => CommandReply::Text(i18n::education(lang).to_string()),
        Command::Emergency => CommandReply::Text(i18n::emergency(lang).to_string()),
        Command::Analyze => {
            let arg = arg(text);
            if arg.is_empty() {
                CommandReply::AwaitMessage(i18n::t("send_message_prompt", lang).to_string())
            } else {
                CommandReply::AnalyzeNow(arg.to_string())
            }
        }
        Command::CheckUrl => {
            let arg = arg(text);
            if arg.is_empty() {
                CommandReply::AwaitUrl(i18n::t("send_url_prompt", lang).to_string())
            } else {
                CommandReply::ScanUrl(arg.to_string())
            }
        }
        Command::Language => {
            let arg = arg(text);
            if arg.is_empty() {
                return CommandReply::Text(format!(
                    "{lang}\n{}",
                    i18n::t("language_usage", lang)
                ));
            }
            match i18n::parse_language(arg) {
                Some(new_lang) => CommandReply::SetLanguage {
                    lang: new_lang,
                    text: i18n::language_switched(new_lang).to_string(),
                },
                None => CommandReply::Text(format!(
                    "{}\n{}",
                    i18n::t("language_unknown", lang),
                    i18n::t("language_usage", lang)
                )),
            }
        }
        Command::Status => CommandReply::Text(status_text(ctx).await),
    }
}

/// Compose the /status reply: uptime, rulebook size, service availability.
async fn status_text(ctx: &CommandContext<'_>) -> String {
    let lang = ctx.lang;
    let mut out = format!(
        "{}\n\n{} {}m\n{} {}\n",
        i18n::t("status_header", lang),
        i18n::t("status_uptime", lang),
        ctx.uptime.elapsed().as_secs() / 60,
        i18n::t("status_rules", lang),
        ctx.rulebook_len,
    );

    match ctx.analyzer {
        Some(a) => {
            let state = if a.is_available().await {
                i18n::t("status_available", lang)
            } else {
                i18n::t("status_unavailable", lang)
            };
            out.push_str(&format!("🤖 {}: {state}\n", a.name()));
        }
        None => out.push_str(&format!(
            "🤖 gemini: {}\n",
            i18n::t("status_not_configured", lang)
        )),
    }

    match ctx.url_scanner {
        Some(s) => out.push_str(&format!(
            "🔗 {}: {}\n",
            s.name(),
            i18n::t("status_available", lang)
        )),
        None => out.push_str(&format!(
            "🔗 safe-browsing: {}\n",
            i18n::t("status_not_configured", lang)
        )),
    }

    match ctx.translator {
        Some(t) => out.push_str(&format!(
            "🌐 {}: {}\n",
            t.name(),
            i18n::t("status_available", lang)
        )),
        None => out.push_str(&format!(
            "🌐 translate: {}\n",
            i18n::t("status_not_configured", lang)
        )),
    }

    out
}
