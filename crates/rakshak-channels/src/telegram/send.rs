//! Outbound Telegram calls: sendMessage with chunking and Markdown retry,
//! chat actions, callback answers, command registration.

use super::TelegramChannel;
use rakshak_core::{error::RakshakError, message::QuickReply};
use tracing::{debug, info, warn};

/// Telegram's hard limit on message length.
pub(crate) const MAX_MESSAGE_LEN: usize = 4096;

impl TelegramChannel {
    /// Send a text message to a specific chat, chunking when over the limit.
    /// The inline keyboard (if any) goes on the final chunk.
    pub(crate) async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        quick_replies: &[QuickReply],
    ) -> Result<(), RakshakError> {
        let chunks = split_message(text, MAX_MESSAGE_LEN);
        let last = chunks.len().saturating_sub(1);

        for (i, chunk) in chunks.iter().enumerate() {
            let url = format!("{}/sendMessage", self.base_url);
            let keyboard = (i == last && !quick_replies.is_empty())
                .then(|| inline_keyboard(quick_replies));

            let mut body = serde_json::json!({
                "chat_id": chat_id,
                "text": chunk,
                "parse_mode": "Markdown",
            });
            if let Some(ref kb) = keyboard {
                body["reply_markup"] = kb.clone();
            }

            let resp = self
                .client
                .post(&url)
                .json(&body)
                .send()
                .await
                .map_err(|e| RakshakError::Channel(format!("telegram send failed: {e}")))?;

            let status = resp.status();
            if !status.is_success() {
                let error_text = resp.text().await.unwrap_or_default();
                if error_text.contains("can't parse entities") {
                    debug!("Markdown parse failed, retrying as plain text");
                    let mut plain_body = serde_json::json!({
                        "chat_id": chat_id,
                        "text": chunk,
                    });
                    if let Some(kb) = keyboard {
                        plain_body["reply_markup"] = kb;
                    }
                    self.client
                        .post(format!("{}/sendMessage", self.base_url))
                        .json(&plain_body)
                        .send()
                        .await
                        .map_err(|e| {
                            RakshakError::Channel(format!("telegram send (plain) failed: {e}"))
                        })?;
                } else {
                    warn!("telegram send got {status}: {error_text}");
                }
            }
        }

        Ok(())
    }

    /// Send a chat action (e.g. "typing") to a chat.
    pub(crate) async fn send_chat_action(
        &self,
        chat_id: i64,
        action: &str,
    ) -> Result<(), RakshakError> {
        let url = format!("{}/sendChatAction", self.base_url);
        let body = serde_json::json!({
            "chat_id": chat_id,
            "action": action,
        });

        self.client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| RakshakError::Channel(format!("telegram sendChatAction failed: {e}")))?;

        Ok(())
    }

    /// Acknowledge a callback query so the client stops its spinner.
    /// Best-effort: logs failures but does not propagate errors.
    pub(crate) async fn answer_callback(&self, callback_id: &str) {
        let url = format!("{}/answerCallbackQuery", self.base_url);
        let body = serde_json::json!({ "callback_query_id": callback_id });
        if let Err(e) = self.client.post(&url).json(&body).send().await {
            warn!("failed to answer callback query: {e}");
        }
    }

    /// Register bot commands with Telegram so users see an autocomplete menu.
    /// Best-effort: logs failures but does not propagate errors.
    pub(crate) async fn register_commands(&self) {
        let commands = serde_json::json!({
            "commands": [
                { "command": "analyze", "description": "Analyze a suspicious message" },
                { "command": "checkurl", "description": "Check if a URL is safe" },
                { "command": "emergency", "description": "I got scammed — what now?" },
                { "command": "scams", "description": "Learn about common scams" },
                { "command": "language", "description": "Switch between English and Hindi" },
                { "command": "status", "description": "Bot and service status" },
                { "command": "help", "description": "Show available commands" },
            ]
        });

        let url = format!("{}/setMyCommands", self.base_url);
        match self.client.post(&url).json(&commands).send().await {
            Ok(resp) if resp.status().is_success() => {
                info!("registered Telegram bot commands");
            }
            Ok(resp) => {
                let body = resp.text().await.unwrap_or_default();
                warn!("failed to register Telegram bot commands: {body}");
            }
            Err(e) => {
                warn!("failed to register Telegram bot commands: {e}");
            }
        }
    }
}

/// Build an inline keyboard, one button per row.
pub(crate) fn inline_keyboard(quick_replies: &[QuickReply]) -> serde_json::Value {
    let rows: Vec<serde_json::Value> = quick_replies
        .iter()
        .map(|qr| {
            serde_json::json!([{
                "text": qr.label,
                "callback_data": qr.command,
            }])
        })
        .collect();
    serde_json::json!({ "inline_keyboard": rows })
}

/// Split a long message into chunks that respect Telegram's limit.
pub(crate) fn split_message(text: &str, max_len: usize) -> Vec<&str> {
    if text.len() <= max_len {
        return vec![text];
    }

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < text.len() {
        let end = (start + max_len).min(text.len());
        let break_at = if end < text.len() {
            text[start..end]
                .rfind('\n')
                .map(|i| start + i + 1)
                .unwrap_or(end)
        } else {
            end
        };
        chunks.push(&text[start..break_at]);
        start = break_at;
    }

    chunks
}
