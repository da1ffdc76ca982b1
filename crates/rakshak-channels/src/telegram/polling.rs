//! Long-polling update loop and Channel trait implementation.

use super::types::{display_name, TgResponse, TgUpdate};
use super::TelegramChannel;
use async_trait::async_trait;
use rakshak_core::{
    error::RakshakError,
    message::{IncomingMessage, OutgoingMessage},
    traits::Channel,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn start(&self) -> Result<mpsc::Receiver<IncomingMessage>, RakshakError> {
        self.register_commands().await;

        let (tx, rx) = mpsc::channel(64);
        let channel = TelegramChannel {
            config: self.config.clone(),
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            last_update_id: self.last_update_id.clone(),
        };
        let allowed_users = self.config.allowed_users.clone();

        info!("Telegram channel starting long polling...");

        tokio::spawn(async move {
            let mut backoff_secs: u64 = 1;

            loop {
                let last = channel.last_update_id.lock().await;
                let offset = last.map(|id| id + 1);
                drop(last);

                let mut url = format!("{}/getUpdates?timeout=30", channel.base_url);
                if let Some(off) = offset {
                    url.push_str(&format!("&offset={off}"));
                }

                let resp = match channel
                    .client
                    .get(&url)
                    .timeout(std::time::Duration::from_secs(35))
                    .send()
                    .await
                {
                    Ok(r) => r,
                    Err(e) => {
                        error!("telegram poll error (retry in {backoff_secs}s): {e}");
                        tokio::time::sleep(std::time::Duration::from_secs(backoff_secs)).await;
                        backoff_secs = (backoff_secs * 2).min(60);
                        continue;
                    }
                };

                let body: TgResponse<Vec<TgUpdate>> = match resp.json().await {
                    Ok(b) => b,
                    Err(e) => {
                        error!("telegram parse error (retry in {backoff_secs}s): {e}");
                        tokio::time::sleep(std::time::Duration::from_secs(backoff_secs)).await;
                        backoff_secs = (backoff_secs * 2).min(60);
                        continue;
                    }
                };

                if !body.ok {
                    error!(
                        "telegram API error (retry in {backoff_secs}s): {}",
                        body.description.unwrap_or_default()
                    );
                    tokio::time::sleep(std::time::Duration::from_secs(backoff_secs)).await;
                    backoff_secs = (backoff_secs * 2).min(60);
                    continue;
                }

                // Successful poll -- reset backoff.
                backoff_secs = 1;

                let updates = body.result.unwrap_or_default();

                if let Some(last_update) = updates.last() {
                    *channel.last_update_id.lock().await = Some(last_update.update_id);
                }

                for update in updates {
                    // Button presses arrive as callback queries; acknowledge
                    // them and route the attached command like typed text.
                    let (user, chat, text) = if let Some(cq) = update.callback_query {
                        channel.answer_callback(&cq.id).await;
                        let chat = match cq.message {
                            Some(m) => m.chat,
                            None => continue,
                        };
                        let data = match cq.data {
                            Some(d) if !d.is_empty() => d,
                            _ => continue,
                        };
                        debug!("callback from {}: {data}", cq.from.id);
                        (cq.from, chat, data)
                    } else if let Some(msg) = update.message {
                        let user = match msg.from {
                            Some(u) => u,
                            None => continue,
                        };
                        let text = match msg.text {
                            Some(t) => t,
                            None => continue,
                        };
                        (user, msg.chat, text)
                    } else {
                        continue;
                    };

                    // Auth check: empty list = public bot.
                    if !allowed_users.is_empty() && !allowed_users.contains(&user.id) {
                        warn!("ignoring message from unauthorized user {}", user.id);
                        continue;
                    }

                    let is_group = matches!(chat.chat_type.as_str(), "group" | "supergroup");

                    let incoming = IncomingMessage {
                        id: Uuid::new_v4(),
                        channel: "telegram".to_string(),
                        sender_id: user.id.to_string(),
                        sender_name: Some(display_name(&user)),
                        text,
                        timestamp: chrono::Utc::now(),
                        reply_target: Some(chat.id.to_string()),
                        is_group,
                    };

                    if tx.send(incoming).await.is_err() {
                        info!("telegram channel receiver dropped, stopping poll");
                        return;
                    }
                }
            }
        });

        Ok(rx)
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), RakshakError> {
        let chat_id_str = message
            .reply_target
            .as_deref()
            .ok_or_else(|| RakshakError::Channel("no reply_target on outgoing message".into()))?;

        let chat_id: i64 = chat_id_str.parse().map_err(|e| {
            RakshakError::Channel(format!("invalid telegram chat_id '{chat_id_str}': {e}"))
        })?;

        self.send_message(chat_id, &message.text, &message.quick_replies)
            .await
    }

    async fn send_typing(&self, target: &str) -> Result<(), RakshakError> {
        let chat_id: i64 = target.parse().map_err(|e| {
            RakshakError::Channel(format!("invalid telegram chat_id '{target}': {e}"))
        })?;
        self.send_chat_action(chat_id, "typing").await
    }

    async fn stop(&self) -> Result<(), RakshakError> {
        info!("Telegram channel stopped");
        Ok(())
    }
}
