//! Gateway — the event loop connecting channels to the detection engine
//! and external services. Holds the only mutable state the bot has:
//! per-user language and pending-action maps, both session-lifetime only.

mod pipeline;

use crate::analysis::Services;
use rakshak_core::{
    message::{IncomingMessage, OutgoingMessage, QuickReply},
    traits::Channel,
};
use rakshak_detect::Rulebook;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, Mutex};
use tracing::{error, info, warn};

/// What the bot is waiting for from a user after a prompt like
/// "send me the URL".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PendingAction {
    AnalyzeMessage,
    CheckUrl,
}

/// The central gateway that routes messages between channels and services.
pub struct Gateway {
    pub(crate) channels: HashMap<String, Arc<dyn Channel>>,
    pub(crate) rulebook: Rulebook,
    pub(crate) services: Services,
    pub(crate) default_language: String,
    pub(crate) uptime: Instant,
    /// Per-user language preference (channel:sender_id → language name).
    pub(crate) user_languages: Mutex<HashMap<String, String>>,
    /// Per-user pending prompt state.
    pub(crate) pending: Mutex<HashMap<String, PendingAction>>,
}

impl Gateway {
    /// Create a new gateway.
    pub fn new(
        channels: HashMap<String, Arc<dyn Channel>>,
        rulebook: Rulebook,
        services: Services,
        default_language: String,
    ) -> Self {
        Self {
            channels,
            rulebook,
            services,
            default_language,
            uptime: Instant::now(),
            user_languages: Mutex::new(HashMap::new()),
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Run the main event loop until ctrl-c.
    pub async fn run(self: Arc<Self>) -> anyhow::Result<()> {
        info!(
            "Rakshak gateway running | channels: {} | rules: {} | analyzer: {}",
            self.channels.keys().cloned().collect::<Vec<_>>().join(", "),
            self.rulebook.len(),
            self.services
                .analyzer
                .as_ref()
                .map(|a| a.name())
                .unwrap_or("none"),
        );

        let (tx, mut rx) = mpsc::channel::<IncomingMessage>(256);

        for (name, channel) in &self.channels {
            let mut channel_rx = channel
                .start()
                .await
                .map_err(|e| anyhow::anyhow!("failed to start channel {name}: {e}"))?;
            let tx = tx.clone();
            let channel_name = name.clone();

            tokio::spawn(async move {
                while let Some(msg) = channel_rx.recv().await {
                    if tx.send(msg).await.is_err() {
                        info!("gateway receiver dropped, stopping {channel_name} forwarder");
                        break;
                    }
                }
            });

            info!("Channel started: {name}");
        }

        drop(tx);

        loop {
            tokio::select! {
                maybe = rx.recv() => {
                    match maybe {
                        Some(incoming) => {
                            let gw = self.clone();
                            tokio::spawn(async move {
                                gw.handle_message(incoming).await;
                            });
                        }
                        // All channels gone (e.g. console EOF) — stop.
                        None => break,
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        self.shutdown().await;
        Ok(())
    }

    /// Graceful shutdown: stop all channels.
    async fn shutdown(&self) {
        info!("Shutting down...");
        for (name, channel) in &self.channels {
            if let Err(e) = channel.stop().await {
                warn!("failed to stop channel {name}: {e}");
            }
        }
        info!("Shutdown complete.");
    }

    /// The key for per-user state maps.
    pub(crate) fn sender_key(incoming: &IncomingMessage) -> String {
        format!("{}:{}", incoming.channel, incoming.sender_id)
    }

    /// Resolve a user's display language.
    pub(crate) async fn resolve_lang(&self, incoming: &IncomingMessage) -> String {
        let key = Self::sender_key(incoming);
        self.user_languages
            .lock()
            .await
            .get(&key)
            .cloned()
            .unwrap_or_else(|| self.default_language.clone())
    }

    /// Send a plain text message back to the sender.
    pub(crate) async fn send_text(&self, incoming: &IncomingMessage, text: &str) {
        self.send(incoming, OutgoingMessage::reply_to(incoming, text))
            .await;
    }

    /// Send an outgoing message through the sender's channel.
    pub(crate) async fn send(&self, incoming: &IncomingMessage, msg: OutgoingMessage) {
        if let Some(channel) = self.channels.get(&incoming.channel) {
            if let Err(e) = channel.send(msg).await {
                error!("failed to send message: {e}");
            }
        }
    }

    /// Best-effort typing indicator.
    pub(crate) async fn send_typing(&self, incoming: &IncomingMessage) {
        if let (Some(channel), Some(target)) = (
            self.channels.get(&incoming.channel),
            incoming.reply_target.as_deref(),
        ) {
            let _ = channel.send_typing(target).await;
        }
    }

    /// The main menu buttons, localized.
    pub(crate) fn main_menu(lang: &str) -> Vec<QuickReply> {
        use crate::i18n::{other_language, t};
        vec![
            QuickReply {
                label: t("btn_analyze", lang).to_string(),
                command: "/analyze".to_string(),
            },
            QuickReply {
                label: t("btn_emergency", lang).to_string(),
                command: "/emergency".to_string(),
            },
            QuickReply {
                label: t("btn_checkurl", lang).to_string(),
                command: "/checkurl".to_string(),
            },
            QuickReply {
                label: t("btn_scams", lang).to_string(),
                command: "/scams".to_string(),
            },
            QuickReply {
                label: t("btn_language", lang).to_string(),
                command: format!("/language {}", other_language(lang).to_lowercase()),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_offers_the_other_language() {
        let en = Gateway::main_menu("English");
        assert_eq!(en.last().unwrap().command, "/language hindi");
        assert!(en.last().unwrap().label.contains("हिंदी"));

        let hi = Gateway::main_menu("Hindi");
        assert_eq!(hi.last().unwrap().command, "/language english");
        assert!(hi.last().unwrap().label.contains("English"));
    }

    #[test]
    fn test_main_menu_commands_are_routable() {
        for qr in Gateway::main_menu("English") {
            assert!(
                crate::commands::Command::parse(&qr.command).is_some(),
                "menu command '{}' must parse",
                qr.command
            );
        }
    }
}
