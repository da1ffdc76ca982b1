//! Interactive console channel for `rakshak chat`.
//!
//! Reads lines from stdin and prints replies to stdout. Quick replies are
//! rendered as a numbered menu; typing the number sends the matching
//! command, mirroring the Telegram inline keyboard.

use async_trait::async_trait;
use console::style;
use rakshak_core::{
    error::RakshakError,
    message::{IncomingMessage, OutgoingMessage, QuickReply},
    traits::Channel,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, Mutex};
use tracing::info;
use uuid::Uuid;

/// Console channel: one local user, stdin in, stdout out.
pub struct ConsoleChannel {
    /// The menu offered by the last reply, so a bare number selects from it.
    menu: Arc<Mutex<Vec<QuickReply>>>,
}

impl ConsoleChannel {
    pub fn new() -> Self {
        Self {
            menu: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Default for ConsoleChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a typed line against the current menu: "2" becomes the second
/// entry's command, anything else passes through.
pub(crate) fn resolve_menu_choice(line: &str, menu: &[QuickReply]) -> String {
    if let Ok(n) = line.trim().parse::<usize>() {
        if n >= 1 {
            if let Some(entry) = menu.get(n - 1) {
                return entry.command.clone();
            }
        }
    }
    line.trim().to_string()
}

#[async_trait]
impl Channel for ConsoleChannel {
    fn name(&self) -> &str {
        "console"
    }

    async fn start(&self) -> Result<mpsc::Receiver<IncomingMessage>, RakshakError> {
        let (tx, rx) = mpsc::channel(16);
        let menu = self.menu.clone();

        tokio::spawn(async move {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut lines = stdin.lines();

            loop {
                let line = match lines.next_line().await {
                    Ok(Some(l)) => l,
                    Ok(None) => {
                        info!("console channel reached EOF");
                        break;
                    }
                    Err(e) => {
                        info!("console read error: {e}");
                        break;
                    }
                };

                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let text = {
                    let menu = menu.lock().await;
                    resolve_menu_choice(trimmed, &menu)
                };

                let incoming = IncomingMessage {
                    id: Uuid::new_v4(),
                    channel: "console".to_string(),
                    sender_id: "local".to_string(),
                    sender_name: None,
                    text,
                    timestamp: chrono::Utc::now(),
                    reply_target: Some("console".to_string()),
                    is_group: false,
                };

                if tx.send(incoming).await.is_err() {
                    break;
                }
            }
        });

        Ok(rx)
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), RakshakError> {
        println!("\n{}", message.text);

        let mut menu = self.menu.lock().await;
        *menu = message.quick_replies;
        for (i, qr) in menu.iter().enumerate() {
            println!(
                "  {} {}",
                style(format!("{}.", i + 1)).cyan().bold(),
                qr.label
            );
        }
        if !menu.is_empty() {
            println!(
                "{}",
                style("(type a number or a command)").dim()
            );
        }

        Ok(())
    }

    async fn stop(&self) -> Result<(), RakshakError> {
        info!("Console channel stopped");
        Ok(())
    }
}
