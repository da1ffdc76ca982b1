//! Per-message flow: command parse → pending prompt → analysis.

use super::{Gateway, PendingAction};
use crate::analysis;
use crate::commands::{self, Command, CommandContext, CommandReply};
use crate::i18n;
use rakshak_core::message::{IncomingMessage, OutgoingMessage, QuickReply};
use tracing::info;

impl Gateway {
    /// Process a single incoming message.
    pub(super) async fn handle_message(&self, incoming: IncomingMessage) {
        let preview = if incoming.text.chars().count() > 60 {
            let truncated: String = incoming.text.chars().take(60).collect();
            format!("{truncated}...")
        } else {
            incoming.text.clone()
        };
        info!(
            "[{}] {} says: {}",
            incoming.channel,
            incoming.sender_name.as_deref().unwrap_or("unknown"),
            preview
        );

        let lang = self.resolve_lang(&incoming).await;
        let key = Self::sender_key(&incoming);

        // Commands win over everything, including pending prompts.
        if let Some(cmd) = Command::parse(&incoming.text) {
            self.pending.lock().await.remove(&key);
            self.run_command(cmd, &incoming, &lang).await;
            return;
        }

        // A pending prompt consumes the next plain message.
        let pending = self.pending.lock().await.remove(&key);
        match pending {
            Some(PendingAction::CheckUrl) => {
                self.run_url_flow(&incoming, &incoming.text, &lang).await;
            }
            // Explicit analyze prompt or the default: analyze whatever came.
            Some(PendingAction::AnalyzeMessage) | None => {
                self.run_analysis_flow(&incoming, &incoming.text, &lang).await;
            }
        }
    }

    /// Execute a parsed command.
    async fn run_command(&self, cmd: Command, incoming: &IncomingMessage, lang: &str) {
        let ctx = CommandContext {
            lang,
            uptime: &self.uptime,
            rulebook_len: self.rulebook.len(),
            analyzer: self.services.analyzer.as_deref(),
            url_scanner: self.services.url_scanner.as_deref(),
            translator: self.services.translator.as_deref(),
        };

        match commands::handle(cmd, &incoming.text, &ctx).await {
            CommandReply::Text(text) => self.send_text(incoming, &text).await,
            CommandReply::Menu(text) => {
                let msg = OutgoingMessage::reply_to(incoming, text)
                    .with_quick_replies(Self::main_menu(lang));
                self.send(incoming, msg).await;
            }
            CommandReply::AwaitMessage(prompt) => {
                self.pending
                    .lock()
                    .await
                    .insert(Self::sender_key(incoming), PendingAction::AnalyzeMessage);
                self.send_text(incoming, &prompt).await;
            }
            CommandReply::AwaitUrl(prompt) => {
                self.pending
                    .lock()
                    .await
                    .insert(Self::sender_key(incoming), PendingAction::CheckUrl);
                self.send_text(incoming, &prompt).await;
            }
            CommandReply::AnalyzeNow(text) => {
                self.run_analysis_flow(incoming, &text, lang).await;
            }
            CommandReply::ScanUrl(url) => {
                self.run_url_flow(incoming, &url, lang).await;
            }
            CommandReply::SetLanguage { lang: new_lang, text } => {
                self.user_languages
                    .lock()
                    .await
                    .insert(Self::sender_key(incoming), new_lang.to_string());
                let msg = OutgoingMessage::reply_to(incoming, text)
                    .with_quick_replies(Self::main_menu(new_lang));
                self.send(incoming, msg).await;
            }
        }
    }

    /// Analyze text and reply; attach the emergency button when warranted.
    async fn run_analysis_flow(&self, incoming: &IncomingMessage, text: &str, lang: &str) {
        self.send_typing(incoming).await;

        let outcome = analysis::analyze_text(&self.rulebook, &self.services, text, lang).await;

        let mut msg = OutgoingMessage::reply_to(incoming, outcome.text);
        if outcome.emergency {
            msg = msg.with_quick_replies(vec![QuickReply {
                label: i18n::t("btn_emergency", lang).to_string(),
                command: "/emergency".to_string(),
            }]);
        }
        self.send(incoming, msg).await;
    }

    /// Check a URL and reply.
    async fn run_url_flow(&self, incoming: &IncomingMessage, text: &str, lang: &str) {
        let urls = rakshak_detect::urls::extract_urls(text);
        // A bare domain typed after the prompt still deserves a check.
        let url = urls
            .first()
            .cloned()
            .unwrap_or_else(|| text.trim().to_string());

        if url.is_empty() || url.split_whitespace().count() != 1 || !url.contains('.') {
            self.send_text(incoming, i18n::t("no_url_found", lang)).await;
            return;
        }

        self.send_typing(incoming).await;
        let reply = analysis::check_url(&self.services, &url, lang).await;
        self.send_text(incoming, &reply).await;
    }
}
