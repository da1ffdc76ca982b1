use crate::{
    error::RakshakError,
    message::{IncomingMessage, OutgoingMessage},
    report::{ThreatReport, UrlVerdict},
};
use async_trait::async_trait;

/// Messaging Channel trait — how messages reach and leave the bot.
///
/// Every transport (Telegram, the interactive console) implements this
/// trait to receive and send messages.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Start listening for incoming messages.
    /// Returns a receiver that yields incoming messages.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<IncomingMessage>, RakshakError>;

    /// Send a response back through this channel.
    async fn send(&self, message: OutgoingMessage) -> Result<(), RakshakError>;

    /// Send a typing indicator to show the bot is processing.
    async fn send_typing(&self, _target: &str) -> Result<(), RakshakError> {
        Ok(())
    }

    /// Graceful shutdown.
    async fn stop(&self) -> Result<(), RakshakError>;
}

/// Message analyzer trait — an external service that judges suspicious text.
///
/// The local keyword engine is NOT behind this trait; it is infallible and
/// synchronous, and serves as the fallback when an analyzer errors out.
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Human-readable analyzer name.
    fn name(&self) -> &str;

    /// Check if the analyzer is reachable and ready.
    async fn is_available(&self) -> bool;

    /// Analyze a message for scam patterns. Explanation and advice come
    /// back in English; localization is the translator's job.
    async fn analyze(&self, text: &str) -> Result<ThreatReport, RakshakError>;
}

/// URL-reputation trait — classifies a URL as safe, unsafe, or unknown.
#[async_trait]
pub trait UrlScanner: Send + Sync {
    /// Human-readable scanner name.
    fn name(&self) -> &str;

    /// Look up a URL. Implementations return `UrlVerdict::Unknown` rather
    /// than erroring when the service cannot answer.
    async fn scan(&self, url: &str) -> UrlVerdict;
}

/// Translation trait — (text, target language code) in, translated text out.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Human-readable translator name.
    fn name(&self) -> &str;

    /// Translate `text` into the BCP-47 / ISO-639 target code (e.g. "hi").
    async fn translate(&self, text: &str, target: &str) -> Result<String, RakshakError>;
}
