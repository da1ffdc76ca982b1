use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An incoming message from a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub id: Uuid,
    /// Channel name (e.g. "telegram", "console").
    pub channel: String,
    /// Platform-specific user ID.
    pub sender_id: String,
    /// Human-readable sender name.
    pub sender_name: Option<String>,
    /// Message text content.
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Platform-specific target for routing the response (e.g. Telegram chat_id).
    #[serde(default)]
    pub reply_target: Option<String>,
    /// Whether this message comes from a group chat.
    #[serde(default)]
    pub is_group: bool,
}

/// An outgoing message to send back through a channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub text: String,
    /// Platform-specific target for routing (e.g. Telegram chat_id).
    #[serde(default)]
    pub reply_target: Option<String>,
    /// Quick actions to offer alongside the text. Telegram renders these as
    /// an inline keyboard; the console renders a numbered menu.
    #[serde(default)]
    pub quick_replies: Vec<QuickReply>,
}

/// A single quick-action button.
///
/// `command` is what comes back as the message text when the user picks it
/// (e.g. "/scams"), so quick replies route exactly like typed commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickReply {
    pub label: String,
    pub command: String,
}

impl OutgoingMessage {
    /// Plain text reply addressed to the sender of `incoming`.
    pub fn reply_to(incoming: &IncomingMessage, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reply_target: incoming.reply_target.clone(),
            quick_replies: Vec::new(),
        }
    }

    pub fn with_quick_replies(mut self, quick_replies: Vec<QuickReply>) -> Self {
        self.quick_replies = quick_replies;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_to_copies_target() {
        let incoming = IncomingMessage {
            id: Uuid::new_v4(),
            channel: "telegram".into(),
            sender_id: "42".into(),
            sender_name: None,
            text: "hello".into(),
            timestamp: Utc::now(),
            reply_target: Some("1001".into()),
            is_group: false,
        };
        let out = OutgoingMessage::reply_to(&incoming, "hi");
        assert_eq!(out.reply_target.as_deref(), Some("1001"));
        assert_eq!(out.text, "hi");
        assert!(out.quick_replies.is_empty());
    }

    #[test]
    fn test_incoming_deserialize_without_optional_fields() {
        // Older serialized messages lack reply_target / is_group.
        let json = format!(
            r#"{{"id":"{}","channel":"console","sender_id":"local","sender_name":null,"text":"hi","timestamp":"2026-01-01T00:00:00Z"}}"#,
            Uuid::new_v4()
        );
        let msg: IncomingMessage = serde_json::from_str(&json).unwrap();
        assert!(msg.reply_target.is_none());
        assert!(!msg.is_group);
    }
}
