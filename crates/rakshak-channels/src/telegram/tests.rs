use super::send::{inline_keyboard, split_message};
use super::types::*;
use rakshak_core::message::QuickReply;

#[test]
fn test_split_short_message() {
    let chunks = split_message("hello", 4096);
    assert_eq!(chunks, vec!["hello"]);
}

#[test]
fn test_split_long_message() {
    let text = "a\n".repeat(3000);
    let chunks = split_message(&text, 4096);
    assert!(chunks.len() >= 2);
    for chunk in &chunks {
        assert!(chunk.len() <= 4096);
        assert!(!chunk.is_empty());
    }
}

#[test]
fn test_split_prefers_newline_boundaries() {
    let text = format!("{}\n{}", "a".repeat(50), "b".repeat(50));
    let chunks = split_message(&text, 60);
    assert_eq!(chunks[0], format!("{}\n", "a".repeat(50)));
    assert_eq!(chunks[1], "b".repeat(50));
}

#[test]
fn test_tg_chat_group_detection() {
    let group: TgChat = serde_json::from_str(r#"{"id": -100123, "type": "group"}"#).unwrap();
    assert!(matches!(group.chat_type.as_str(), "group" | "supergroup"));

    let private: TgChat = serde_json::from_str(r#"{"id": 789, "type": "private"}"#).unwrap();
    assert!(!matches!(private.chat_type.as_str(), "group" | "supergroup"));
}

#[test]
fn test_tg_chat_type_defaults_when_missing() {
    let chat: TgChat = serde_json::from_str(r#"{"id": 123}"#).unwrap();
    assert_eq!(chat.chat_type, "");
}

#[test]
fn test_update_with_text_message() {
    let json = r#"{
        "update_id": 7,
        "message": {
            "message_id": 1,
            "from": {"id": 42, "first_name": "Asha", "username": "asha"},
            "chat": {"id": 42, "type": "private"},
            "text": "is this a scam?"
        }
    }"#;
    let update: TgUpdate = serde_json::from_str(json).unwrap();
    assert!(update.callback_query.is_none());
    let msg = update.message.unwrap();
    assert_eq!(msg.text.as_deref(), Some("is this a scam?"));
    assert_eq!(display_name(msg.from.as_ref().unwrap()), "@asha");
}

#[test]
fn test_update_with_callback_query() {
    let json = r#"{
        "update_id": 8,
        "callback_query": {
            "id": "cb123",
            "from": {"id": 42, "first_name": "Asha"},
            "message": {
                "message_id": 2,
                "chat": {"id": 42, "type": "private"},
                "text": "Welcome!"
            },
            "data": "/scams"
        }
    }"#;
    let update: TgUpdate = serde_json::from_str(json).unwrap();
    let cq = update.callback_query.unwrap();
    assert_eq!(cq.id, "cb123");
    assert_eq!(cq.data.as_deref(), Some("/scams"));
    assert_eq!(cq.message.unwrap().chat.id, 42);
}

#[test]
fn test_display_name_without_username() {
    let user: TgUser =
        serde_json::from_str(r#"{"id": 1, "first_name": "Asha", "last_name": "Rao"}"#).unwrap();
    assert_eq!(display_name(&user), "Asha Rao");

    let solo: TgUser = serde_json::from_str(r#"{"id": 2, "first_name": "Ravi"}"#).unwrap();
    assert_eq!(display_name(&solo), "Ravi");
}

#[test]
fn test_inline_keyboard_one_button_per_row() {
    let keyboard = inline_keyboard(&[
        QuickReply {
            label: "🔍 Analyze".into(),
            command: "/analyze".into(),
        },
        QuickReply {
            label: "🔗 Check URL".into(),
            command: "/checkurl".into(),
        },
    ]);
    let rows = keyboard["inline_keyboard"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0]["callback_data"], "/analyze");
    assert_eq!(rows[1][0]["text"], "🔗 Check URL");
}
