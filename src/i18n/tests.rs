use super::*;
use rakshak_core::report::ThreatKind;

const ALL_KINDS: &[ThreatKind] = &[
    ThreatKind::Phishing,
    ThreatKind::OtpScam,
    ThreatKind::JobFraud,
    ThreatKind::FakeLink,
    ThreatKind::SocialEngineering,
];

#[test]
fn test_labels_resolve_in_both_languages() {
    let keys = [
        "analysis_header",
        "threat_detected",
        "safe_message",
        "confidence",
        "explanation_label",
        "advice_label",
        "safe_explanation",
        "safe_advice",
        "send_message_prompt",
        "send_url_prompt",
        "url_header",
        "url_flagged",
        "url_clean",
        "url_unknown",
        "url_suspicious",
        "url_no_patterns",
        "url_verify",
        "btn_analyze",
        "btn_emergency",
        "btn_checkurl",
        "btn_scams",
        "btn_language",
        "emergency_hint",
    ];
    for lang in SUPPORTED {
        for key in &keys {
            let s = t(key, lang);
            assert_ne!(s, "???", "key '{key}' missing for {lang}");
            assert!(!s.is_empty());
        }
    }
}

#[test]
fn test_unknown_key_does_not_panic() {
    assert_eq!(t("no_such_key", "English"), "???");
}

#[test]
fn test_unknown_language_falls_back_to_english() {
    assert_eq!(t("safe_message", "Klingon"), t("safe_message", "English"));
}

#[test]
fn test_templates_cover_every_kind_in_both_languages() {
    for lang in SUPPORTED {
        for kind in ALL_KINDS {
            assert!(!explanation(*kind, lang).is_empty());
            assert!(!advice(*kind, lang).is_empty());
        }
    }
}

#[test]
fn test_hindi_templates_differ_from_english() {
    for kind in ALL_KINDS {
        assert_ne!(explanation(*kind, "English"), explanation(*kind, "Hindi"));
        assert_ne!(advice(*kind, "English"), advice(*kind, "Hindi"));
    }
}

#[test]
fn test_canned_blocks_exist_in_both_languages() {
    for lang in SUPPORTED {
        assert!(welcome(lang).contains("🛡️"));
        assert!(help(lang).contains("/analyze"));
        assert!(emergency(lang).contains("1930"));
        assert!(emergency(lang).contains("cybercrime.gov.in"));
        assert!(education(lang).contains("🛡️"));
    }
}

#[test]
fn test_language_switched_confirms_in_new_language() {
    assert!(language_switched("Hindi").contains("हिंदी"));
    assert!(language_switched("English").contains("English"));
}

#[test]
fn test_parse_language() {
    assert_eq!(parse_language("hindi"), Some("Hindi"));
    assert_eq!(parse_language(" Hindi "), Some("Hindi"));
    assert_eq!(parse_language("हिंदी"), Some("Hindi"));
    assert_eq!(parse_language("EN"), Some("English"));
    assert_eq!(parse_language("french"), None);
    assert_eq!(parse_language(""), None);
}

#[test]
fn test_lang_code() {
    assert_eq!(lang_code("Hindi"), "hi");
    assert_eq!(lang_code("English"), "en");
    assert_eq!(lang_code("anything"), "en");
}

#[test]
fn test_other_language_flips() {
    assert_eq!(other_language("English"), "Hindi");
    assert_eq!(other_language("Hindi"), "English");
}
