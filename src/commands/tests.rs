use super::*;

fn ctx(uptime: &Instant) -> CommandContext<'_> {
    CommandContext {
        lang: "English",
        uptime,
        rulebook_len: 4,
        analyzer: None,
        url_scanner: None,
        translator: None,
    }
}

#[test]
fn test_parse_known_commands() {
    assert_eq!(Command::parse("/start"), Some(Command::Start));
    assert_eq!(Command::parse("/help"), Some(Command::Help));
    assert_eq!(Command::parse("/analyze check this"), Some(Command::Analyze));
    assert_eq!(Command::parse("/checkurl http://x.y"), Some(Command::CheckUrl));
    assert_eq!(Command::parse("/scams"), Some(Command::Scams));
    assert_eq!(Command::parse("/emergency"), Some(Command::Emergency));
    assert_eq!(Command::parse("/lang hindi"), Some(Command::Language));
    assert_eq!(Command::parse("/status"), Some(Command::Status));
}

#[test]
fn test_parse_strips_botname_suffix() {
    assert_eq!(Command::parse("/help@rakshak_bot"), Some(Command::Help));
}

#[test]
fn test_parse_rejects_plain_text_and_unknown() {
    assert_eq!(Command::parse("is this a scam?"), None);
    assert_eq!(Command::parse("/frobnicate"), None);
    assert_eq!(Command::parse(""), None);
}

#[test]
fn test_arg_extraction() {
    assert_eq!(arg("/analyze you won a prize"), "you won a prize");
    assert_eq!(arg("/checkurl   https://bit.ly/x  "), "https://bit.ly/x");
    assert_eq!(arg("/analyze"), "");
}

#[tokio::test]
async fn test_start_gets_menu() {
    let uptime = Instant::now();
    let reply = handle(Command::Start, "/start", &ctx(&uptime)).await;
    match reply {
        CommandReply::Menu(text) => assert!(text.contains("Rakshak")),
        other => panic!("expected Menu, got {other:?}"),
    }
}

#[tokio::test]
async fn test_analyze_without_arg_awaits_message() {
    let uptime = Instant::now();
    let reply = handle(Command::Analyze, "/analyze", &ctx(&uptime)).await;
    assert!(matches!(reply, CommandReply::AwaitMessage(_)));
}

#[tokio::test]
async fn test_analyze_with_arg_runs_now() {
    let uptime = Instant::now();
    let reply = handle(Command::Analyze, "/analyze share your otp", &ctx(&uptime)).await;
    match reply {
        CommandReply::AnalyzeNow(text) => assert_eq!(text, "share your otp"),
        other => panic!("expected AnalyzeNow, got {other:?}"),
    }
}

#[tokio::test]
async fn test_checkurl_with_arg_scans_now() {
    let uptime = Instant::now();
    let reply = handle(Command::CheckUrl, "/checkurl https://bit.ly/x", &ctx(&uptime)).await;
    match reply {
        CommandReply::ScanUrl(url) => assert_eq!(url, "https://bit.ly/x"),
        other => panic!("expected ScanUrl, got {other:?}"),
    }
}

#[tokio::test]
async fn test_language_switch_confirms_in_new_language() {
    let uptime = Instant::now();
    let reply = handle(Command::Language, "/language hindi", &ctx(&uptime)).await;
    match reply {
        CommandReply::SetLanguage { lang, text } => {
            assert_eq!(lang, "Hindi");
            assert!(text.contains("हिंदी"));
        }
        other => panic!("expected SetLanguage, got {other:?}"),
    }
}

#[tokio::test]
async fn test_language_unknown_shows_usage() {
    let uptime = Instant::now();
    let reply = handle(Command::Language, "/language klingon", &ctx(&uptime)).await;
    match reply {
        CommandReply::Text(text) => assert!(text.contains("/language")),
        other => panic!("expected Text, got {other:?}"),
    }
}

#[tokio::test]
async fn test_status_reports_unconfigured_services() {
    let uptime = Instant::now();
    let reply = handle(Command::Status, "/status", &ctx(&uptime)).await;
    match reply {
        CommandReply::Text(text) => {
            assert!(text.contains("not configured"));
            assert!(text.contains("Rule categories: 4"));
        }
        other => panic!("expected Text, got {other:?}"),
    }
}

#[tokio::test]
async fn test_emergency_contains_helplines() {
    let uptime = Instant::now();
    let reply = handle(Command::Emergency, "/emergency", &ctx(&uptime)).await;
    match reply {
        CommandReply::Text(text) => {
            assert!(text.contains("1930"));
            assert!(text.contains("155"));
        }
        other => panic!("expected Text, got {other:?}"),
    }
}
