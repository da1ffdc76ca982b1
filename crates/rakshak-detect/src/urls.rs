//! URL extraction and local suspicious-pattern heuristics.
//!
//! The heuristics run alongside the reputation service and cover the case
//! where it is unreachable. They only ever *warn* — a clean scan here says
//! nothing about actual safety.

/// Substrings that mark a URL as worth warning about: link shorteners and
/// alarm words scammers put in paths.
const SUSPICIOUS_INDICATORS: &[&str] = &[
    "bit.ly",
    "tinyurl.com",
    "short.link",
    "rb.gy",
    "phishing",
    "malware",
    "suspicious-domain",
    "free-download",
    "urgent-update",
    "security-alert",
];

/// Pull URLs out of free-form message text.
///
/// Recognizes `http://`, `https://`, and bare `www.` tokens; trailing
/// punctuation is trimmed.
pub fn extract_urls(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|token| {
            let trimmed = token.trim_end_matches(['.', ',', ';', ':', '!', '?', ')', ']', '>']);
            if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
                Some(trimmed.to_string())
            } else if trimmed.starts_with("www.") && trimmed.len() > 4 {
                Some(trimmed.to_string())
            } else {
                None
            }
        })
        .collect()
}

/// Which suspicious indicators a URL contains, if any.
pub fn suspicious_indicators(url: &str) -> Vec<&'static str> {
    let url_lower = url.to_lowercase();
    SUSPICIOUS_INDICATORS
        .iter()
        .filter(|ind| url_lower.contains(**ind))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_http_and_https() {
        let urls = extract_urls("see http://example.com and https://example.org/path today");
        assert_eq!(urls, vec!["http://example.com", "https://example.org/path"]);
    }

    #[test]
    fn test_extract_trims_trailing_punctuation() {
        let urls = extract_urls("visit https://example.com/login, now!");
        assert_eq!(urls, vec!["https://example.com/login"]);
    }

    #[test]
    fn test_extract_bare_www() {
        let urls = extract_urls("go to www.example.com please");
        assert_eq!(urls, vec!["www.example.com"]);
    }

    #[test]
    fn test_extract_none_from_plain_text() {
        assert!(extract_urls("no links in here").is_empty());
    }

    #[test]
    fn test_shortener_flagged() {
        let found = suspicious_indicators("https://bit.ly/3xyz");
        assert_eq!(found, vec!["bit.ly"]);
    }

    #[test]
    fn test_multiple_indicators_flagged() {
        let found = suspicious_indicators("http://tinyurl.com/free-download");
        assert!(found.contains(&"tinyurl.com"));
        assert!(found.contains(&"free-download"));
    }

    #[test]
    fn test_indicator_match_is_case_insensitive() {
        assert!(!suspicious_indicators("https://BIT.LY/abc").is_empty());
    }

    #[test]
    fn test_clean_url_not_flagged() {
        assert!(suspicious_indicators("https://www.rbi.org.in").is_empty());
    }
}
