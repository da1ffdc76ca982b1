//! Keyword scan and scoring.
//!
//! A linear pass over the rulebook: count keyword hits per category, score
//! `hits / total_keywords * 2` capped at 1.0, and report the best category.

use crate::rules::Rulebook;
use rakshak_core::report::ThreatKind;

/// Phrases that indicate the user has already been defrauded and needs the
/// emergency-response flow, not just analysis.
const EMERGENCY_PHRASES: &[&str] = &[
    "shared otp",
    "gave otp",
    "sent money",
    "got scammed",
    "हो गया",
    "दिया",
    "भेज दिया",
    "धोखा",
];

/// A rulebook hit: the winning category and how sure the scan is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub kind: ThreatKind,
    /// In `[0, 1]`.
    pub confidence: f64,
    /// Keyword hits for the winning category.
    pub matches: usize,
}

/// Scan `text` against the rulebook. Returns the highest-confidence
/// category, or `None` when nothing matched.
///
/// English keywords match against the lowercased text; Hindi keywords
/// match the text as-is. Ties keep the earlier rule.
pub fn scan(rulebook: &Rulebook, text: &str) -> Option<Detection> {
    let text_lower = text.to_lowercase();
    let mut best: Option<Detection> = None;

    for rule in rulebook.iter() {
        let english_hits = rule
            .keywords
            .iter()
            .filter(|kw| text_lower.contains(kw.as_str()))
            .count();
        let hindi_hits = rule
            .keywords_hi
            .iter()
            .filter(|kw| text.contains(kw.as_str()))
            .count();

        let hits = english_hits + hindi_hits;
        if hits == 0 {
            continue;
        }

        let confidence = (hits as f64 / rule.keyword_count() as f64 * 2.0).min(1.0);
        let detection = Detection {
            kind: rule.kind,
            confidence,
            matches: hits,
        };

        match best {
            Some(b) if b.confidence >= confidence => {}
            _ => best = Some(detection),
        }
    }

    best
}

/// Whether the message suggests the user has already been scammed.
pub fn is_emergency(text: &str) -> bool {
    let text_lower = text.to_lowercase();
    EMERGENCY_PHRASES.iter().any(|p| text_lower.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Rulebook {
        Rulebook::bundled().unwrap()
    }

    #[test]
    fn test_phishing_keywords_detected() {
        let d = scan(
            &book(),
            "URGENT ACTION required: verify account or your prize is lost",
        )
        .unwrap();
        assert_eq!(d.kind, ThreatKind::Phishing);
        assert!(d.matches >= 3);
        assert!(d.confidence > 0.0 && d.confidence <= 1.0);
    }

    #[test]
    fn test_otp_scam_detected() {
        let d = scan(&book(), "Please share OTP to validate your request").unwrap();
        assert_eq!(d.kind, ThreatKind::OtpScam);
    }

    #[test]
    fn test_hindi_keywords_detected() {
        let d = scan(&book(), "घर से काम करें और रोज कमाएं, रजिस्ट्रेशन फीस सिर्फ 500").unwrap();
        assert_eq!(d.kind, ThreatKind::JobFraud);
        assert!(d.matches >= 3);
    }

    #[test]
    fn test_clean_text_yields_none() {
        assert!(scan(&book(), "Lunch at noon tomorrow?").is_none());
    }

    #[test]
    fn test_matching_is_case_insensitive_for_english() {
        let lower = scan(&book(), "work from home, easy money").unwrap();
        let upper = scan(&book(), "WORK FROM HOME, EASY MONEY").unwrap();
        assert_eq!(lower.kind, upper.kind);
        assert_eq!(lower.matches, upper.matches);
    }

    #[test]
    fn test_confidence_capped_at_one() {
        // Every job-fraud keyword at once.
        let text = "work from home easy money part time job registration fee \
                    advance payment guaranteed income no experience required \
                    data entry copy paste survey work earn daily";
        let d = scan(&book(), text).unwrap();
        assert_eq!(d.kind, ThreatKind::JobFraud);
        assert_eq!(d.confidence, 1.0);
    }

    #[test]
    fn test_highest_confidence_category_wins() {
        // One phishing hit vs. many OTP hits.
        let d = scan(
            &book(),
            "share otp verification code passcode authentication click here",
        )
        .unwrap();
        assert_eq!(d.kind, ThreatKind::OtpScam);
    }

    #[test]
    fn test_emergency_phrases() {
        assert!(is_emergency("I gave OTP to someone on the phone"));
        assert!(is_emergency("help, I sent money already"));
        assert!(is_emergency("मुझसे धोखा हुआ है"));
        assert!(!is_emergency("is this message a scam?"));
    }
}
