//! Detection data model shared by the keyword engine and external services.

use serde::{Deserialize, Serialize};

/// A labeled class of fraud pattern. Used as the lookup key for the
/// canned explanation and advice templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatKind {
    Phishing,
    OtpScam,
    JobFraud,
    FakeLink,
    /// Only reported by the model analyzer — the rulebook has no keyword
    /// set for it, but the canned templates cover it.
    SocialEngineering,
}

impl ThreatKind {
    /// Stable wire label, matching the model analyzer's vocabulary.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Phishing => "phishing",
            Self::OtpScam => "otp_scam",
            Self::JobFraud => "job_fraud",
            Self::FakeLink => "fake_link",
            Self::SocialEngineering => "social_engineering",
        }
    }

    /// Parse a wire label. Unknown labels map to `None` ("none" included).
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "phishing" => Some(Self::Phishing),
            "otp_scam" => Some(Self::OtpScam),
            "job_fraud" => Some(Self::JobFraud),
            "fake_link" => Some(Self::FakeLink),
            "social_engineering" => Some(Self::SocialEngineering),
            _ => None,
        }
    }
}

/// Where an analysis verdict came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    /// The model analyzer (Gemini).
    Model,
    /// The local keyword rulebook.
    Rules,
}

/// The outcome of analyzing a suspicious message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatReport {
    pub is_threat: bool,
    /// `None` when the message looks safe.
    pub kind: Option<ThreatKind>,
    /// In `[0, 1]`.
    pub confidence: f64,
    /// Keyword hits (rulebook verdicts only; 0 for model verdicts).
    pub matches: usize,
    /// Human-readable explanation of the verdict.
    pub explanation: String,
    /// Actionable advice for the user.
    pub advice: String,
    pub source: AnalysisSource,
}

impl ThreatReport {
    /// A "looks safe" report from the given source.
    pub fn safe(source: AnalysisSource, explanation: String, advice: String) -> Self {
        Self {
            is_threat: false,
            kind: None,
            confidence: 0.0,
            matches: 0,
            explanation,
            advice,
            source,
        }
    }
}

/// Verdict from the URL-reputation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "verdict")]
pub enum UrlVerdict {
    /// The service checked the URL and found nothing.
    Safe,
    /// The service flagged the URL.
    Unsafe { threat: String },
    /// The service could not be reached or gave no usable answer.
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threat_kind_label_round_trip() {
        for kind in [
            ThreatKind::Phishing,
            ThreatKind::OtpScam,
            ThreatKind::JobFraud,
            ThreatKind::FakeLink,
            ThreatKind::SocialEngineering,
        ] {
            assert_eq!(ThreatKind::parse(kind.label()), Some(kind));
        }
    }

    #[test]
    fn test_threat_kind_parse_rejects_none() {
        assert_eq!(ThreatKind::parse("none"), None);
        assert_eq!(ThreatKind::parse(""), None);
        assert_eq!(ThreatKind::parse("ransomware"), None);
    }

    #[test]
    fn test_threat_kind_serde_uses_snake_case() {
        let json = serde_json::to_string(&ThreatKind::OtpScam).unwrap();
        assert_eq!(json, r#""otp_scam""#);
    }

    #[test]
    fn test_url_verdict_serde_tagged() {
        let v = UrlVerdict::Unsafe {
            threat: "SOCIAL_ENGINEERING".into(),
        };
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["verdict"], "unsafe");
        assert_eq!(json["threat"], "SOCIAL_ENGINEERING");

        let safe: UrlVerdict = serde_json::from_str(r#"{"verdict":"safe"}"#).unwrap();
        assert_eq!(safe, UrlVerdict::Safe);
    }
}
