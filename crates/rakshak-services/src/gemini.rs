//! Google Gemini model analyzer.
//!
//! Calls the Gemini `generateContent` endpoint and asks for a JSON verdict.
//! Auth via URL query param. Any failure is an `Err` so the caller can fall
//! back to the local keyword engine.

use async_trait::async_trait;
use rakshak_core::{
    config::GeminiConfig,
    error::RakshakError,
    report::{AnalysisSource, ThreatKind, ThreatReport},
    traits::Analyzer,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini-backed message analyzer.
pub struct GeminiAnalyzer {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiAnalyzer {
    /// Create from config values.
    pub fn from_config(config: &GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

/// The JSON verdict the prompt asks the model to emit.
#[derive(Debug, Deserialize)]
struct GeminiVerdict {
    is_threat: bool,
    threat_type: String,
    #[serde(default)]
    confidence: f64,
    #[serde(default)]
    explanation: String,
    #[serde(default)]
    advice: String,
}

/// Build the analysis prompt for a forwarded message.
fn analysis_prompt(message: &str) -> String {
    format!(
        "Analyze this message for cybersecurity threats. Look for:\n\
         1. Phishing attempts\n\
         2. OTP/PIN scams\n\
         3. Job fraud\n\
         4. Fake links/downloads\n\
         5. Social engineering tactics\n\n\
         Message: \"{message}\"\n\n\
         Respond ONLY with JSON in this shape:\n\
         {{\n\
           \"is_threat\": boolean,\n\
           \"threat_type\": \"phishing|otp_scam|job_fraud|fake_link|social_engineering|none\",\n\
           \"confidence\": float between 0 and 1,\n\
           \"explanation\": \"detailed explanation\",\n\
           \"advice\": \"actionable advice\"\n\
         }}"
    )
}

/// Slice out the JSON object from a model reply that may wrap it in prose
/// or a ``` fence.
fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[async_trait]
impl Analyzer for GeminiAnalyzer {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn is_available(&self) -> bool {
        if self.api_key.is_empty() {
            warn!("gemini: no API key configured");
            return false;
        }
        let url = format!("{GEMINI_BASE_URL}/models?key={}", self.api_key);
        match self.client.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                warn!("gemini not available: {e}");
                false
            }
        }
    }

    async fn analyze(&self, text: &str) -> Result<ThreatReport, RakshakError> {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: analysis_prompt(text),
                }],
            }],
        };

        let url = format!(
            "{GEMINI_BASE_URL}/models/{}:generateContent?key={}",
            self.model, self.api_key
        );
        debug!("gemini: POST models/{}:generateContent", self.model);

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| RakshakError::Service(format!("gemini request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(RakshakError::Service(format!(
                "gemini returned {status}: {text}"
            )));
        }

        let parsed: GeminiResponse = resp
            .json()
            .await
            .map_err(|e| RakshakError::Service(format!("gemini: failed to parse response: {e}")))?;

        let reply = parsed
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| RakshakError::Service("gemini: empty response".into()))?;

        let json = extract_json(reply)
            .ok_or_else(|| RakshakError::Service("gemini: no JSON object in reply".into()))?;

        let verdict: GeminiVerdict = serde_json::from_str(json)
            .map_err(|e| RakshakError::Service(format!("gemini: bad verdict JSON: {e}")))?;

        Ok(ThreatReport {
            is_threat: verdict.is_threat,
            kind: ThreatKind::parse(&verdict.threat_type),
            confidence: verdict.confidence.clamp(0.0, 1.0),
            matches: 0,
            explanation: verdict.explanation,
            advice: verdict.advice,
            source: AnalysisSource::Model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer_name() {
        let a = GeminiAnalyzer::from_config(&GeminiConfig {
            enabled: true,
            api_key: "AIza-test".into(),
            model: "gemini-2.0-flash".into(),
        });
        assert_eq!(a.name(), "gemini");
    }

    #[test]
    fn test_request_serialization() {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: "Hello".into(),
                }],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Hello");
    }

    #[test]
    fn test_prompt_embeds_message() {
        let prompt = analysis_prompt("share your otp");
        assert!(prompt.contains("share your otp"));
        assert!(prompt.contains("threat_type"));
        assert!(prompt.contains("Respond ONLY with JSON"));
    }

    #[test]
    fn test_extract_json_from_fenced_reply() {
        let reply = "Here you go:\n```json\n{\"is_threat\": true}\n```";
        assert_eq!(extract_json(reply), Some("{\"is_threat\": true}"));
    }

    #[test]
    fn test_extract_json_plain() {
        assert_eq!(extract_json("{\"a\":1}"), Some("{\"a\":1}"));
        assert_eq!(extract_json("no json here"), None);
    }

    #[test]
    fn test_verdict_parsing() {
        let json = r#"{
            "is_threat": true,
            "threat_type": "otp_scam",
            "confidence": 0.92,
            "explanation": "Asks for a one-time password.",
            "advice": "Never share OTPs."
        }"#;
        let v: GeminiVerdict = serde_json::from_str(json).unwrap();
        assert!(v.is_threat);
        assert_eq!(ThreatKind::parse(&v.threat_type), Some(ThreatKind::OtpScam));
        assert!((v.confidence - 0.92).abs() < f64::EPSILON);
    }

    #[test]
    fn test_verdict_none_maps_to_no_kind() {
        let json = r#"{"is_threat": false, "threat_type": "none"}"#;
        let v: GeminiVerdict = serde_json::from_str(json).unwrap();
        assert!(!v.is_threat);
        assert_eq!(ThreatKind::parse(&v.threat_type), None);
        assert_eq!(v.confidence, 0.0);
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"{\"is_threat\":false,\"threat_type\":\"none\"}"}]}}]}"#;
        let resp: GeminiResponse = serde_json::from_str(json).unwrap();
        let text = resp
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| p.text.clone())
            .unwrap();
        assert!(text.contains("is_threat"));
    }
}
