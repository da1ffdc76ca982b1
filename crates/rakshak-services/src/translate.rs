//! Google Cloud Translation v2 client.
//!
//! Used to localize dynamic analyzer output when the canned i18n tables
//! don't cover it. Auth via URL query param; `format=text` keeps the
//! service from HTML-escaping the guidance strings.

use async_trait::async_trait;
use rakshak_core::{config::TranslateConfig, error::RakshakError, traits::Translator};
use serde::{Deserialize, Serialize};
use tracing::debug;

const TRANSLATE_URL: &str = "https://translation.googleapis.com/language/translate/v2";

/// Cloud Translation client.
pub struct GoogleTranslate {
    client: reqwest::Client,
    api_key: String,
}

impl GoogleTranslate {
    /// Create from config values.
    pub fn from_config(config: &TranslateConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
        }
    }
}

#[derive(Serialize)]
struct TranslateRequest {
    q: String,
    target: String,
    format: String,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

#[async_trait]
impl Translator for GoogleTranslate {
    fn name(&self) -> &str {
        "google-translate"
    }

    async fn translate(&self, text: &str, target: &str) -> Result<String, RakshakError> {
        if self.api_key.is_empty() {
            return Err(RakshakError::Service("translate: no API key".into()));
        }

        let endpoint = format!("{TRANSLATE_URL}?key={}", self.api_key);
        let body = TranslateRequest {
            q: text.to_string(),
            target: target.to_string(),
            format: "text".to_string(),
        };
        debug!("translate: {} chars -> {target}", text.len());

        let resp = self
            .client
            .post(&endpoint)
            .json(&body)
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| RakshakError::Service(format!("translate request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(RakshakError::Service(format!(
                "translate returned {status}: {text}"
            )));
        }

        let parsed: TranslateResponse = resp
            .json()
            .await
            .map_err(|e| RakshakError::Service(format!("translate parse failed: {e}")))?;

        parsed
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| RakshakError::Service("translate: empty result".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let body = TranslateRequest {
            q: "Never share OTPs.".into(),
            target: "hi".into(),
            format: "text".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["q"], "Never share OTPs.");
        assert_eq!(json["target"], "hi");
        assert_eq!(json["format"], "text");
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{"data":{"translations":[{"translatedText":"ओटीपी कभी साझा न करें।"}]}}"#;
        let parsed: TranslateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.data.translations[0].translated_text,
            "ओटीपी कभी साझा न करें।"
        );
    }

    #[tokio::test]
    async fn test_no_api_key_errors() {
        let t = GoogleTranslate::from_config(&TranslateConfig {
            enabled: true,
            api_key: String::new(),
        });
        assert!(t.translate("hello", "hi").await.is_err());
    }
}
