//! Google Safe Browsing v4 URL-reputation client.
//!
//! One endpoint: `threatMatches:find`. Auth via URL query param.
//! Docs: <https://developers.google.com/safe-browsing/v4/lookup-api>
//!
//! This scanner never errors out of a reply: transport or API failures
//! produce `UrlVerdict::Unknown` and the caller falls back to local
//! heuristics.

use async_trait::async_trait;
use rakshak_core::{config::SafeBrowsingConfig, report::UrlVerdict, traits::UrlScanner};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const LOOKUP_URL: &str = "https://safebrowsing.googleapis.com/v4/threatMatches:find";

const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Threat types we ask the service about.
const THREAT_TYPES: &[&str] = &[
    "MALWARE",
    "SOCIAL_ENGINEERING",
    "UNWANTED_SOFTWARE",
    "POTENTIALLY_HARMFUL_APPLICATION",
];

/// Safe Browsing lookup client.
pub struct SafeBrowsing {
    client: reqwest::Client,
    api_key: String,
    client_id: String,
}

impl SafeBrowsing {
    /// Create from config values.
    pub fn from_config(config: &SafeBrowsingConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            client_id: config.client_id.clone(),
        }
    }

    fn build_request(&self, url: &str) -> LookupRequest {
        LookupRequest {
            client: ClientInfo {
                client_id: self.client_id.clone(),
                client_version: CLIENT_VERSION.to_string(),
            },
            threat_info: ThreatInfo {
                threat_types: THREAT_TYPES.iter().map(|s| s.to_string()).collect(),
                platform_types: vec!["ANY_PLATFORM".to_string()],
                threat_entry_types: vec!["URL".to_string()],
                threat_entries: vec![ThreatEntry {
                    url: url.to_string(),
                }],
            },
        }
    }
}

// --- Lookup API wire types ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest {
    client: ClientInfo,
    threat_info: ThreatInfo,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientInfo {
    client_id: String,
    client_version: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThreatInfo {
    threat_types: Vec<String>,
    platform_types: Vec<String>,
    threat_entry_types: Vec<String>,
    threat_entries: Vec<ThreatEntry>,
}

#[derive(Serialize)]
struct ThreatEntry {
    url: String,
}

#[derive(Deserialize)]
struct LookupResponse {
    matches: Option<Vec<ThreatMatch>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreatMatch {
    threat_type: String,
}

#[async_trait]
impl UrlScanner for SafeBrowsing {
    fn name(&self) -> &str {
        "safe-browsing"
    }

    async fn scan(&self, url: &str) -> UrlVerdict {
        if self.api_key.is_empty() {
            return UrlVerdict::Unknown;
        }

        let endpoint = format!("{LOOKUP_URL}?key={}", self.api_key);
        let body = self.build_request(url);
        debug!("safe-browsing: looking up {url}");

        let resp = match self
            .client
            .post(&endpoint)
            .json(&body)
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!("safe-browsing lookup failed: {e}");
                return UrlVerdict::Unknown;
            }
        };

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            warn!("safe-browsing returned {status}: {text}");
            return UrlVerdict::Unknown;
        }

        let parsed: LookupResponse = match resp.json().await {
            Ok(p) => p,
            Err(e) => {
                warn!("safe-browsing parse failed: {e}");
                return UrlVerdict::Unknown;
            }
        };

        match parsed.matches.as_deref() {
            Some([first, ..]) => UrlVerdict::Unsafe {
                threat: first.threat_type.clone(),
            },
            // An empty body means no list had the URL.
            _ => UrlVerdict::Safe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner() -> SafeBrowsing {
        SafeBrowsing::from_config(&SafeBrowsingConfig {
            enabled: true,
            api_key: "AIza-test".into(),
            client_id: "rakshak-bot".into(),
        })
    }

    #[test]
    fn test_request_payload_shape() {
        let body = scanner().build_request("https://bit.ly/evil");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["client"]["clientId"], "rakshak-bot");
        assert_eq!(json["threatInfo"]["platformTypes"][0], "ANY_PLATFORM");
        assert_eq!(json["threatInfo"]["threatEntryTypes"][0], "URL");
        assert_eq!(
            json["threatInfo"]["threatEntries"][0]["url"],
            "https://bit.ly/evil"
        );

        let types = json["threatInfo"]["threatTypes"].as_array().unwrap();
        assert_eq!(types.len(), 4);
        assert!(types.iter().any(|t| t == "SOCIAL_ENGINEERING"));
    }

    #[test]
    fn test_response_with_match() {
        let json = r#"{"matches":[{"threatType":"MALWARE","platformType":"ANY_PLATFORM"}]}"#;
        let parsed: LookupResponse = serde_json::from_str(json).unwrap();
        let m = parsed.matches.unwrap();
        assert_eq!(m[0].threat_type, "MALWARE");
    }

    #[test]
    fn test_empty_response_means_safe() {
        // The API returns `{}` when no list matches.
        let parsed: LookupResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.matches.is_none());
    }

    #[tokio::test]
    async fn test_no_api_key_gives_unknown() {
        let s = SafeBrowsing::from_config(&SafeBrowsingConfig {
            enabled: true,
            api_key: String::new(),
            client_id: "rakshak-bot".into(),
        });
        assert_eq!(s.scan("https://example.com").await, UrlVerdict::Unknown);
    }
}
