//! The scam rulebook — a read-only table mapping categories to trigger keywords.

use rakshak_core::{error::RakshakError, report::ThreatKind};
use serde::Deserialize;

/// The bundled rule table, compiled into the binary.
const BUNDLED_RULES: &str = include_str!("../rules/scams.toml");

/// One scam category and its trigger keywords.
#[derive(Debug, Clone, Deserialize)]
pub struct ScamRule {
    pub kind: ThreatKind,
    /// English keywords, matched as lowercase substrings.
    pub keywords: Vec<String>,
    /// Hindi keywords, matched as exact substrings.
    #[serde(default)]
    pub keywords_hi: Vec<String>,
}

impl ScamRule {
    /// Total keyword count across both languages. Denominator of the
    /// confidence score.
    pub fn keyword_count(&self) -> usize {
        self.keywords.len() + self.keywords_hi.len()
    }
}

#[derive(Debug, Deserialize)]
struct RuleFile {
    #[serde(rename = "rule")]
    rules: Vec<ScamRule>,
}

/// The loaded rule table. Constructed once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct Rulebook {
    rules: Vec<ScamRule>,
}

impl Rulebook {
    /// Parse the bundled rule table.
    ///
    /// A malformed bundle is a startup error, not a runtime one.
    pub fn bundled() -> Result<Self, RakshakError> {
        Self::from_toml(BUNDLED_RULES)
    }

    /// Parse a rule table from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, RakshakError> {
        let file: RuleFile = toml::from_str(content)
            .map_err(|e| RakshakError::Detect(format!("failed to parse rulebook: {e}")))?;
        if file.rules.is_empty() {
            return Err(RakshakError::Detect("rulebook has no rules".into()));
        }
        for rule in &file.rules {
            if rule.keywords.is_empty() && rule.keywords_hi.is_empty() {
                return Err(RakshakError::Detect(format!(
                    "rule '{}' has no keywords",
                    rule.kind.label()
                )));
            }
        }
        Ok(Self { rules: file.rules })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScamRule> {
        self.rules.iter()
    }

    pub fn get(&self, kind: ThreatKind) -> Option<&ScamRule> {
        self.rules.iter().find(|r| r.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_rulebook_parses() {
        let book = Rulebook::bundled().unwrap();
        assert_eq!(book.len(), 4);
        for kind in [
            ThreatKind::Phishing,
            ThreatKind::OtpScam,
            ThreatKind::JobFraud,
            ThreatKind::FakeLink,
        ] {
            let rule = book.get(kind).unwrap_or_else(|| panic!("missing {kind:?}"));
            assert!(!rule.keywords.is_empty());
            assert!(
                !rule.keywords_hi.is_empty(),
                "{kind:?} should carry Hindi keywords"
            );
        }
    }

    #[test]
    fn test_bundled_keywords_are_lowercase() {
        // The engine lowercases input once; rules must already be lowercase.
        let book = Rulebook::bundled().unwrap();
        for rule in book.iter() {
            for kw in &rule.keywords {
                assert_eq!(kw, &kw.to_lowercase(), "keyword '{kw}' must be lowercase");
            }
        }
    }

    #[test]
    fn test_rejects_empty_rule() {
        let toml_str = r#"
            [[rule]]
            kind = "phishing"
            keywords = []
        "#;
        assert!(Rulebook::from_toml(toml_str).is_err());
    }

    #[test]
    fn test_rejects_unknown_kind() {
        let toml_str = r#"
            [[rule]]
            kind = "pyramid_scheme"
            keywords = ["double your money"]
        "#;
        assert!(Rulebook::from_toml(toml_str).is_err());
    }

    #[test]
    fn test_rejects_empty_file() {
        assert!(Rulebook::from_toml("").is_err());
    }
}
