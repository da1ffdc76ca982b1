//! Analysis orchestration — model analyzer with rulebook fallback, URL
//! verdicts, translation of dynamic output, and reply composition.

use crate::i18n;
use rakshak_core::{
    report::{AnalysisSource, ThreatReport, UrlVerdict},
    sanitize,
    traits::{Analyzer, Translator, UrlScanner},
};
use rakshak_detect::{engine, urls, Rulebook};
use std::sync::Arc;
use tracing::{info, warn};

/// How many URLs from one message get a reputation lookup.
const MAX_URLS_PER_MESSAGE: usize = 3;

/// The external services the bot may consult. All optional — without them
/// the bot degrades to the local engine and heuristics.
#[derive(Clone, Default)]
pub struct Services {
    pub analyzer: Option<Arc<dyn Analyzer>>,
    pub url_scanner: Option<Arc<dyn UrlScanner>>,
    pub translator: Option<Arc<dyn Translator>>,
}

/// A composed analysis reply.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub text: String,
    /// The message suggests the user was already defrauded.
    pub emergency: bool,
}

/// Analyze free-form text and compose the localized reply.
pub async fn analyze_text(
    rulebook: &Rulebook,
    services: &Services,
    text: &str,
    lang: &str,
) -> AnalysisOutcome {
    let report = best_report(rulebook, services, text, lang).await;
    let mut reply = compose_report(&report, lang);

    // Reputation lookups for any URLs in the message.
    for url in urls::extract_urls(text).into_iter().take(MAX_URLS_PER_MESSAGE) {
        reply.push_str("\n\n");
        reply.push_str(&check_url(services, &url, lang).await);
    }

    let emergency = report.is_threat && engine::is_emergency(text);
    if emergency {
        reply.push_str("\n\n");
        reply.push_str(i18n::t("emergency_hint", lang));
    }

    AnalysisOutcome {
        text: reply,
        emergency,
    }
}

/// Model analyzer first, local rulebook as the fallback.
async fn best_report(
    rulebook: &Rulebook,
    services: &Services,
    text: &str,
    lang: &str,
) -> ThreatReport {
    if let Some(ref analyzer) = services.analyzer {
        // The forwarded text is attacker-authored; neutralize injection
        // attempts before it goes into the prompt.
        let sanitized = sanitize::sanitize(text);
        if sanitized.was_modified {
            warn!("sanitized forwarded text: {:?}", sanitized.warnings);
        }

        match analyzer.analyze(&sanitized.text).await {
            Ok(report) => {
                info!(
                    "{} verdict: threat={} kind={:?}",
                    analyzer.name(),
                    report.is_threat,
                    report.kind
                );
                return localize_report(report, services.translator.as_deref(), lang).await;
            }
            Err(e) => {
                warn!("{} analysis failed, using rulebook: {e}", analyzer.name());
            }
        }
    }

    local_report(rulebook, text, lang)
}

/// Rulebook verdict with canned, already-localized templates.
fn local_report(rulebook: &Rulebook, text: &str, lang: &str) -> ThreatReport {
    match engine::scan(rulebook, text) {
        Some(d) => ThreatReport {
            is_threat: true,
            kind: Some(d.kind),
            confidence: d.confidence,
            matches: d.matches,
            explanation: i18n::explanation(d.kind, lang).to_string(),
            advice: i18n::advice(d.kind, lang).to_string(),
            source: AnalysisSource::Rules,
        },
        None => ThreatReport::safe(
            AnalysisSource::Rules,
            i18n::t("safe_explanation", lang).to_string(),
            i18n::t("safe_advice", lang).to_string(),
        ),
    }
}

/// Translate a model report's free-text fields into the user's language.
///
/// Model output is English; rulebook output is already localized. When the
/// translator is missing or fails, the English text passes through — a
/// degraded reply beats no reply.
async fn localize_report(
    mut report: ThreatReport,
    translator: Option<&dyn Translator>,
    lang: &str,
) -> ThreatReport {
    if lang == "English" || report.source != AnalysisSource::Model {
        return report;
    }
    let Some(translator) = translator else {
        return report;
    };

    let code = i18n::lang_code(lang);
    match translator.translate(&report.explanation, code).await {
        Ok(t) => report.explanation = t,
        Err(e) => warn!("explanation translation failed: {e}"),
    }
    match translator.translate(&report.advice, code).await {
        Ok(t) => report.advice = t,
        Err(e) => warn!("advice translation failed: {e}"),
    }
    report
}

/// Render a report as the user-facing reply.
fn compose_report(report: &ThreatReport, lang: &str) -> String {
    let header = i18n::t("analysis_header", lang);

    if report.is_threat {
        let kind_label = report
            .kind
            .map(|k| k.label().to_uppercase())
            .unwrap_or_else(|| "SUSPICIOUS".to_string());
        format!(
            "{header}\n\n{}: {}\n{} {:.0}%\n\n{}\n{}\n\n{}\n{}",
            i18n::t("threat_detected", lang),
            kind_label,
            i18n::t("confidence", lang),
            report.confidence * 100.0,
            i18n::t("explanation_label", lang),
            report.explanation,
            i18n::t("advice_label", lang),
            report.advice,
        )
    } else {
        format!(
            "{header}\n\n{}\n\n{} {}",
            i18n::t("safe_message", lang),
            i18n::t("note_label", lang),
            report.explanation,
        )
    }
}

/// Run the URL flow: reputation lookup plus local heuristics.
pub async fn check_url(services: &Services, url: &str, lang: &str) -> String {
    let verdict = match services.url_scanner {
        Some(ref scanner) => scanner.scan(url).await,
        None => UrlVerdict::Unknown,
    };

    let mut out = format!("{} {url}\n\n", i18n::t("url_header", lang));

    if let UrlVerdict::Unsafe { ref threat } = verdict {
        out.push_str(&format!(
            "{}\n{} {threat}\n\n{}",
            i18n::t("url_flagged", lang),
            i18n::t("url_threat", lang),
            i18n::t("url_flagged_advice", lang),
        ));
        return out;
    }

    match verdict {
        UrlVerdict::Safe => out.push_str(i18n::t("url_clean", lang)),
        _ => out.push_str(i18n::t("url_unknown", lang)),
    }
    out.push('\n');

    let indicators = urls::suspicious_indicators(url);
    if indicators.is_empty() {
        out.push_str(i18n::t("url_no_patterns", lang));
    } else {
        out.push_str(i18n::t("url_suspicious", lang));
        for ind in indicators {
            out.push_str(&format!("\n{} {ind}", i18n::t("url_contains", lang)));
        }
    }

    out.push('\n');
    out.push_str(i18n::t("url_verify", lang));
    out
}
