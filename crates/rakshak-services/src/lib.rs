//! # rakshak-services
//!
//! Clients for the external services the bot consults: the Gemini model
//! analyzer, the Google Safe Browsing URL-reputation API, and the Google
//! Cloud Translation API. Each implements the matching `rakshak-core`
//! trait; each failure mode degrades rather than blocks a reply.

pub mod gemini;
pub mod safe_browsing;
pub mod translate;

pub use gemini::GeminiAnalyzer;
pub use safe_browsing::SafeBrowsing;
pub use translate::GoogleTranslate;
