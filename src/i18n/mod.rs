//! Internationalization — localized strings for bot replies.
//!
//! Uses a simple `t(key, lang)` function for static labels and template
//! functions for the larger canned blocks. Supported languages: English
//! (fallback) and Hindi.

mod labels;
pub mod templates;

#[cfg(test)]
mod tests;

pub use templates::*;

/// Return a localized static string for `key` in the given `lang`.
/// Falls back to English for unsupported languages and never panics on
/// unknown keys.
pub fn t(key: &str, lang: &str) -> &'static str {
    labels::lookup(key, lang).unwrap_or("???")
}

/// Languages the canned tables cover.
pub const SUPPORTED: &[&str] = &["English", "Hindi"];

/// Normalize user input ("hindi", "हिंदी", "en", …) to a canonical
/// language name, or `None` if unsupported.
pub fn parse_language(input: &str) -> Option<&'static str> {
    match input.trim().to_lowercase().as_str() {
        "english" | "en" | "अंग्रेजी" | "अंग्रेज़ी" => Some("English"),
        "hindi" | "hi" | "हिंदी" | "हिन्दी" => Some("Hindi"),
        _ => None,
    }
}

/// ISO-639 code for the translation service.
pub fn lang_code(lang: &str) -> &'static str {
    match lang {
        "Hindi" => "hi",
        _ => "en",
    }
}

/// The other supported language — what the switch button offers.
pub fn other_language(lang: &str) -> &'static str {
    if lang == "Hindi" {
        "English"
    } else {
        "Hindi"
    }
}
