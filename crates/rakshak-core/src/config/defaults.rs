//! Default value functions used by serde for config deserialization.

pub fn default_name() -> String {
    "Rakshak".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_language() -> String {
    "English".to_string()
}

pub fn default_true() -> bool {
    true
}

pub fn default_gemini_model() -> String {
    "gemini-2.0-flash".to_string()
}

pub fn default_safe_browsing_client_id() -> String {
    "rakshak-bot".to_string()
}
