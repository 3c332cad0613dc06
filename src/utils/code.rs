//! Login code / OTP extraction.

use once_cell::sync::Lazy;
use regex::Regex;

static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{5,6})\b").expect("valid regex"));

/// Extract a 5 or 6 digit code from message text.
///
/// Returns the first standalone match, e.g. the login code in
/// "Login code: 12345. Do not give this code to anyone".
pub fn extract_code(text: &str) -> Option<&str> {
    if text.is_empty() {
        return None;
    }
    CODE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
