use log::warn;
use regex::Regex;

/// `value | regex('...')`: whether a field value matches a pattern.
///
/// An invalid pattern never matches, so a custom rule built on it rejects
/// every value instead of aborting validation.
pub fn regex_filter(value: &str, pattern: &str) -> bool {
    Regex::new(pattern).map(|re| re.is_match(value)).unwrap_or_else(|err| {
        warn!("Invalid regex '{pattern}' in custom rule: {err}");
        false
    })
}

/// Counts Unicode scalar values, matching how the validator measures length.
pub fn char_count(val: &str) -> usize {
    val.chars().count()
}
