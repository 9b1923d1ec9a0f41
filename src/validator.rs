//! Reference implementation of the string validator under test.
//!
//! A valid string is one or more lowercase ASCII letters immediately followed by
//! one or more ASCII digits, and nothing else.

use regex::Regex;
use std::sync::OnceLock;

/// Pattern shared with the JavaScript implementation shipped in `page/script.js`.
pub const PATTERN: &str = r"^[a-z]+[0-9]+$";

fn pattern() -> &'static Regex {
    static PATTERN_RE: OnceLock<Regex> = OnceLock::new();
    PATTERN_RE.get_or_init(|| Regex::new(PATTERN).expect("static pattern compiles"))
}

/// Returns true iff `input` is lowercase letters followed by digits.
pub fn valid_string(input: &str) -> bool {
    pattern().is_match(input)
}
