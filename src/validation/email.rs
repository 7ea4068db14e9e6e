//! Text Shape Helpers
//!
//! Blank detection and a conservative e-mail shape check.

use std::sync::LazyLock;

use regex::Regex;

use crate::charset::CharClass;

/// Real-world e-mail shape, not full RFC 5322
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$")
        .expect("e-mail pattern is valid")
});

/// True when `text` holds nothing but spaces and tabs.
///
/// Line breaks are content, so `"\n"` is not blank.
pub fn is_blank(text: &str) -> bool {
    CharClass::Spaces.contains_all(text)
}

/// True when `text` looks like `local@domain.tld`
pub fn is_valid_email(text: &str) -> bool {
    if is_blank(text) {
        return false;
    }

    EMAIL_RE.is_match(text)
}
