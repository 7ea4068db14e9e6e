//! Field Validation Engine
//!
//! On-demand "is this value acceptable" checks, separated from editing and hosts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::email::{is_blank, is_valid_email};

pub const EMAIL_MISSING_MESSAGE: &str = "Please enter your e-mail";
pub const EMAIL_INVALID_MESSAGE: &str = "Please enter valid e-mail";

/// What kind of content a field holds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentCategory {
    #[default]
    Unspecified,
    Name,
    Email,
    Username,
    Password,
    PhoneNumber,
}

impl ContentCategory {
    pub const ALL: [ContentCategory; 6] = [
        ContentCategory::Unspecified,
        ContentCategory::Name,
        ContentCategory::Email,
        ContentCategory::Username,
        ContentCategory::Password,
        ContentCategory::PhoneNumber,
    ];

    /// Map a stored integer code to a category. Unknown codes are unspecified.
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            1 => ContentCategory::Name,
            2 => ContentCategory::Email,
            3 => ContentCategory::Username,
            4 => ContentCategory::Password,
            5 => ContentCategory::PhoneNumber,
            _ => ContentCategory::Unspecified,
        }
    }

    pub fn raw(self) -> i64 {
        match self {
            ContentCategory::Unspecified => 0,
            ContentCategory::Name => 1,
            ContentCategory::Email => 2,
            ContentCategory::Username => 3,
            ContentCategory::Password => 4,
            ContentCategory::PhoneNumber => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ContentCategory::Unspecified => "unspecified",
            ContentCategory::Name => "name",
            ContentCategory::Email => "email",
            ContentCategory::Username => "username",
            ContentCategory::Password => "password",
            ContentCategory::PhoneNumber => "phone-number",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(raw) = s.parse::<i64>() {
            return Ok(Self::from_raw(raw));
        }

        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown content category '{}'", s))
    }
}

/// Outcome of validating one field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationVerdict {
    pub is_valid: bool,
    /// Message chosen by the validator. `None` means the caller's own
    /// configured message applies.
    pub error_message: Option<String>,
}

impl ValidationVerdict {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            error_message: None,
        }
    }

    pub fn invalid_with(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
        }
    }

    /// Whether the host should show its error indicator
    pub fn shows_error(&self) -> bool {
        !self.is_valid
    }

    /// The message to display, falling back to the caller's default
    pub fn message_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.error_message.as_deref().unwrap_or(default)
    }
}

/// Validate `text` for a field of the given category.
///
/// E-mail fields reject blank text; every other category only rejects the
/// empty string, so whitespace-only values pass.
pub fn is_valid(text: &str, category: ContentCategory) -> ValidationVerdict {
    match category {
        ContentCategory::Email => {
            if is_blank(text) {
                ValidationVerdict::invalid_with(EMAIL_MISSING_MESSAGE)
            } else if !is_valid_email(text) {
                ValidationVerdict::invalid_with(EMAIL_INVALID_MESSAGE)
            } else {
                ValidationVerdict::valid()
            }
        }
        ContentCategory::Name
        | ContentCategory::Username
        | ContentCategory::Password
        | ContentCategory::PhoneNumber
        | ContentCategory::Unspecified => {
            if text.is_empty() {
                ValidationVerdict::invalid()
            } else {
                ValidationVerdict::valid()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_helpers() {
        let ok = ValidationVerdict::valid();
        assert!(!ok.shows_error());
        assert_eq!(ok.message_or("Mandatory"), "Mandatory");

        let bad = ValidationVerdict::invalid_with("Nope");
        assert!(bad.shows_error());
        assert_eq!(bad.message_or("Mandatory"), "Nope");
    }

    #[test]
    fn test_category_raw_values() {
        for category in ContentCategory::ALL {
            assert_eq!(ContentCategory::from_raw(category.raw()), category);
        }
        assert_eq!(ContentCategory::from_raw(99), ContentCategory::Unspecified);
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(
            "phone-number".parse::<ContentCategory>(),
            Ok(ContentCategory::PhoneNumber)
        );
        assert_eq!("2".parse::<ContentCategory>(), Ok(ContentCategory::Email));
        assert!("address".parse::<ContentCategory>().is_err());
    }

    #[test]
    fn test_non_email_categories_check_emptiness() {
        for category in ContentCategory::ALL {
            if category == ContentCategory::Email {
                continue;
            }
            assert!(!is_valid("", category).is_valid, "{category}");
            assert!(is_valid(" ", category).is_valid, "{category}");
            assert_eq!(is_valid("", category).error_message, None);
        }
    }
}
