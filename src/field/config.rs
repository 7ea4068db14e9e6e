//! Field Configuration
//!
//! Per-field settings a host chooses once and may change later.

use serde::{Deserialize, Serialize};

use crate::admission::ValidationMode;
use crate::validation::ContentCategory;

pub const DEFAULT_PLACEHOLDER: &str = "Placeholder";
pub const DEFAULT_ERROR_MESSAGE: &str = "Mandatory";

/// Automatic capitalization hint for the host's input method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capitalization {
    #[default]
    None,
    Words,
    Sentences,
    AllCharacters,
}

impl Capitalization {
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            1 => Capitalization::Words,
            2 => Capitalization::Sentences,
            3 => Capitalization::AllCharacters,
            _ => Capitalization::None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Capitalization::None => "none",
            Capitalization::Words => "words",
            Capitalization::Sentences => "sentences",
            Capitalization::AllCharacters => "all-characters",
        }
    }
}

/// Keyboard layout hint for the host's input method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyboardType {
    #[default]
    Default,
    NumberPad,
    NamePhonePad,
    EmailAddress,
    PhonePad,
    DecimalPad,
}

impl KeyboardType {
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            1 => KeyboardType::NumberPad,
            2 => KeyboardType::NamePhonePad,
            3 => KeyboardType::EmailAddress,
            4 => KeyboardType::PhonePad,
            5 => KeyboardType::DecimalPad,
            _ => KeyboardType::Default,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            KeyboardType::Default => "default",
            KeyboardType::NumberPad => "number-pad",
            KeyboardType::NamePhonePad => "name-phone-pad",
            KeyboardType::EmailAddress => "email-address",
            KeyboardType::PhonePad => "phone-pad",
            KeyboardType::DecimalPad => "decimal-pad",
        }
    }
}

/// Everything that governs one field's editing and validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    pub placeholder: String,
    pub default_error_message: String,
    pub mode: ValidationMode,
    pub category: ContentCategory,
    /// Obscure the text when displayed
    pub secure: bool,
    pub capitalization: Capitalization,
    pub keyboard: KeyboardType,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            default_error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            mode: ValidationMode::default(),
            category: ContentCategory::default(),
            secure: false,
            capitalization: Capitalization::default(),
            keyboard: KeyboardType::default(),
        }
    }
}

impl FieldConfig {
    pub fn new(mode: ValidationMode, category: ContentCategory) -> Self {
        Self {
            mode,
            category,
            ..Self::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.default_error_message = message.into();
        self
    }

    pub fn secure(mut self) -> Self {
        self.secure = true;
        self
    }
}
