//! Character Admission Policy
//!
//! Decides, per keystroke or paste, whether a proposed edit may be applied.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::proposal::EditProposal;
use crate::charset::CharClass;

/// Maximum resulting length under [`ValidationMode::NumbersMaxLen4`]
pub const MAX_LEN4: usize = 4;

/// Which characters a field admits while being edited
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum ValidationMode {
    #[default]
    #[serde(rename = "none")]
    NoValidation,
    #[serde(rename = "numbers")]
    NumbersOnly,
    #[serde(rename = "alphabetic")]
    AlphabeticOnly,
    #[serde(rename = "alphanumeric")]
    AlphaNumeric,
    #[serde(rename = "numbers-max-len4")]
    NumbersMaxLen4,
    #[serde(rename = "alphabetic-words")]
    AlphabeticSingleInterWordSpace,
    #[serde(rename = "numbers-plus")]
    NumbersPlusSign,
}

impl ValidationMode {
    pub const ALL: [ValidationMode; 7] = [
        ValidationMode::NoValidation,
        ValidationMode::NumbersOnly,
        ValidationMode::AlphabeticOnly,
        ValidationMode::AlphaNumeric,
        ValidationMode::NumbersMaxLen4,
        ValidationMode::AlphabeticSingleInterWordSpace,
        ValidationMode::NumbersPlusSign,
    ];

    /// Map a stored integer code to a mode. Unknown codes disable validation.
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            1 => ValidationMode::NumbersOnly,
            2 => ValidationMode::AlphabeticOnly,
            3 => ValidationMode::AlphaNumeric,
            4 => ValidationMode::NumbersMaxLen4,
            5 => ValidationMode::AlphabeticSingleInterWordSpace,
            6 => ValidationMode::NumbersPlusSign,
            _ => ValidationMode::NoValidation,
        }
    }

    pub fn raw(self) -> i64 {
        match self {
            ValidationMode::NoValidation => 0,
            ValidationMode::NumbersOnly => 1,
            ValidationMode::AlphabeticOnly => 2,
            ValidationMode::AlphaNumeric => 3,
            ValidationMode::NumbersMaxLen4 => 4,
            ValidationMode::AlphabeticSingleInterWordSpace => 5,
            ValidationMode::NumbersPlusSign => 6,
        }
    }

    /// Name used in form files and on the command line
    pub fn name(self) -> &'static str {
        match self {
            ValidationMode::NoValidation => "none",
            ValidationMode::NumbersOnly => "numbers",
            ValidationMode::AlphabeticOnly => "alphabetic",
            ValidationMode::AlphaNumeric => "alphanumeric",
            ValidationMode::NumbersMaxLen4 => "numbers-max-len4",
            ValidationMode::AlphabeticSingleInterWordSpace => "alphabetic-words",
            ValidationMode::NumbersPlusSign => "numbers-plus",
        }
    }

    /// Characters a replacement fragment may contain, `None` for any
    fn char_class(self) -> Option<CharClass> {
        match self {
            ValidationMode::NoValidation => None,
            ValidationMode::NumbersOnly | ValidationMode::NumbersMaxLen4 => {
                Some(CharClass::Digits)
            }
            ValidationMode::AlphabeticOnly => Some(CharClass::Letters),
            ValidationMode::AlphaNumeric => Some(CharClass::AlphaNumerics),
            ValidationMode::AlphabeticSingleInterWordSpace => {
                Some(CharClass::LettersAndSpaces)
            }
            ValidationMode::NumbersPlusSign => Some(CharClass::DigitsAndPlus),
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(raw) = s.parse::<i64>() {
            return Ok(Self::from_raw(raw));
        }

        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|m| m.name()).collect();
                format!(
                    "unknown validation mode '{}', expected one of: {}",
                    s,
                    names.join(", ")
                )
            })
    }
}

/// Decide whether `proposal` may be applied to a field in `mode`.
///
/// Only the replacement fragment is checked against the mode's alphabet.
/// [`ValidationMode::NumbersMaxLen4`] also bounds the length of the
/// resulting text. Deletions are always admitted.
pub fn evaluate(proposal: &EditProposal, mode: ValidationMode) -> bool {
    debug_assert!(
        proposal.is_well_formed(),
        "edit range {}+{} outside text of length {}",
        proposal.range_start,
        proposal.range_length,
        proposal.text_length()
    );

    if proposal.is_deletion() {
        return true;
    }

    let replacement = proposal.replacement.as_str();
    if let Some(class) = mode.char_class()
        && !class.contains_all(replacement)
    {
        return false;
    }

    match mode {
        ValidationMode::NumbersMaxLen4 => proposal.resulting_length() <= MAX_LEN4,
        ValidationMode::AlphabeticSingleInterWordSpace => {
            // No leading space and no two spaces in a row
            !(replacement == " "
                && (proposal.current_text.ends_with(' ') || proposal.range_start == 0))
        }
        _ => true,
    }
}
