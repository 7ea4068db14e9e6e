//! Character Classes
//!
//! Unicode general-category sets shared by edit admission and blank checks.

use std::sync::LazyLock;

use regex::Regex;

static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Nd}*$").expect("digit class is valid"));

static LETTERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{M}]*$").expect("letter class is valid"));

static ALPHANUMERICS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\p{M}\p{N}]*$").expect("alphanumeric class is valid")
});

static LETTERS_AND_SPACES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\p{M}\p{Zs}\t]*$").expect("letter and space class is valid")
});

static DIGITS_AND_PLUS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{Nd}+]*$").expect("digit and plus class is valid"));

/// Horizontal whitespace: space separators and tab, never line breaks
static SPACES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{Zs}\t]*$").expect("space class is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Decimal digits in any script (Nd)
    Digits,
    /// Letters and combining marks (L, M)
    Letters,
    /// Letters, marks and numbers (L, M, N)
    AlphaNumerics,
    /// Letters, marks, space separators and tab
    LettersAndSpaces,
    /// Decimal digits and `+`
    DigitsAndPlus,
    /// Space separators and tab
    Spaces,
}

impl CharClass {
    fn regex(self) -> &'static Regex {
        match self {
            CharClass::Digits => &*DIGITS_RE,
            CharClass::Letters => &*LETTERS_RE,
            CharClass::AlphaNumerics => &*ALPHANUMERICS_RE,
            CharClass::LettersAndSpaces => &*LETTERS_AND_SPACES_RE,
            CharClass::DigitsAndPlus => &*DIGITS_AND_PLUS_RE,
            CharClass::Spaces => &*SPACES_RE,
        }
    }

    /// True when every char of `text` is in the class. Empty text always is.
    pub fn contains_all(self, text: &str) -> bool {
        self.regex().is_match(text)
    }
}
