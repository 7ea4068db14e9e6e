//! Edit Proposals
//!
//! A proposed change to a field's text: replace a char range with a fragment.

use std::fmt;

/// A single user-initiated edit, described before it is applied.
///
/// Offsets and lengths count `char`s, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditProposal {
    pub current_text: String,
    pub range_start: usize,
    pub range_length: usize,
    pub replacement: String,
}

/// The range of an [`EditProposal`] falls outside its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeError {
    pub range_start: usize,
    pub range_length: usize,
    pub text_length: usize,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "edit range {}..{} is outside text of length {}",
            self.range_start,
            self.range_start.saturating_add(self.range_length),
            self.text_length
        )
    }
}

impl std::error::Error for RangeError {}

impl EditProposal {
    /// Build a proposal, checking that the range lies within `current_text`
    pub fn new(
        current_text: impl Into<String>,
        range_start: usize,
        range_length: usize,
        replacement: impl Into<String>,
    ) -> Result<Self, RangeError> {
        let proposal = Self {
            current_text: current_text.into(),
            range_start,
            range_length,
            replacement: replacement.into(),
        };

        if proposal.is_well_formed() {
            Ok(proposal)
        } else {
            Err(RangeError {
                range_start,
                range_length,
                text_length: proposal.text_length(),
            })
        }
    }

    /// Proposal that appends `replacement` at the end of `current_text`
    pub fn append(current_text: impl Into<String>, replacement: impl Into<String>) -> Self {
        let current_text = current_text.into();
        let end = current_text.chars().count();
        Self {
            current_text,
            range_start: end,
            range_length: 0,
            replacement: replacement.into(),
        }
    }

    /// Length of the current text in chars
    pub fn text_length(&self) -> usize {
        self.current_text.chars().count()
    }

    pub fn is_well_formed(&self) -> bool {
        self.range_start
            .checked_add(self.range_length)
            .is_some_and(|end| end <= self.text_length())
    }

    pub fn is_deletion(&self) -> bool {
        self.replacement.is_empty()
    }

    /// The text the edit would produce.
    ///
    /// A range reaching past the end of the text is clamped to it.
    pub fn resulting_text(&self) -> String {
        let start = byte_offset(&self.current_text, self.range_start);
        let end = byte_offset(
            &self.current_text,
            self.range_start.saturating_add(self.range_length),
        );

        let mut result =
            String::with_capacity(self.current_text.len() - (end - start) + self.replacement.len());
        result.push_str(&self.current_text[..start]);
        result.push_str(&self.replacement);
        result.push_str(&self.current_text[end..]);
        result
    }

    /// Char count of [`Self::resulting_text`], without building it
    pub fn resulting_length(&self) -> usize {
        let len = self.text_length();
        let start = self.range_start.min(len);
        let end = self.range_start.saturating_add(self.range_length).min(len);
        len - (end - start) + self.replacement.chars().count()
    }
}

/// Byte offset of the `char_index`-th char, clamped to the end of `text`
fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}
