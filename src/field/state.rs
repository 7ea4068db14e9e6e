//! Headless Text Field
//!
//! The state a host renders: text, error visibility and the current error
//! message. All decisions are delegated to the admission and validation cores.

use crate::admission::{self, EditProposal};
use crate::validation::{self, ValidationVerdict};

use super::config::FieldConfig;

/// Mask character for secure fields
pub const SECURE_MASK: char = '•';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    config: FieldConfig,
    text: String,
    error_visible: bool,
    error_message: String,
}

impl Default for TextField {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

impl TextField {
    pub fn new(config: FieldConfig) -> Self {
        let error_message = config.default_error_message.clone();
        Self {
            config,
            text: String::new(),
            error_visible: false,
            error_message,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Replace the configuration. The displayed error message resets to
    /// the new default.
    pub fn set_config(&mut self, config: FieldConfig) {
        self.error_message = config.default_error_message.clone();
        self.config = config;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the text programmatically, bypassing admission
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn error_visible(&self) -> bool {
        self.error_visible
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Text as the host should draw it
    pub fn display_text(&self) -> String {
        if self.config.secure {
            self.text.chars().map(|_| SECURE_MASK).collect()
        } else {
            self.text.clone()
        }
    }

    /// Offer an edit replacing `range_length` chars at `range_start`.
    ///
    /// Returns whether the edit was admitted and applied.
    pub fn propose_edit(
        &mut self,
        range_start: usize,
        range_length: usize,
        replacement: &str,
    ) -> bool {
        let proposal = match EditProposal::new(
            self.text.as_str(),
            range_start,
            range_length,
            replacement,
        ) {
            Ok(proposal) => proposal,
            Err(e) => {
                log::warn!("Dropping malformed edit: {}", e);
                return false;
            }
        };

        let accepted = admission::evaluate(&proposal, self.config.mode);
        log::debug!(
            "{} edit {:?} at {}+{}: {}",
            self.config.mode,
            replacement,
            range_start,
            range_length,
            if accepted { "accepted" } else { "rejected" }
        );

        if accepted {
            self.text = proposal.resulting_text();
            if !self.text.is_empty() {
                self.error_visible = false;
            }
        }

        accepted
    }

    /// Type `input` at the end of the text one char at a time.
    ///
    /// Returns the number of keystrokes admitted.
    pub fn type_str(&mut self, input: &str) -> usize {
        let mut buf = [0u8; 4];
        let mut admitted = 0;
        for c in input.chars() {
            let at = self.text.chars().count();
            if self.propose_edit(at, 0, c.encode_utf8(&mut buf)) {
                admitted += 1;
            }
        }
        admitted
    }

    /// Remove the last char, as a backspace would
    pub fn backspace(&mut self) -> bool {
        match self.text.chars().count() {
            0 => false,
            len => self.propose_edit(len - 1, 1, ""),
        }
    }

    /// Check the current text and update the error state to match
    pub fn validate(&mut self) -> ValidationVerdict {
        let verdict = validation::is_valid(&self.text, self.config.category);
        self.error_visible = verdict.shows_error();
        self.error_message = verdict
            .message_or(&self.config.default_error_message)
            .to_string();
        verdict
    }
}
