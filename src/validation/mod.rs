//! Field Validation
//!
//! Clean separation of on-submit validation from editing and presentation.

pub mod email;
pub mod engine;

pub use email::{is_blank, is_valid_email};
pub use engine::{ContentCategory, ValidationVerdict, is_valid};

// Re-export message constants
pub use engine::{EMAIL_INVALID_MESSAGE, EMAIL_MISSING_MESSAGE};
