//! SSTextField
//!
//! Headless validation core for a text-input control.
//!
//! This library provides:
//! - Per-edit character admission by validation mode
//! - On-demand field validation by content category
//! - A host-facing field model and TOML-defined forms
//! - Configuration and a command-line host

pub mod admission;
pub mod charset;
pub mod cli;
pub mod config;
pub mod field;
pub mod form;
pub mod validation;

// Re-exports for clean public API
pub use admission::{EditProposal, ValidationMode, evaluate};
pub use config::Config;
pub use field::{FieldConfig, TextField};
pub use form::{Form, FormOutcome, FormRegistry};
pub use validation::{ContentCategory, ValidationVerdict, is_valid};
