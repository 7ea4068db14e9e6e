//! Headless Field Model
//!
//! Configuration and host-facing state for a single text field.

pub mod config;
pub mod state;

pub use config::{Capitalization, DEFAULT_ERROR_MESSAGE, FieldConfig, KeyboardType};
pub use state::{SECURE_MASK, TextField};
