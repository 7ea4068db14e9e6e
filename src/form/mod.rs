//! Forms
//!
//! Named groups of fields loaded from TOML, and the submit flow that
//! aggregates their verdicts.

pub mod registry;
pub mod schema;
pub mod session;

pub use registry::{BUILTIN_FORM, FormRegistry};
pub use schema::{FieldDef, FormDef, FormFile};
pub use session::{FieldReport, Form, FormOutcome};
