//! Character Admission
//!
//! Per-edit accept/reject decisions, kept apart from field state and hosts.

pub mod policy;
pub mod proposal;

pub use policy::{MAX_LEN4, ValidationMode, evaluate};
pub use proposal::{EditProposal, RangeError};
