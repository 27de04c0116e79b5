//! Shared types, error taxonomy, and data model for the explore orchestrator.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
