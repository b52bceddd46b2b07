//! Shared Utilities
//!
//! Error types and validation helpers used by every configuration stage.

pub mod error;
pub mod validation;
