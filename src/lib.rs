//! # Tasker Configuration Library
//!
//! This crate assembles the startup configuration of the Tasker backend:
//! - `.env` style override files layered over the process environment
//! - `TASKER_` prefixed variables mapped onto a typed schema
//! - Built-in defaults for the optional observability and cron sections
//! - Field-level validation reported with dotted field paths
//!
//! ## Module Structure
//!
//! ```text
//! tasker/
//! +-- config/     Configuration pipeline and schema
//! +-- shared/     Error types and validation helpers
//! +-- telemetry   Tracing subscriber setup
//! ```

// Configuration module
pub mod config;

// Shared utilities
pub mod shared;

// Telemetry and observability
pub mod telemetry;
