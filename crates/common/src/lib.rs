//! GraceNav Common Utilities
//!
//! Shared infrastructure for all GraceNav crates:
//! - Error types and result aliases
//! - Menu option defaults and normalization
//! - Clock and cadence utilities for timer scheduling and history decay
//! - Tracing/logging initialization

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
