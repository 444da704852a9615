//! Constants for the spo CLI
//!
//! This module defines environment variable names, error codes, and other
//! static strings used throughout the command handlers.

/// Environment variable for the target site URL
pub const ENV_SPO_SITE: &str = "SPO_SITE";

/// Stable code attached to the structured missing-term-store error
pub const CODE_TERM_STORE_NOT_FOUND: &str = "TERMSTORE_NOT_FOUND";
