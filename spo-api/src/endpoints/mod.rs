//! # Platform API Endpoints
//!
//! Organized endpoint implementations for the platform resource areas used
//! by the spo CLI: feature activation and taxonomy operations.

pub mod features;
pub mod taxonomy;
