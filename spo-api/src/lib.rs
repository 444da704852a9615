//! # Platform API Client
//!
//! REST client for the remote collaboration platform consumed by the spo
//! CLI. Covers feature activation at web and site-collection scope, taxonomy
//! term store and term group retrieval, and bulk term import, using basic
//! authentication with per-site credentials.

mod client;
mod consts;
mod endpoints;
pub mod models;

// Re-export the client
pub use client::{SpoClient, create_spo_client};
// Re-export models
pub use models::{Feature, SpoAuth, TermGroup, TermImportRequest, TermImportSummary, TermSetSummary, TermStore};
