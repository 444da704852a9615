//! # Spo Core Library
//!
//! Shared plumbing for the spo command-line tool: `.netrc`-backed credential
//! storage for the platform site, and colored terminal output helpers used by
//! every command handler.

pub mod creds;
pub mod output;

// Re-export the types handlers reach for most often
pub use creds::{Credentials, get_netrc_path, get_site_credentials, store_site_credentials};
pub use output::{ColorMode, format_command, format_site, print_error, print_info, print_success, print_warning};
