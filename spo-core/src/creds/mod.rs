//! # Credential Management
//!
//! Storage and retrieval of the credentials used to authenticate against the
//! platform site. Credentials live in the user's `.netrc` file, keyed by the
//! site host, so they stay compatible with other tooling that reads the same
//! file.

pub mod netrc;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use directories::BaseDirs;

/// Represents credentials for a platform site
#[derive(Debug, Clone)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

/// Get the path to the user's `.netrc` file
pub fn get_netrc_path() -> Result<PathBuf> {
  let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("Could not determine home directory"))?;
  Ok(netrc::netrc_path(base_dirs.home_dir()))
}

/// Look up credentials for the given site host in the user's `.netrc`
///
/// Returns `Ok(None)` when the file does not exist or holds no complete entry
/// for the host.
pub fn get_site_credentials(host: &str) -> Result<Option<Credentials>> {
  let path = get_netrc_path()?;
  if !path.exists() {
    return Ok(None);
  }
  netrc::parse_netrc_file(&path, host).context("Failed to read credentials from .netrc")
}

/// Write or update the `.netrc` entry for the given site host
pub fn store_site_credentials(host: &str, username: &str, password: &str) -> Result<()> {
  let path = get_netrc_path()?;
  netrc::write_netrc_entry(&path, host, username, password)
}
