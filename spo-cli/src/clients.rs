//! # Client Creation
//!
//! Centralized construction of authenticated platform clients for the
//! command handlers: site URL resolution, credential lookup from `.netrc`,
//! and the tokio runtime the synchronous handlers drive remote calls with.

use anyhow::{Context, Result, anyhow, bail};
use spo_api::{SpoClient, create_spo_client};
use tokio::runtime::Runtime;
use url::Url;

use crate::consts::ENV_SPO_SITE;

/// Resolve the effective site URL from the `--site` flag or the environment
pub fn resolve_site_url(site_flag: Option<&str>) -> Result<String> {
  let raw = match site_flag {
    Some(site) => site.to_string(),
    None => std::env::var(ENV_SPO_SITE)
      .map_err(|_| anyhow!("No site URL given. Pass --site or set the {ENV_SPO_SITE} environment variable."))?,
  };

  let url = Url::parse(raw.trim()).with_context(|| format!("Invalid site URL '{raw}'"))?;
  match url.scheme() {
    "http" | "https" => {}
    other => bail!("Unsupported site URL scheme '{other}' (expected http or https)"),
  }
  if url.host_str().is_none() {
    bail!("Site URL '{raw}' has no host");
  }

  Ok(raw.trim().trim_end_matches('/').to_string())
}

/// Host component of the site URL, used as the `.netrc` machine name
pub fn site_host(site_url: &str) -> Result<String> {
  let url = Url::parse(site_url).with_context(|| format!("Invalid site URL '{site_url}'"))?;
  url
    .host_str()
    .map(str::to_string)
    .ok_or_else(|| anyhow!("Site URL '{site_url}' has no host"))
}

/// Creates an authenticated platform client using credentials from .netrc
///
/// This function resolves the target site, looks up the credentials stored
/// for its host, and creates a client in one step, with proper error
/// handling.
pub fn create_client_from_netrc(site_flag: Option<&str>) -> Result<SpoClient> {
  let site_url = resolve_site_url(site_flag)?;
  let host = site_host(&site_url)?;

  let credentials = spo_core::creds::get_site_credentials(&host)
    .context("Failed to get site credentials")?
    .ok_or_else(|| anyhow!("No credentials found for '{host}'. Run 'spo creds setup' to configure them."))?;

  create_spo_client(&site_url, &credentials.username, &credentials.password).context("Failed to create platform client")
}

/// Creates a tokio runtime and an authenticated platform client
///
/// This is a convenience function for command handlers that need both a
/// runtime and a client.
pub fn create_runtime_and_client(site_flag: Option<&str>) -> Result<(Runtime, SpoClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_client_from_netrc(site_flag)?;
  Ok((rt, client))
}
