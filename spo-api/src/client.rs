use anyhow::{Context, Result};
use reqwest::Client;

use crate::consts::USER_AGENT;
use crate::models::SpoAuth;

/// Represents a client for the platform REST API of one site
pub struct SpoClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: SpoAuth,
}

impl SpoClient {
  /// Create a new platform client for the given site URL
  pub fn new(site_url: &str, auth: SpoAuth) -> Result<Self> {
    let client = Client::builder()
      .user_agent(USER_AGENT)
      .build()
      .context("Failed to build HTTP client")?;
    Ok(Self {
      client,
      base_url: site_url.trim_end_matches('/').to_string(),
      auth,
    })
  }

  /// Test the connection by fetching the root web of the site
  pub async fn test_connection(&self) -> Result<bool> {
    let url = format!("{}/_api/web", self.base_url);

    let response = self
      .client
      .get(&url)
      .basic_auth(&self.auth.username, Some(&self.auth.app_token))
      .send()
      .await
      .context("Failed to connect to the site")?;

    Ok(response.status().is_success())
  }
}

/// Create a platform client from credentials
pub fn create_spo_client(site_url: &str, username: &str, app_token: &str) -> Result<SpoClient> {
  let auth = SpoAuth {
    username: username.to_string(),
    app_token: app_token.to_string(),
  };

  SpoClient::new(site_url, auth)
}
