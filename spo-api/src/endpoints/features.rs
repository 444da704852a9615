//! # Feature Endpoints
//!
//! Platform API endpoint implementations for feature activation at web and
//! site-collection scope. The scope chosen by the caller decides which
//! endpoint is used; the platform owns re-activation semantics.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use uuid::Uuid;

use crate::client::SpoClient;
use crate::models::{Feature, FeatureActivationRequest};

impl SpoClient {
  /// Activate a feature on the web the site URL points at
  pub async fn activate_web_feature(&self, feature_id: Uuid, force: bool, sandboxed: bool) -> Result<Feature> {
    self.activate_feature("web", feature_id, force, sandboxed).await
  }

  /// Activate a feature on the whole site collection
  pub async fn activate_site_feature(&self, feature_id: Uuid, force: bool, sandboxed: bool) -> Result<Feature> {
    self.activate_feature("site", feature_id, force, sandboxed).await
  }

  async fn activate_feature(&self, scope: &str, feature_id: Uuid, force: bool, sandboxed: bool) -> Result<Feature> {
    let url = format!("{}/_api/{}/features/add", self.base_url, scope);

    let payload = FeatureActivationRequest {
      feature_id,
      force,
      sandboxed,
    };

    let response = self
      .client
      .post(&url)
      .basic_auth(&self.auth.username, Some(&self.auth.app_token))
      .json(&payload)
      .send()
      .await
      .context("Failed to send feature activation request")?;

    match response.status() {
      StatusCode::OK | StatusCode::CREATED => {
        let feature = response
          .json::<Feature>()
          .await
          .context("Failed to parse feature activation response")?;
        Ok(feature)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your site credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!(
        "Feature {} is not installed at {} scope",
        feature_id,
        scope
      )),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        response.status(),
        response.text().await.unwrap_or_default()
      )),
    }
  }
}
