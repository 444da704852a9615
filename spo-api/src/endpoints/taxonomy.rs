//! # Taxonomy Endpoints
//!
//! Platform API endpoint implementations for the taxonomy service: term
//! store resolution, term group retrieval, and bulk term import. An absent
//! store or group is data here (`Ok(None)`), not a failure; the command layer
//! decides what to do with it. The platform owns the interpretation of the
//! delimited term lines handed to the import routine.

use anyhow::{Context, Result};
use reqwest::{RequestBuilder, StatusCode};
use tracing::debug;

use crate::client::SpoClient;
use crate::models::{TermGroup, TermImportRequest, TermImportSummary, TermStore};

impl SpoClient {
  /// Get the default term store of the site collection
  pub async fn get_default_term_store(&self) -> Result<Option<TermStore>> {
    let url = format!("{}/_api/taxonomy/termstore", self.base_url);
    let request = self.client.get(&url);
    self.fetch_optional(request, "term store").await
  }

  /// Get a term store by its exact name
  pub async fn get_term_store_by_name(&self, name: &str) -> Result<Option<TermStore>> {
    let url = format!("{}/_api/taxonomy/termstores", self.base_url);
    let request = self.client.get(&url).query(&[("name", name)]);
    self.fetch_optional(request, "term store").await
  }

  /// Get a term group by name from the given term store
  pub async fn get_term_group(&self, store_id: &str, group_name: &str) -> Result<Option<TermGroup>> {
    let url = format!("{}/_api/taxonomy/termstores/{}/groups", self.base_url, store_id);
    let request = self.client.get(&url).query(&[("name", group_name)]);
    self.fetch_optional(request, "term group").await
  }

  /// Import delimited term lines into the default term store
  pub async fn import_terms(&self, request: &TermImportRequest) -> Result<TermImportSummary> {
    let url = format!("{}/_api/taxonomy/import", self.base_url);
    self.post_import(&url, request).await
  }

  /// Import delimited term lines into the given term store
  pub async fn import_terms_to_store(&self, store_id: &str, request: &TermImportRequest) -> Result<TermImportSummary> {
    let url = format!("{}/_api/taxonomy/termstores/{}/import", self.base_url, store_id);
    self.post_import(&url, request).await
  }

  /// Issue a GET where 404 means "absent" rather than an error
  async fn fetch_optional<T: serde::de::DeserializeOwned>(
    &self,
    request: RequestBuilder,
    what: &str,
  ) -> Result<Option<T>> {
    let response = request
      .basic_auth(&self.auth.username, Some(&self.auth.app_token))
      .send()
      .await
      .with_context(|| format!("Failed to fetch {what}"))?;

    match response.status() {
      StatusCode::OK => {
        let value = response
          .json::<T>()
          .await
          .with_context(|| format!("Failed to parse {what} response"))?;
        Ok(Some(value))
      }
      StatusCode::NOT_FOUND => {
        debug!("Platform reported no matching {what}");
        Ok(None)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your site credentials."
      )),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        response.status(),
        response.text().await.unwrap_or_default()
      )),
    }
  }

  async fn post_import(&self, url: &str, request: &TermImportRequest) -> Result<TermImportSummary> {
    let response = self
      .client
      .post(url)
      .basic_auth(&self.auth.username, Some(&self.auth.app_token))
      .json(request)
      .send()
      .await
      .context("Failed to send term import request")?;

    match response.status() {
      StatusCode::OK => {
        let summary = response
          .json::<TermImportSummary>()
          .await
          .context("Failed to parse term import response")?;
        Ok(summary)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your site credentials."
      )),
      StatusCode::BAD_REQUEST => Err(anyhow::anyhow!(
        "The platform rejected the term input: {}",
        response.text().await.unwrap_or_default()
      )),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        response.status(),
        response.text().await.unwrap_or_default()
      )),
    }
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{basic_auth, body_json, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_spo_client;
  use crate::models::TermImportRequest;

  #[tokio::test]
  async fn test_default_term_store_lookup() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_spo_client(&mock_server.uri(), "admin", "app-token")?;

    Mock::given(method("GET"))
      .and(path("/_api/taxonomy/termstore"))
      .and(basic_auth("admin", "app-token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "id": "745b6f2a-8a5e-4f53-9e3b-0c5d1c4a8b11",
          "name": "Managed Metadata Service",
          "defaultLanguage": 1033
      })))
      .mount(&mock_server)
      .await;

    let store = client.get_default_term_store().await?.expect("store should be found");
    assert_eq!(store.name, "Managed Metadata Service");
    assert_eq!(store.default_language, Some(1033));

    Ok(())
  }

  #[tokio::test]
  async fn test_named_term_store_lookup_uses_exact_name() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_spo_client(&mock_server.uri(), "admin", "app-token")?;

    Mock::given(method("GET"))
      .and(path("/_api/taxonomy/termstores"))
      .and(query_param("name", "Managed Metadata Service"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "id": "745b6f2a-8a5e-4f53-9e3b-0c5d1c4a8b11",
          "name": "Managed Metadata Service"
      })))
      .mount(&mock_server)
      .await;

    let store = client
      .get_term_store_by_name("Managed Metadata Service")
      .await?
      .expect("store should be found");
    assert_eq!(store.id, "745b6f2a-8a5e-4f53-9e3b-0c5d1c4a8b11");

    Ok(())
  }

  #[tokio::test]
  async fn test_missing_term_store_is_none() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_spo_client(&mock_server.uri(), "admin", "app-token")?;

    Mock::given(method("GET"))
      .and(path("/_api/taxonomy/termstores"))
      .and(query_param("name", "Nonexistent Store"))
      .respond_with(ResponseTemplate::new(404))
      .mount(&mock_server)
      .await;

    assert!(client.get_term_store_by_name("Nonexistent Store").await?.is_none());

    Ok(())
  }

  #[tokio::test]
  async fn test_term_group_lookup() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_spo_client(&mock_server.uri(), "admin", "app-token")?;

    Mock::given(method("GET"))
      .and(path("/_api/taxonomy/termstores/745b6f2a/groups"))
      .and(query_param("name", "Company"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "id": "2b19a9e0-07cc-4e12-9fd5-7a4f8e2f0f21",
          "name": "Company",
          "description": "Corporate taxonomy",
          "termSets": [
              { "id": "c1d7f3a2-9a30-4b6a-8d49-5a2f7e1c3344", "name": "Locations" }
          ]
      })))
      .mount(&mock_server)
      .await;

    let group = client
      .get_term_group("745b6f2a", "Company")
      .await?
      .expect("group should be found");
    assert_eq!(group.name, "Company");
    assert_eq!(group.term_sets.len(), 1);

    Ok(())
  }

  #[tokio::test]
  async fn test_missing_term_group_is_none() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_spo_client(&mock_server.uri(), "admin", "app-token")?;

    Mock::given(method("GET"))
      .and(path("/_api/taxonomy/termstores/745b6f2a/groups"))
      .and(query_param("name", "Nope"))
      .respond_with(ResponseTemplate::new(404))
      .mount(&mock_server)
      .await;

    assert!(client.get_term_group("745b6f2a", "Nope").await?.is_none());

    Ok(())
  }

  /// The import call must hand the lines, locale, delimiter, and deletion
  /// flag to the platform exactly as given.
  #[tokio::test]
  async fn test_import_passes_lines_through_verbatim() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_spo_client(&mock_server.uri(), "admin", "app-token")?;

    Mock::given(method("POST"))
      .and(path("/_api/taxonomy/import"))
      .and(basic_auth("admin", "app-token"))
      .and(body_json(serde_json::json!({
          "lines": ["Company|Locations|Stockholm"],
          "lcid": 1033,
          "delimiter": "|",
          "synchronizeDeletions": false
      })))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "groupsCreated": 1,
          "termSetsCreated": 1,
          "termsCreated": 1
      })))
      .mount(&mock_server)
      .await;

    let request = TermImportRequest {
      lines: vec!["Company|Locations|Stockholm".to_string()],
      lcid: 1033,
      delimiter: "|".to_string(),
      synchronize_deletions: false,
    };

    let summary = client.import_terms(&request).await?;
    assert_eq!(summary.terms_created, 1);
    assert_eq!(summary.terms_deleted, 0);

    Ok(())
  }

  #[tokio::test]
  async fn test_import_to_named_store_targets_store_endpoint() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_spo_client(&mock_server.uri(), "admin", "app-token")?;

    Mock::given(method("POST"))
      .and(path("/_api/taxonomy/termstores/745b6f2a/import"))
      .and(body_json(serde_json::json!({
          "lines": ["Company;Departments;Finance"],
          "lcid": 1053,
          "delimiter": ";",
          "synchronizeDeletions": true
      })))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "groupsCreated": 0,
          "termSetsCreated": 0,
          "termsCreated": 1,
          "termsDeleted": 2
      })))
      .mount(&mock_server)
      .await;

    let request = TermImportRequest {
      lines: vec!["Company;Departments;Finance".to_string()],
      lcid: 1053,
      delimiter: ";".to_string(),
      synchronize_deletions: true,
    };

    let summary = client.import_terms_to_store("745b6f2a", &request).await?;
    assert_eq!(summary.terms_deleted, 2);

    Ok(())
  }

  #[tokio::test]
  async fn test_import_rejected_input() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_spo_client(&mock_server.uri(), "admin", "app-token")?;

    Mock::given(method("POST"))
      .and(path("/_api/taxonomy/import"))
      .respond_with(ResponseTemplate::new(400).set_body_string("line 1: empty term label"))
      .mount(&mock_server)
      .await;

    let request = TermImportRequest {
      lines: vec!["Company||".to_string()],
      lcid: 1033,
      delimiter: "|".to_string(),
      synchronize_deletions: false,
    };

    let result = client.import_terms(&request).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("rejected the term input"));

    Ok(())
  }
}
