use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents credentials used for platform API requests
#[derive(Clone)]
pub struct SpoAuth {
  pub username: String,
  pub app_token: String,
}

/// Represents an activated feature as returned by the platform
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
  pub id: Uuid,
  pub display_name: Option<String>,
}

/// Request payload for feature activation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureActivationRequest {
  pub feature_id: Uuid,
  pub force: bool,
  pub sandboxed: bool,
}

/// Represents a taxonomy term store
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermStore {
  pub id: String,
  pub name: String,
  pub default_language: Option<u32>,
}

/// Represents a term set summary inside a term group
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermSetSummary {
  pub id: String,
  pub name: String,
}

/// Represents a taxonomy term group
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermGroup {
  pub id: String,
  pub name: String,
  pub description: Option<String>,
  #[serde(default)]
  pub term_sets: Vec<TermSetSummary>,
}

/// Request payload for a bulk term import
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermImportRequest {
  pub lines: Vec<String>,
  pub lcid: u32,
  pub delimiter: String,
  pub synchronize_deletions: bool,
}

/// Summary returned by the platform after a bulk term import
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermImportSummary {
  pub groups_created: u32,
  pub term_sets_created: u32,
  pub terms_created: u32,
  #[serde(default)]
  pub terms_deleted: u32,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_term_group_deserialization() {
    let json = json!({
        "id": "2b19a9e0-07cc-4e12-9fd5-7a4f8e2f0f21",
        "name": "Company",
        "description": "Corporate taxonomy",
        "termSets": [
            { "id": "c1d7f3a2-9a30-4b6a-8d49-5a2f7e1c3344", "name": "Locations" }
        ]
    });

    let group: TermGroup = serde_json::from_value(json).unwrap();

    assert_eq!(group.name, "Company");
    assert_eq!(group.description, Some("Corporate taxonomy".to_string()));
    assert_eq!(group.term_sets.len(), 1);
    assert_eq!(group.term_sets[0].name, "Locations");
  }

  #[test]
  fn test_term_group_without_term_sets() {
    let json = json!({
        "id": "2b19a9e0-07cc-4e12-9fd5-7a4f8e2f0f21",
        "name": "Company",
        "description": null
    });

    let group: TermGroup = serde_json::from_value(json).unwrap();

    assert_eq!(group.name, "Company");
    assert!(group.description.is_none());
    assert!(group.term_sets.is_empty());
  }

  #[test]
  fn test_feature_activation_request_serialization() {
    let request = FeatureActivationRequest {
      feature_id: Uuid::parse_str("d54d4b40-7d10-4a22-ab8d-3bb45b2222c2").unwrap(),
      force: true,
      sandboxed: false,
    };

    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(
      json,
      json!({
          "featureId": "d54d4b40-7d10-4a22-ab8d-3bb45b2222c2",
          "force": true,
          "sandboxed": false
      })
    );
  }

  #[test]
  fn test_import_summary_defaults_deleted_count() {
    let json = json!({
        "groupsCreated": 1,
        "termSetsCreated": 1,
        "termsCreated": 3
    });

    let summary: TermImportSummary = serde_json::from_value(json).unwrap();

    assert_eq!(summary.terms_created, 3);
    assert_eq!(summary.terms_deleted, 0);
  }
}
