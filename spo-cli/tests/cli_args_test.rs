//! Argument-contract tests for the spo binary.
//!
//! These exercise clap-level parsing and the site-resolution error path only;
//! no network calls are made.

use assert_cmd::Command;
use predicates::prelude::*;

fn spo() -> Command {
  Command::cargo_bin("spo").expect("spo binary should build")
}

#[test]
fn help_lists_command_groups() {
  spo()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("feature"))
    .stdout(predicate::str::contains("term"))
    .stdout(predicate::str::contains("creds"));
}

#[test]
fn feature_enable_rejects_an_invalid_guid() {
  spo()
    .args(["feature", "enable", "not-a-guid"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn term_import_requires_an_input_source() {
  spo().args(["term", "import"]).assert().failure().stderr(
    predicate::str::contains("--terms").and(predicate::str::contains("--path")),
  );
}

#[test]
fn term_import_rejects_both_input_sources() {
  spo()
    .args([
      "term",
      "import",
      "--terms",
      "Company|Locations",
      "--path",
      "terms.txt",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn commands_report_a_missing_site_url() {
  spo()
    .env_remove("SPO_SITE")
    .args(["feature", "enable", "d54d4b40-7d10-4a22-ab8d-3bb45b2222c2"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("No site URL given"));
}

#[test]
fn an_invalid_site_url_is_rejected() {
  spo()
    .args([
      "term",
      "group",
      "Company",
      "--site",
      "ftp://contoso.example.com",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Unsupported site URL scheme"));
}
