//! Helpers for reading and writing credentials stored in `.netrc` files.
//!
//! These utilities keep the parsing and serialization logic in one place so
//! the CLI and the API client discover credentials the same way.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::creds::Credentials;

/// Returns the path to the `.netrc` file for the provided home directory.
pub fn netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Parses a `.netrc` file and returns credentials for the requested machine.
///
/// Both the single-line form (`machine host login user password pass`) and the
/// multi-line form are supported. The file is treated as a flat token stream,
/// which is how other `.netrc` consumers read it.
///
/// # Returns
///
/// * `Ok(Some(Credentials))` when a complete entry for the machine is found.
/// * `Ok(None)` when the machine is missing or its entry lacks a login or
///   password.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn parse_netrc_file(path: &Path, target_machine: &str) -> Result<Option<Credentials>> {
  let content = fs::read_to_string(path).context("Failed to open .netrc file")?;

  let mut tokens = content.split_whitespace();
  let mut in_target = false;
  let mut username = None;
  let mut password = None;

  while let Some(token) = tokens.next() {
    match token {
      "machine" => {
        if in_target && username.is_some() && password.is_some() {
          break;
        }
        in_target = tokens.next() == Some(target_machine);
        if in_target {
          username = None;
          password = None;
        }
      }
      "default" => {
        // A `default` entry ends the machine list; we only match exact hosts.
        break;
      }
      "login" if in_target => username = tokens.next().map(str::to_string),
      "password" if in_target => password = tokens.next().map(str::to_string),
      _ => {}
    }
  }

  match (username, password) {
    (Some(username), Some(password)) => Ok(Some(Credentials { username, password })),
    _ => Ok(None),
  }
}

/// Writes or updates a `.netrc` entry for the given machine.
///
/// An existing entry for the machine is replaced; otherwise a new entry is
/// appended. On Unix the file permissions are tightened to `600` so the
/// credentials are not readable by other users.
pub fn write_netrc_entry(path: &Path, machine: &str, username: &str, password: &str) -> Result<()> {
  let existing = if path.exists() {
    fs::read_to_string(path).context("Failed to read existing .netrc file")?
  } else {
    String::new()
  };

  let mut content = String::new();
  let mut skipping = false;
  for line in existing.lines() {
    let mut words = line.split_whitespace();
    if words.next() == Some("machine") {
      skipping = words.next() == Some(machine);
    }
    if !skipping {
      content.push_str(line);
      content.push('\n');
    }
  }

  if !content.is_empty() && !content.ends_with("\n\n") {
    content.push('\n');
  }
  content.push_str(&format!("machine {machine}\n  login {username}\n  password {password}\n"));

  fs::write(path, content).context("Failed to write .netrc file")?;

  #[cfg(unix)]
  {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path).context("Failed to read .netrc metadata")?.permissions();
    perms.set_mode(0o600);
    fs::set_permissions(path, perms).context("Failed to set .netrc permissions")?;
  }

  Ok(())
}
