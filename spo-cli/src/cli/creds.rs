//! # Credentials Command
//!
//! Derive-based implementation of the credentials command for managing the
//! `.netrc` entry spo authenticates to the platform site with.

use std::io::{self, Write};

use anyhow::Result;
use clap::{Args, Subcommand};
use spo_api::create_spo_client;
use spo_core::creds::{get_netrc_path, get_site_credentials, store_site_credentials};
use spo_core::output::{format_command, format_path, format_site, print_error, print_info, print_success, print_warning};
use tokio::runtime::Runtime;

use crate::clients::{resolve_site_url, site_host};

/// Command for credential management
#[derive(Args)]
pub struct CredsArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: CredsSubcommands,
}

/// Subcommands for the creds command
#[derive(Subcommand)]
pub enum CredsSubcommands {
  /// Check if credentials are properly configured
  #[command(long_about = "Checks if credentials for the target site are properly configured.\n\n\
                      This command verifies that your .netrc file contains an entry for the\n\
                      site host and that the file permissions keep it private.")]
  Check,

  /// Set up credentials interactively
  #[command(long_about = "Interactive setup for the target site's credentials.\n\n\
                      This command prompts for a username and app token, validates them\n\
                      against the site, and writes them to your .netrc file.")]
  Setup,
}

/// Handle the creds command
pub(crate) fn handle_creds_command(site: Option<&str>, creds: CredsArgs) -> Result<()> {
  match creds.subcommand {
    CredsSubcommands::Check => handle_check_command(site),
    CredsSubcommands::Setup => handle_setup_command(site),
  }
}

/// Handle the check command
///
/// This function checks if the .netrc file exists, verifies its permissions,
/// and checks for an entry matching the target site's host. It also prints an
/// example .netrc format for user reference.
fn handle_check_command(site: Option<&str>) -> Result<()> {
  let netrc_path = get_netrc_path()?;

  if !netrc_path.exists() {
    print_error("No .netrc file found.");
    println!(
      "Create a .netrc file at {} with your credentials.",
      format_path(&netrc_path.display().to_string())
    );
    return Ok(());
  }

  #[cfg(unix)]
  {
    use std::os::unix::fs::PermissionsExt;

    let mode = std::fs::metadata(&netrc_path)?.permissions().mode();
    if mode & 0o077 != 0 {
      print_warning("Your .netrc file has insecure permissions.");
      println!(
        "For security, change permissions to 600: {}",
        format_command(&format!("chmod 600 {}", netrc_path.display()))
      );
    } else {
      print_success(".netrc file has secure permissions.");
    }
  }

  match resolve_site_url(site) {
    Ok(site_url) => {
      let host = site_host(&site_url)?;
      match get_site_credentials(&host) {
        Ok(Some(_)) => print_success(&format!("Credentials found for {}.", format_site(&host))),
        Ok(None) => {
          print_warning(&format!("No credentials found for {}.", format_site(&host)));
          println!("Add an entry for machine '{host}' to your .netrc file.");
        }
        Err(e) => print_error(&format!("Error checking credentials: {e}")),
      }
    }
    Err(_) => {
      print_warning("No site URL configured; pass --site or set SPO_SITE to check site credentials.");
    }
  }

  print_info("Example .netrc format:");
  println!("```");
  println!("machine contoso.example.com");
  println!("  login admin@contoso.example.com");
  println!("  password your-app-token");
  println!("```");

  Ok(())
}

/// Handle the setup command
fn handle_setup_command(site: Option<&str>) -> Result<()> {
  let site_url = resolve_site_url(site)?;
  let host = site_host(&site_url)?;

  print_info("Welcome to the spo credential setup!");
  println!("Credentials for {} will be stored in ~/.netrc", format_site(&host));
  println!("File permissions will be set to 600 for security.");
  println!();

  print!("Enter your username: ");
  io::stdout().flush()?;
  let mut username = String::new();
  io::stdin().read_line(&mut username)?;
  let username = username.trim().to_string();

  if username.is_empty() {
    print_warning("Username cannot be empty. Setup cancelled.");
    return Ok(());
  }

  print!("Enter your app token: ");
  io::stdout().flush()?;
  let mut app_token = String::new();
  io::stdin().read_line(&mut app_token)?;
  let app_token = app_token.trim().to_string();

  if app_token.is_empty() {
    print_warning("App token cannot be empty. Setup cancelled.");
    return Ok(());
  }

  print_info("Validating credentials against the site...");
  let rt = Runtime::new()?;
  let client = create_spo_client(&site_url, &username, &app_token)?;
  match rt.block_on(client.test_connection()) {
    Ok(true) => {
      store_site_credentials(&host, &username, &app_token)?;
      print_success("Credentials validated and stored!");
      print_info(&format!(
        "Run {} to verify your setup.",
        format_command("spo creds check")
      ));
    }
    Ok(false) => {
      print_error("Failed to validate credentials. Please check your username and app token.");
      print_info("You can manually add credentials to your .netrc file later.");
    }
    Err(e) => {
      print_error(&format!("Error validating credentials: {e}"));
      print_info("This might be a network issue or the site might be unreachable.");
      print_info("You can manually add credentials to your .netrc file later.");
    }
  }

  Ok(())
}
