//! # Feature Command
//!
//! Derive-based implementation of the feature command group: activating
//! installed features at web or site-collection scope.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use spo_core::output::print_success;
use tracing::debug;
use uuid::Uuid;

use crate::clients;

/// Command for feature management
#[derive(Args)]
pub struct FeatureArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: FeatureSubcommands,
}

/// Subcommands for the feature command
#[derive(Subcommand)]
pub enum FeatureSubcommands {
  /// Enable a feature
  #[command(long_about = "Enable an installed feature on the target site.\n\n\
            The feature is identified by its GUID. By default it is activated at web\n\
            scope; pass --scope site to activate it for the whole site collection.\n\
            Features shipped inside a sandboxed solution need --sandboxed so the\n\
            platform uses the sandboxed activation path.")]
  Enable {
    /// The id of the feature to enable
    #[arg(index = 1, required = true)]
    id: Uuid,

    /// The scope at which to activate the feature
    #[arg(long, value_enum, ignore_case = true, default_value_t = FeatureScopeArg::Web)]
    scope: FeatureScopeArg,

    /// Forcibly enable the feature
    #[arg(long, short = 'f')]
    force: bool,

    /// The feature is part of a sandboxed solution
    #[arg(long)]
    sandboxed: bool,
  },
}

/// Scope at which a feature operation applies
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureScopeArg {
  /// The individual web the site URL points at
  Web,
  /// The whole site collection
  Site,
}

impl FeatureScopeArg {
  fn as_str(self) -> &'static str {
    match self {
      FeatureScopeArg::Web => "web",
      FeatureScopeArg::Site => "site",
    }
  }
}

/// Handle the feature command
pub(crate) fn handle_feature_command(site: Option<&str>, feature: FeatureArgs) -> Result<()> {
  match feature.subcommand {
    FeatureSubcommands::Enable {
      id,
      scope,
      force,
      sandboxed,
    } => handle_enable_command(site, id, scope, force, sandboxed),
  }
}

/// Handle the enable subcommand
fn handle_enable_command(site: Option<&str>, id: Uuid, scope: FeatureScopeArg, force: bool, sandboxed: bool) -> Result<()> {
  let (rt, client) = clients::create_runtime_and_client(site)?;

  // The scope selector alone decides which activation endpoint is called.
  let feature = match scope {
    FeatureScopeArg::Web => rt.block_on(client.activate_web_feature(id, force, sandboxed))?,
    FeatureScopeArg::Site => rt.block_on(client.activate_site_feature(id, force, sandboxed))?,
  };

  debug!("Platform reported feature {} active", feature.id);

  match feature.display_name {
    Some(name) => print_success(&format!("Feature '{}' ({}) enabled at {} scope", name, id, scope.as_str())),
    None => print_success(&format!("Feature {} enabled at {} scope", id, scope.as_str())),
  }

  Ok(())
}
