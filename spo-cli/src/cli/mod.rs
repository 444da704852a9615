//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the spo tool,
//! including subcommands for feature activation, taxonomy term management,
//! and credential management.

mod creds;
mod feature;
mod term;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use spo_core::output::ColorMode;

/// Top-level CLI command for the spo tool
#[derive(Parser)]
#[command(name = "spo")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Administer features and taxonomy on a collaboration-platform site")]
#[command(
  long_about = "Spo performs narrow administrative actions against a remote collaboration-platform\n\
        site: enabling installed features and reading or importing taxonomy terms.\n\n\
        Every command resolves the target site from --site (or the SPO_SITE environment\n\
        variable), authenticates with credentials stored in your .netrc file, issues the\n\
        corresponding platform API call, and reports the result."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// URL of the site to operate against
  #[arg(
    long,
    global = true,
    value_name = "URL",
    long_help = "URL of the site to operate against, e.g. https://contoso.example.com/sites/intranet.\n\
             Falls back to the SPO_SITE environment variable when omitted."
  )]
  pub site: Option<String>,

  /// Controls when colored output is used
  #[arg(
    long,
    global = true,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the spo tool
#[derive(Subcommand)]
pub enum Commands {
  /// Credential management
  #[command(long_about = "Manage the credentials spo uses to authenticate against the site.\n\n\
            Credentials are stored in your .netrc file, keyed by the site host, for\n\
            security and compatibility with other tools.")]
  #[command(arg_required_else_help = true)]
  Creds(creds::CredsArgs),

  /// Feature management
  #[command(long_about = "Manage installed features on the target site.\n\n\
            Features are identified by their GUID and can be activated at web scope\n\
            or for the whole site collection.")]
  #[command(alias = "f")]
  Feature(feature::FeatureArgs),

  /// Taxonomy term management
  #[command(long_about = "Read and import taxonomy terms on the target site.\n\n\
            This command group retrieves term groups from a term store and bulk-imports\n\
            term hierarchies from delimited lines or a file.")]
  #[command(alias = "t")]
  Term(term::TermArgs),
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  // Set global color override based on --colors argument
  match cli.colors {
    ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
    ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
    ColorMode::Auto => {
      // Let owo_colors use its default auto-detection
    }
  }

  let site = cli.site.as_deref();
  match cli.command {
    Commands::Creds(creds) => creds::handle_creds_command(site, creds),
    Commands::Feature(feature) => feature::handle_feature_command(site, feature),
    Commands::Term(term) => term::handle_term_command(site, term),
  }
}
