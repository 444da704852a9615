//! # Term Command
//!
//! Derive-based implementation of the taxonomy term command group: term
//! group lookup and bulk term import from delimited lines or a file.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{ArgGroup, Args, Subcommand};
use owo_colors::OwoColorize;
use spo_api::models::{TermGroup, TermImportRequest, TermStore};
use spo_api::SpoClient;
use spo_core::output::{print_error, print_success};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::clients;
use crate::consts::CODE_TERM_STORE_NOT_FOUND;

/// Command for taxonomy term management
#[derive(Args)]
pub struct TermArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: TermSubcommands,
}

/// Subcommands for the term command
#[derive(Subcommand)]
pub enum TermSubcommands {
  /// Show a taxonomy term group
  #[command(long_about = "Retrieve a taxonomy term group by name.\n\n\
            The group is looked up in the default term store of the site collection,\n\
            or in the store named with --term-store. Whatever the platform returns is\n\
            printed as-is; a group that does not exist prints nothing.")]
  Group {
    /// Name of the taxonomy term group to retrieve
    #[arg(index = 1, required = true)]
    group_name: String,

    /// Term store to check; if not given the default term store is used
    #[arg(long, value_name = "NAME")]
    term_store: Option<String>,

    /// Print the raw term group object as JSON
    #[arg(long)]
    json: bool,
  },

  /// Import taxonomy terms from delimited lines or a file
  #[command(long_about = "Bulk-import a term hierarchy into the taxonomy.\n\n\
            Each line describes one path through the hierarchy in the form\n\
            'Group|Set|Term|SubTerm' (the delimiter is configurable). Lines come\n\
            either from repeated --terms arguments or from a file with one line per\n\
            term path. The platform creates missing groups, sets, and terms, and with\n\
            --synchronize-deletions removes terms absent from the input.")]
  #[command(group(ArgGroup::new("input").required(true).args(["terms", "path"])))]
  Import {
    /// Delimited lines describing group, set, term, and subterms
    #[arg(long, value_name = "LINE", num_args = 1..)]
    terms: Vec<String>,

    /// File containing one delimited line per term path
    #[arg(long, value_name = "FILE")]
    path: Option<PathBuf>,

    /// Locale id the term labels are created under
    #[arg(long, default_value_t = 1033)]
    lcid: u32,

    /// Term store to import into; if not given the default term store is used
    #[arg(long, value_name = "NAME")]
    term_store: Option<String>,

    /// Delimiter separating the hierarchy levels in each line
    #[arg(long, default_value = "|")]
    delimiter: String,

    /// Remove terms that exist in the term set but not in the imported data
    #[arg(long)]
    synchronize_deletions: bool,
  },
}

/// Where the import lines come from, decided once per invocation
enum InputSource {
  Direct(Vec<String>),
  FromFile(PathBuf),
}

impl InputSource {
  fn from_args(terms: Vec<String>, path: Option<PathBuf>) -> Result<Self> {
    match (terms.is_empty(), path) {
      (_, Some(path)) => Ok(InputSource::FromFile(path)),
      (false, None) => Ok(InputSource::Direct(terms)),
      (true, None) => Err(anyhow!("Either --terms or --path must be given")),
    }
  }

  /// Produce the lines handed to the remote import routine, verbatim
  fn read_lines(self) -> Result<Vec<String>> {
    match self {
      InputSource::Direct(lines) => Ok(lines),
      InputSource::FromFile(path) => {
        let path = absolute_path(path)?;
        let content = std::fs::read_to_string(&path)
          .with_context(|| format!("Failed to read terms file {}", path.display()))?;
        Ok(content.lines().map(str::to_string).collect())
      }
    }
  }
}

/// Resolve a possibly-relative path against the current working directory
fn absolute_path(path: PathBuf) -> Result<PathBuf> {
  if path.is_absolute() {
    Ok(path)
  } else {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    Ok(cwd.join(path))
  }
}

/// Handle the term command
pub(crate) fn handle_term_command(site: Option<&str>, term: TermArgs) -> Result<()> {
  match term.subcommand {
    TermSubcommands::Group {
      group_name,
      term_store,
      json,
    } => handle_group_command(site, &group_name, named_store(&term_store), json),
    TermSubcommands::Import {
      terms,
      path,
      lcid,
      term_store,
      delimiter,
      synchronize_deletions,
    } => {
      let source = InputSource::from_args(terms, path)?;
      handle_import_command(site, source, lcid, named_store(&term_store), delimiter, synchronize_deletions)
    }
  }
}

/// An empty `--term-store` value means "use the default store", same as
/// leaving the flag off
fn named_store(term_store: &Option<String>) -> Option<&str> {
  term_store.as_deref().filter(|name| !name.is_empty())
}

/// Resolve the term store the caller asked for: the named store, or the
/// default store of the site collection
fn resolve_term_store(rt: &Runtime, client: &SpoClient, name: Option<&str>) -> Result<Option<TermStore>> {
  match name {
    Some(name) => rt.block_on(client.get_term_store_by_name(name)),
    None => rt.block_on(client.get_default_term_store()),
  }
}

/// Handle the group subcommand
fn handle_group_command(site: Option<&str>, group_name: &str, term_store: Option<&str>, json: bool) -> Result<()> {
  let (rt, client) = clients::create_runtime_and_client(site)?;

  let Some(store) = resolve_term_store(&rt, &client, term_store)? else {
    // A missing store is reported as a structured, non-fatal error; the
    // invocation still exits cleanly without calling further into the API.
    print_error(&format!(
      "object not found ({}): cannot find term store '{}'",
      CODE_TERM_STORE_NOT_FOUND,
      term_store.unwrap_or("<default>")
    ));
    return Ok(());
  };

  match rt.block_on(client.get_term_group(&store.id, group_name))? {
    Some(group) => {
      if json {
        println!("{}", serde_json::to_string_pretty(&group)?);
      } else {
        print_group(&group);
      }
    }
    None => debug!("Term store '{}' has no group named '{}'", store.name, group_name),
  }

  Ok(())
}

fn print_group(group: &TermGroup) {
  println!("{} ({})", group.name.bold(), group.id);
  if let Some(description) = &group.description {
    println!("  {description}");
  }
  for set in &group.term_sets {
    println!("  - {} ({})", set.name, set.id);
  }
}

/// Handle the import subcommand
fn handle_import_command(
  site: Option<&str>,
  source: InputSource,
  lcid: u32,
  term_store: Option<&str>,
  delimiter: String,
  synchronize_deletions: bool,
) -> Result<()> {
  let lines = source.read_lines()?;
  debug!("Importing {} term line(s)", lines.len());

  let (rt, client) = clients::create_runtime_and_client(site)?;

  let request = TermImportRequest {
    lines,
    lcid,
    delimiter,
    synchronize_deletions,
  };

  let summary = match term_store {
    // A missing named store is a hard failure here, unlike `term group`.
    Some(name) => {
      let store = rt
        .block_on(client.get_term_store_by_name(name))?
        .ok_or_else(|| anyhow!("Term store '{name}' not found"))?;
      rt.block_on(client.import_terms_to_store(&store.id, &request))?
    }
    None => rt.block_on(client.import_terms(&request))?,
  };

  let deletions = if synchronize_deletions {
    format!(", {} term(s) deleted", summary.terms_deleted)
  } else {
    String::new()
  };
  print_success(&format!(
    "Imported {} term(s) ({} group(s), {} term set(s) created{})",
    summary.terms_created, summary.groups_created, summary.term_sets_created, deletions
  ));

  Ok(())
}
