//! CLI for the Detour mock redirector.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use detour_core::config::{self, RedirectRules};
use std::path::Path;

use commands::{run_apply, run_check, run_trace};

/// Top-level CLI for the Detour mock redirector.
#[derive(Debug, Parser)]
#[command(name = "detour")]
#[command(about = "Detour: redirect load-test traffic to mock endpoints", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Validate a redirect rules file and list its rules.
    Check {
        /// Path to the rules file.
        path: String,
    },

    /// Print the redirected form of a single URL (identity when unmapped).
    Apply {
        /// URL to look up in the redirect rules.
        url: String,

        /// Rules file to use instead of the default one.
        #[arg(long, value_name = "PATH")]
        rules: Option<String>,
    },

    /// Dry-run a recorded call trace through the interception shim.
    ///
    /// The trace is JSON lines, one call per line:
    /// `{"verb": "get", "args": ["https://example.com"]}`.
    Trace {
        /// Path to the trace file.
        path: String,

        /// Rules file to use instead of the default one.
        #[arg(long, value_name = "PATH")]
        rules: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Check { path } => run_check(Path::new(&path))?,
            CliCommand::Apply { url, rules } => {
                let rules = load_rules(rules.as_deref())?;
                run_apply(&rules, &url);
            }
            CliCommand::Trace { path, rules } => {
                let rules = load_rules(rules.as_deref())?;
                run_trace(&rules, Path::new(&path))?;
            }
        }

        Ok(())
    }
}

fn load_rules(path: Option<&str>) -> Result<RedirectRules> {
    let rules = match path {
        Some(p) => config::load(Path::new(p))?,
        None => config::load_or_init()?,
    };
    tracing::debug!(rules = rules.targets.len(), "redirect rules ready");
    Ok(rules)
}

#[cfg(test)]
mod tests;
