//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Convert a JSON or YAML document into a Markdown heading tree.
#[derive(Parser, Debug)]
#[command(name = "structmd", author, version, about)]
pub struct Cli {
    /// Input document. A `.json` extension selects the JSON parser,
    /// anything else is read as YAML.
    pub input: Option<PathBuf>,

    /// Split a top-level sequence into one file per element, named by KEY.
    /// Elements without KEY are skipped.
    #[arg(short, long, value_name = "KEY")]
    pub multiple: Option<String>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long)]
    pub quiet: bool,
}

// ============================================================================
// Tests
// ============================================================================
