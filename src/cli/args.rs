use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the scopewalk binary.
#[derive(Parser, Debug)]
#[command(
    name = "scopewalk",
    version,
    about = "Walk a SpiderMonkey-style JavaScript AST and report its lexical scopes"
)]
pub struct CliArgs {
    /// JSON file holding the parser's AST (`-` reads stdin).
    pub file: PathBuf,

    /// Print every node of the wrapped tree in pre-order instead of scopes.
    #[arg(long)]
    pub tree: bool,

    /// Print the chain of nodes whose source range contains OFFSET.
    #[arg(long, value_name = "OFFSET", conflicts_with = "tree")]
    pub at: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored text output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

/// Report rendering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl CliArgs {
    /// What the run should print.
    pub fn mode(&self) -> Mode {
        if let Some(offset) = self.at {
            Mode::At(offset)
        } else if self.tree {
            Mode::Tree
        } else {
            Mode::Scopes
        }
    }
}

/// The report a run produces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Scopes,
    Tree,
    At(u64),
}
