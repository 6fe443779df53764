//! Runs one CLI invocation: load, wrap, render.

use anyhow::{Context, Result};
use scopewalk_tree::WrappedTree;
use serde_json::Value;
use tracing::info;

use super::args::{CliArgs, Mode};
use super::reporter::{NodeEntry, Reporter};
use crate::loader::load_document;

/// Load the document named by `args` and render the requested report.
pub fn run(args: &CliArgs, color: bool) -> Result<String> {
    let document = load_document(&args.file)?;
    let reporter = Reporter::new(args.format, color && !args.no_color);
    render(&document, args.mode(), &reporter)
        .with_context(|| format!("failed to walk {}", args.file.display()))
}

/// Render the report for an already loaded document.
pub fn render(document: &Value, mode: Mode, reporter: &Reporter) -> Result<String> {
    let mut tree = WrappedTree::from_value(document);

    let output = match mode {
        Mode::Scopes => {
            let scopes = tree.scope_report()?;
            info!(scopes = scopes.len(), nodes = tree.len(), "resolved scopes");
            reporter.render_scopes(&scopes)?
        }
        Mode::Tree => {
            let root = tree.root();
            let mut nodes = vec![root];
            nodes.extend_from_slice(tree.descendants(root)?);
            let entries: Vec<_> = nodes.iter().map(|&n| NodeEntry::new(&tree, n)).collect();
            reporter.render_nodes(&entries)?
        }
        Mode::At(offset) => {
            let chain = tree.nodes_at(offset)?;
            let entries: Vec<_> = chain.iter().map(|&n| NodeEntry::new(&tree, n)).collect();
            reporter.render_nodes(&entries)?
        }
    };

    Ok(output)
}
