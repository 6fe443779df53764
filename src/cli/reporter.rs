//! Text and JSON rendering of walk results.

use colored::Colorize;
use scopewalk_tree::{NodeIndex, ScopeReport, WrappedTree};
use serde::Serialize;

use super::args::OutputFormat;

/// One node line of a `--tree` or `--at` listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeEntry {
    pub index: NodeIndex,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeIndex>,
    pub depth: u32,
    pub kind: String,
    pub digest: String,
}

impl NodeEntry {
    pub fn new(tree: &WrappedTree<'_>, idx: NodeIndex) -> Self {
        let node = tree.node(idx);
        let raw = node.raw();
        NodeEntry {
            index: idx,
            parent: Some(node.parent()).filter(|p| p.is_some()),
            depth: node.depth(),
            kind: raw.kind_name().to_string(),
            digest: raw.digest(),
        }
    }
}

pub struct Reporter {
    format: OutputFormat,
    color: bool,
}

impl Reporter {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Reporter { format, color }
    }

    pub fn render_scopes(&self, scopes: &[ScopeReport]) -> serde_json::Result<String> {
        if self.format == OutputFormat::Json {
            return to_json(scopes);
        }
        let mut out = String::new();
        for scope in scopes {
            out.push_str(&"  ".repeat(scope.depth));
            out.push_str(&self.paint_kind(scope.kind));
            if let Some(name) = &scope.name {
                out.push(' ');
                out.push_str(&self.paint_name(name));
            }
            out.push(':');
            if !scope.identifiers.is_empty() {
                out.push(' ');
                out.push_str(&scope.identifiers.join(", "));
            }
            out.push('\n');
        }
        Ok(out)
    }

    pub fn render_nodes(&self, nodes: &[NodeEntry]) -> serde_json::Result<String> {
        if self.format == OutputFormat::Json {
            return to_json(nodes);
        }
        let mut out = String::new();
        for entry in nodes {
            out.push_str(&"  ".repeat(entry.depth as usize));
            // The digest starts with the kind; only the kind is painted.
            let rest = entry.digest.strip_prefix(entry.kind.as_str()).unwrap_or(&entry.digest);
            out.push_str(&self.paint_kind(&entry.kind));
            out.push_str(rest);
            out.push('\n');
        }
        Ok(out)
    }

    fn paint_kind(&self, kind: &str) -> String {
        if self.color {
            kind.cyan().to_string()
        } else {
            kind.to_string()
        }
    }

    fn paint_name(&self, name: &str) -> String {
        if self.color {
            name.bold().to_string()
        } else {
            name.to_string()
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}
