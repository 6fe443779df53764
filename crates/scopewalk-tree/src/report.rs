//! Serializable summaries of a tree's scopes, for tooling output.

use scopewalk_ast::WalkResult;
use serde::Serialize;

use crate::base::{NodeIndex, ScopeId};
use crate::tree::WrappedTree;

/// One scope and the names declared directly in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeReport {
    pub id: ScopeId,
    /// `type` of the introducing node.
    pub kind: &'static str,
    /// The function's own name, when it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub node: NodeIndex,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ScopeId>,
    /// Number of enclosing scopes (0 for the root scope).
    pub depth: usize,
    pub identifiers: Vec<String>,
}

impl WrappedTree<'_> {
    /// Report every scope of the tree, in the order of [`WrappedTree::scopes`].
    pub fn scope_report(&mut self) -> WalkResult<Vec<ScopeReport>> {
        let scopes = self.scopes()?;
        let mut reports: Vec<ScopeReport> = Vec::with_capacity(scopes.len());

        for id in scopes {
            let node = self.scope_node(id);
            let parent = self.parent_scope(id)?;
            // Parents are opened before their nested scopes, so their report
            // is already present.
            let depth = parent
                .and_then(|p| reports.iter().find(|r| r.id == p))
                .map_or(0, |r| r.depth + 1);
            let identifiers = self.identifiers(id)?.to_vec();
            reports.push(ScopeReport {
                id,
                kind: self.scope_data(id).kind().type_name(),
                name: self.raw(node).declared_name().map(str::to_string),
                node,
                parent,
                depth,
                identifiers,
            });
        }

        Ok(reports)
    }
}
