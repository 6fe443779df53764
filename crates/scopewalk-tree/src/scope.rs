//! Scope resolution and identifier collection.
//!
//! A node's scope is the nearest scope-introducing node at or above it: the
//! program root or a function. Resolution walks the existing parent chain and
//! memoizes the answer on every node it passes.
//!
//! Identifier collection attributes a declaration to the scope its *parent*
//! resolves to. A function declaration's own name therefore lands in the
//! enclosing scope, while names declared inside its body land in the
//! function's scope.

use scopewalk_ast::{NodeKind, WalkError, WalkResult};
use smallvec::SmallVec;
use tracing::debug;

use crate::base::{NodeIndex, ScopeId};
use crate::tree::WrappedTree;

/// A lexical scope, introduced by exactly one wrapped node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    node: NodeIndex,
    kind: NodeKind,
    identifiers: Option<Vec<String>>,
}

impl Scope {
    /// The node that introduces this scope.
    #[inline]
    pub fn node(&self) -> NodeIndex {
        self.node
    }

    /// Kind of the introducing node (a program root or a function form).
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Identifiers, if they have been collected already.
    pub fn cached_identifiers(&self) -> Option<&[String]> {
        self.identifiers.as_deref()
    }
}

impl WrappedTree<'_> {
    /// Resolve the scope enclosing `idx` (its own scope when `idx` introduces
    /// one).
    ///
    /// Fails with [`WalkError::NoEnclosingScope`] when the walk reaches a
    /// parentless node that is not a scope root, and with
    /// [`WalkError::UnsupportedNodeKind`] when it meets a node whose kind is
    /// outside the grammar.
    ///
    /// An unsupported node fails here even though it could take its
    /// parent's scope: its kind cannot tell whether it introduces one.
    pub fn scope(&mut self, idx: NodeIndex) -> WalkResult<ScopeId> {
        let mut pending: SmallVec<[NodeIndex; 16]> = SmallVec::new();
        let mut current = idx;

        let scope = loop {
            let node = self.node(current);
            if let Some(scope) = node.scope {
                break scope;
            }
            let Some(kind) = node.kind() else {
                let err = node.raw().kind().err();
                return Err(err.unwrap_or_else(|| unscoped(self, current)));
            };
            if kind.is_scope_introducing() {
                break self.open_scope(current, kind);
            }
            pending.push(current);
            if node.is_root() {
                return Err(unscoped(self, current));
            }
            current = node.parent();
        };

        for node in pending {
            self.node_mut(node).scope = Some(scope);
        }
        Ok(scope)
    }

    /// The scope record for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[inline]
    pub fn scope_data(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.slot()]
    }

    /// The node introducing scope `id`.
    #[inline]
    pub fn scope_node(&self, id: ScopeId) -> NodeIndex {
        self.scope_data(id).node
    }

    /// Number of scopes opened so far.
    #[inline]
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// The scope enclosing scope `id`, or `None` for the root scope.
    pub fn parent_scope(&mut self, id: ScopeId) -> WalkResult<Option<ScopeId>> {
        let parent = self.parent(self.scope_node(id));
        if parent.is_none() {
            Ok(None)
        } else {
            self.scope(parent).map(Some)
        }
    }

    /// Names declared directly in scope `id`, in pre-order.
    ///
    /// A descendant contributes when its parent resolves to this scope and its
    /// raw node has an `Identifier` in its `id` field. Names declared inside
    /// nested functions are skipped even though their subtrees are walked.
    /// Redeclarations are kept.
    #[tracing::instrument(level = "debug", skip_all, fields(scope = id.0))]
    pub fn identifiers(&mut self, id: ScopeId) -> WalkResult<&[String]> {
        if self.scopes[id.slot()].identifiers.is_none() {
            let root = self.scope_node(id);
            let descendants = self.descendants(root)?.to_vec();
            let mut names = Vec::new();
            for descendant in descendants {
                let parent = self.parent(descendant);
                if self.scope(parent)? != id {
                    continue;
                }
                if let Some(name) = self.raw(descendant).declared_name() {
                    names.push(name.to_string());
                }
            }
            debug!(count = names.len(), "collected identifiers");
            self.scopes[id.slot()].identifiers = Some(names);
        }
        Ok(self.scopes[id.slot()]
            .identifiers
            .as_deref()
            .unwrap_or_default())
    }

    /// Every scope of the tree, ordered by the pre-order position of the node
    /// introducing it (the root scope first).
    pub fn scopes(&mut self) -> WalkResult<Vec<ScopeId>> {
        let root = self.root();
        let mut scopes = vec![self.scope(root)?];
        let descendants = self.descendants(root)?.to_vec();
        for descendant in descendants {
            let introduces = self
                .node(descendant)
                .kind()
                .is_some_and(NodeKind::is_scope_introducing);
            if introduces {
                scopes.push(self.scope(descendant)?);
            }
        }
        Ok(scopes)
    }

    fn open_scope(&mut self, idx: NodeIndex, kind: NodeKind) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope {
            node: idx,
            kind,
            identifiers: None,
        });
        self.node_mut(idx).scope = Some(id);
        debug!(scope = id.0, node = idx.0, kind = kind.type_name(), "opened scope");
        id
    }
}

fn unscoped(tree: &WrappedTree<'_>, idx: NodeIndex) -> WalkError {
    WalkError::NoEnclosingScope {
        digest: tree.digest(idx),
    }
}
