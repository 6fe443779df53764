//! The wrapped-node arena: lazy, parent-linked, memoized views over a raw tree.
//!
//! Nodes are appended to the arena the first time their parent's children are
//! requested and are never recreated, so a [`NodeIndex`] stays valid (and
//! refers to the same node) for the lifetime of the tree. Parent links are
//! plain indices; ownership runs root to leaf through the arena itself.

use scopewalk_ast::{NodeKind, RawNode, WalkResult, extract_children};
use serde_json::Value;
use tracing::trace;

use crate::base::{NodeIndex, ScopeId};
use crate::scope::Scope;

/// One wrapped node: a raw node plus its parent link and memoized derivations.
#[derive(Debug, Clone)]
pub struct WrappedNode<'a> {
    raw: RawNode<'a>,
    kind: Option<NodeKind>,
    parent: NodeIndex,
    depth: u32,
    children: Option<Vec<NodeIndex>>,
    descendants: Option<Vec<NodeIndex>>,
    pub(crate) scope: Option<ScopeId>,
}

impl<'a> WrappedNode<'a> {
    fn new(raw: RawNode<'a>, parent: NodeIndex, depth: u32) -> Self {
        WrappedNode {
            raw,
            kind: raw.type_name().and_then(NodeKind::from_type_name),
            parent,
            depth,
            children: None,
            descendants: None,
            scope: None,
        }
    }

    /// The underlying raw node.
    #[inline]
    pub fn raw(&self) -> RawNode<'a> {
        self.raw
    }

    /// The node's kind, or `None` when its `type` is outside the grammar.
    #[inline]
    pub fn kind(&self) -> Option<NodeKind> {
        self.kind
    }

    /// The wrapping parent; [`NodeIndex::NONE`] for the root.
    #[inline]
    pub fn parent(&self) -> NodeIndex {
        self.parent
    }

    /// Distance from the root (the root is at depth 0).
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Children, if they have been expanded already.
    pub fn cached_children(&self) -> Option<&[NodeIndex]> {
        self.children.as_deref()
    }

    /// Scope, if it has been resolved already.
    pub fn cached_scope(&self) -> Option<ScopeId> {
        self.scope
    }
}

/// Arena of wrapped nodes rooted at one raw tree.
#[derive(Debug, Clone)]
pub struct WrappedTree<'a> {
    nodes: Vec<WrappedNode<'a>>,
    pub(crate) scopes: Vec<Scope>,
}

impl<'a> WrappedTree<'a> {
    /// Index of the root node in every tree.
    pub const ROOT: NodeIndex = NodeIndex(0);

    /// Wrap `root`. Nothing below the root is inspected until asked for.
    pub fn new(root: RawNode<'a>) -> Self {
        WrappedTree {
            nodes: vec![WrappedNode::new(root, NodeIndex::NONE, 0)],
            scopes: Vec::new(),
        }
    }

    /// Wrap a parsed JSON document.
    pub fn from_value(value: &'a Value) -> Self {
        Self::new(RawNode::new(value))
    }

    #[inline]
    pub fn root(&self) -> NodeIndex {
        Self::ROOT
    }

    /// Number of nodes wrapped so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Get a wrapped node by index.
    #[inline]
    pub fn get(&self, idx: NodeIndex) -> Option<&WrappedNode<'a>> {
        if idx.is_none() {
            None
        } else {
            self.nodes.get(idx.slot())
        }
    }

    /// Get a wrapped node by index.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not belong to this tree.
    #[inline]
    pub fn node(&self, idx: NodeIndex) -> &WrappedNode<'a> {
        &self.nodes[idx.slot()]
    }

    #[inline]
    pub fn raw(&self, idx: NodeIndex) -> RawNode<'a> {
        self.node(idx).raw
    }

    #[inline]
    pub fn parent(&self, idx: NodeIndex) -> NodeIndex {
        self.node(idx).parent
    }

    /// Distance from the root; the root has depth 0.
    #[inline]
    pub fn depth(&self, idx: NodeIndex) -> u32 {
        self.node(idx).depth
    }

    /// Diagnostic digest of the node at `idx`.
    pub fn digest(&self, idx: NodeIndex) -> String {
        self.raw(idx).digest()
    }

    /// Walk the parent chain of `idx`, nearest ancestor first.
    pub fn ancestors(&self, idx: NodeIndex) -> Ancestors<'_, 'a> {
        Ancestors {
            tree: self,
            next: self.parent(idx),
        }
    }

    /// Wrapped children of `idx`, expanding them on first use.
    ///
    /// Fails when the node's kind is unsupported or a required child is
    /// absent. A failed expansion caches nothing, so the same error is
    /// reported again on the next call.
    pub fn children(&mut self, idx: NodeIndex) -> WalkResult<&[NodeIndex]> {
        if self.node(idx).children.is_none() {
            let (raw, depth) = {
                let node = self.node(idx);
                (node.raw, node.depth + 1)
            };
            let extracted = extract_children(raw)?;
            let mut indices = Vec::with_capacity(extracted.len());
            for child in extracted {
                indices.push(self.push(child, idx, depth));
            }
            trace!(
                node = idx.0,
                kind = raw.kind_name(),
                children = indices.len(),
                "expanded node"
            );
            self.nodes[idx.slot()].children = Some(indices);
        }
        Ok(self.node(idx).children.as_deref().unwrap_or_default())
    }

    /// Every wrapped node below `idx` in pre-order (depth first, left to
    /// right), excluding `idx` itself.
    ///
    /// The walk keeps its own stack, so tree depth is bounded by memory and not
    /// by the call stack. Descendant lists already cached below `idx` are
    /// spliced in whole.
    pub fn descendants(&mut self, idx: NodeIndex) -> WalkResult<&[NodeIndex]> {
        if self.node(idx).descendants.is_none() {
            let mut flattened = Vec::new();
            let mut stack: Vec<NodeIndex> = self.children(idx)?.iter().rev().copied().collect();
            while let Some(current) = stack.pop() {
                flattened.push(current);
                if let Some(cached) = self.node(current).descendants.as_deref() {
                    flattened.extend_from_slice(cached);
                    continue;
                }
                stack.extend(self.children(current)?.iter().rev());
            }
            self.nodes[idx.slot()].descendants = Some(flattened);
        }
        Ok(self.node(idx).descendants.as_deref().unwrap_or_default())
    }

    /// Descendants of `idx` with the given kind, in pre-order.
    pub fn find_all(&mut self, idx: NodeIndex, kind: NodeKind) -> WalkResult<Vec<NodeIndex>> {
        let descendants = self.descendants(idx)?.to_vec();
        Ok(descendants
            .into_iter()
            .filter(|&d| self.node(d).kind == Some(kind))
            .collect())
    }

    /// The chain of nodes whose source span contains `offset`, from the root
    /// down to the innermost node. Children without a span are not entered.
    /// The root is always part of the chain unless its own span excludes
    /// `offset`, in which case the result is empty.
    pub fn nodes_at(&mut self, offset: u64) -> WalkResult<Vec<NodeIndex>> {
        let mut chain = Vec::new();
        if let Some((start, end)) = self.raw(Self::ROOT).span() {
            if offset < start || offset >= end {
                return Ok(chain);
            }
        }

        let mut current = Self::ROOT;
        loop {
            chain.push(current);
            let children = self.children(current)?.to_vec();
            let next = children.into_iter().find(|&child| {
                self.raw(child)
                    .span()
                    .is_some_and(|(start, end)| start <= offset && offset < end)
            });
            match next {
                Some(child) => current = child,
                None => return Ok(chain),
            }
        }
    }

    fn push(&mut self, raw: RawNode<'a>, parent: NodeIndex, depth: u32) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(WrappedNode::new(raw, parent, depth));
        idx
    }

    pub(crate) fn node_mut(&mut self, idx: NodeIndex) -> &mut WrappedNode<'a> {
        &mut self.nodes[idx.slot()]
    }
}

/// Iterator over a node's ancestors; see [`WrappedTree::ancestors`].
pub struct Ancestors<'t, 'a> {
    tree: &'t WrappedTree<'a>,
    next: NodeIndex,
}

impl Iterator for Ancestors<'_, '_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        let current = self.tree.get(self.next)?;
        let idx = self.next;
        self.next = current.parent;
        Some(idx)
    }
}
