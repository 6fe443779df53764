//! Index types for the wrapped-node arena.

use serde::Serialize;

/// Index of a [`WrappedNode`](crate::WrappedNode) in its [`WrappedTree`](crate::WrappedTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Sentinel for "no node" (the root's parent).
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != u32::MAX
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0 as usize
    }
}

/// Identifier of a [`Scope`](crate::Scope) in its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ScopeId(pub u32);

impl ScopeId {
    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0 as usize
    }
}
