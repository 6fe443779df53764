//! Errors raised while expanding or resolving a raw tree.

use std::fmt;

/// Failures of child extraction and scope resolution.
///
/// Every variant carries the [`digest`](crate::digest) of the node that
/// triggered it so the message points at the offending shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalkError {
    /// The node's `type` is missing or outside the closed grammar.
    UnsupportedNodeKind { kind: String, digest: String },
    /// A structurally required child is absent, `null`, or not a node.
    MissingChild { field: &'static str, digest: String },
    /// A parentless node that does not introduce a scope was asked for one.
    NoEnclosingScope { digest: String },
}

impl WalkError {
    /// The digest of the node the error was raised for.
    #[must_use]
    pub fn digest(&self) -> &str {
        match self {
            WalkError::UnsupportedNodeKind { digest, .. }
            | WalkError::MissingChild { digest, .. }
            | WalkError::NoEnclosingScope { digest } => digest,
        }
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkError::UnsupportedNodeKind { kind, digest } => {
                write!(f, "unsupported node kind '{kind}': {digest}")
            }
            WalkError::MissingChild { field, digest } => {
                write!(f, "missing required child '{field}' in {digest}")
            }
            WalkError::NoEnclosingScope { digest } => {
                write!(f, "no enclosing scope for root node {digest}")
            }
        }
    }
}

impl std::error::Error for WalkError {}

/// Convenient `Result` alias for walker operations.
pub type WalkResult<T> = Result<T, WalkError>;
