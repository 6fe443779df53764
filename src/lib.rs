//! scopewalk: parent-aware traversal and lexical scope resolution over
//! SpiderMonkey-style JavaScript syntax trees.
//!
//! The work is split across the workspace crates and re-exported here:
//! - [`ast`] (`scopewalk-ast`): raw node view, closed grammar, child extraction
//! - [`tree`] (`scopewalk-tree`): wrapped-node arena, scopes, identifiers
//!
//! This crate adds document loading and the `scopewalk` command-line driver.

pub use scopewalk_ast as ast;
pub use scopewalk_tree as tree;

pub use scopewalk_ast::{NodeKind, RawNode, WalkError, WalkResult, digest, extract_children};
pub use scopewalk_tree::{NodeIndex, Scope, ScopeId, ScopeReport, WrappedNode, WrappedTree};

// Reading parser output from disk or stdin
pub mod loader;
pub use loader::{load_document, parse_document};

// Subscriber setup for SCOPEWALK_LOG / SCOPEWALK_LOG_FORMAT
pub mod tracing_config;

#[cfg(feature = "cli")]
pub mod cli;
