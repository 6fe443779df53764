//! Navigable, parent-aware view of a SpiderMonkey-style syntax tree.
//!
//! A [`WrappedTree`] wraps a raw root and grows lazily:
//! - [`WrappedTree::children`] expands a node through the grammar table once
//!   and caches the result
//! - [`WrappedTree::descendants`] flattens a subtree in pre-order
//! - [`WrappedTree::scope`] resolves the nearest enclosing scope
//! - [`WrappedTree::identifiers`] lists the names declared directly in a scope
//!
//! ```
//! use scopewalk_tree::WrappedTree;
//! use serde_json::json;
//!
//! let program = json!({
//!     "type": "Program",
//!     "body": [{
//!         "type": "VariableDeclaration",
//!         "kind": "var",
//!         "declarations": [{
//!             "type": "VariableDeclarator",
//!             "id": { "type": "Identifier", "name": "answer" },
//!             "init": { "type": "Literal", "value": 42 }
//!         }]
//!     }]
//! });
//!
//! let mut tree = WrappedTree::from_value(&program);
//! let scope = tree.scope(tree.root()).unwrap();
//! assert_eq!(tree.identifiers(scope).unwrap(), ["answer"]);
//! ```

pub mod base;
pub use base::{NodeIndex, ScopeId};

pub mod report;
pub use report::ScopeReport;

pub mod scope;
pub use scope::Scope;

pub mod tree;
pub use tree::{Ancestors, WrappedNode, WrappedTree};

pub use scopewalk_ast::{NodeKind, RawNode, WalkError, WalkResult, digest};

#[cfg(test)]
#[path = "tests/tree_unit_tests.rs"]
mod tree_unit_tests;
