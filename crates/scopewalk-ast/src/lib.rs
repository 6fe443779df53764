//! Raw syntax-tree layer of scopewalk.
//!
//! This crate knows how to read the JSON trees produced by SpiderMonkey-style
//! parsers (`Reflect.parse`, esprima, acorn):
//! - [`RawNode`]: a borrowed view over one parser node
//! - [`NodeKind`]: the closed set of supported node kinds
//! - [`extract_children`]: the grammar table mapping a node to its ordered children
//! - [`digest`]: one-line diagnostic rendering of a node
//! - [`WalkError`]: the failures shared by every walker crate

pub mod children;
pub use children::{RawChildren, Slot, extract_children, grammar};

pub mod digest;
pub use digest::digest;

pub mod error;
pub use error::{WalkError, WalkResult};

pub mod kind;
pub use kind::NodeKind;

pub mod raw;
pub use raw::{RawNode, UNKNOWN_KIND};

#[cfg(test)]
#[path = "tests/children_tests.rs"]
mod children_tests;

#[cfg(test)]
#[path = "tests/digest_tests.rs"]
mod digest_tests;
