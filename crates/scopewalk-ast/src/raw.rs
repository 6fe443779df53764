//! Borrowed view over a parser-produced JSON node.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::digest::digest;
use crate::error::{WalkError, WalkResult};
use crate::kind::NodeKind;

/// Placeholder kind used in diagnostics when a node has no `type` string.
pub const UNKNOWN_KIND: &str = "<unknown>";

/// A raw syntax node as emitted by the external parser.
///
/// The node is never copied or mutated; the view only borrows the caller's
/// [`Value`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawNode<'a> {
    value: &'a Value,
}

impl<'a> RawNode<'a> {
    #[inline]
    pub const fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The underlying JSON value.
    #[inline]
    pub const fn value(&self) -> &'a Value {
        self.value
    }

    /// The raw `type` string, if present.
    #[inline]
    pub fn type_name(&self) -> Option<&'a str> {
        self.value.get("type").and_then(Value::as_str)
    }

    /// The `type` string, or [`UNKNOWN_KIND`] when absent.
    pub fn kind_name(&self) -> &'a str {
        self.type_name().unwrap_or(UNKNOWN_KIND)
    }

    /// Resolve the node's kind against the closed grammar.
    pub fn kind(&self) -> WalkResult<NodeKind> {
        self.type_name()
            .and_then(NodeKind::from_type_name)
            .ok_or_else(|| WalkError::UnsupportedNodeKind {
                kind: self.kind_name().to_string(),
                digest: digest(*self),
            })
    }

    /// A field value; JSON `null` reads as absent.
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        self.value.get(name).filter(|v| !v.is_null())
    }

    /// A field holding a nested node.
    pub fn node(&self, name: &str) -> Option<RawNode<'a>> {
        self.field(name)
            .filter(|v| v.is_object())
            .map(RawNode::new)
    }

    /// The `name` of an `Identifier` node.
    pub fn name(&self) -> Option<&'a str> {
        if self.type_name() == Some(NodeKind::Identifier.type_name()) {
            self.value.get("name").and_then(Value::as_str)
        } else {
            None
        }
    }

    /// The name bound by this node's `id` field, when that field is an
    /// `Identifier` (declarators and named functions).
    pub fn declared_name(&self) -> Option<&'a str> {
        self.node("id").and_then(|id| id.name())
    }

    /// Source byte range, read from `range: [start, end]` or from the
    /// `start`/`end` pair that acorn-style parsers emit.
    pub fn span(&self) -> Option<(u64, u64)> {
        if let Some(range) = self.field("range").and_then(Value::as_array) {
            if let [start, end] = range.as_slice() {
                return Some((start.as_u64()?, end.as_u64()?));
            }
        }
        let start = self.field("start").and_then(Value::as_u64)?;
        let end = self.field("end").and_then(Value::as_u64)?;
        Some((start, end))
    }

    /// One-line diagnostic digest; see [`digest`](crate::digest()).
    pub fn digest(&self) -> String {
        digest(*self)
    }

    /// Compact JSON text of the node.
    pub fn to_json(&self) -> String {
        self.value.to_string()
    }

    /// Indented JSON text of the node.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self.value).unwrap_or_else(|_| self.to_json())
    }
}

impl<'a> From<&'a Value> for RawNode<'a> {
    fn from(value: &'a Value) -> Self {
        RawNode::new(value)
    }
}

impl Serialize for RawNode<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl fmt::Display for RawNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.value, f)
    }
}
