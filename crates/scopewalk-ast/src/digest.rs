//! Diagnostic digests of raw nodes.
//!
//! A digest is a single line naming the node kind followed by each field and
//! a short description of its value:
//!
//! ```text
//! IfStatement (test:Identifier, consequent:BlockStatement, alternate:null)
//! ```
//!
//! Nested nodes show their kind, arrays show `[]`, and everything else shows
//! its JSON type.

use std::fmt::Write;

use serde_json::Value;

use crate::raw::RawNode;

/// Build the digest of `node`.
#[must_use]
pub fn digest(node: RawNode<'_>) -> String {
    let mut out = String::from(node.kind_name());
    let Some(fields) = node.value().as_object() else {
        let _ = write!(out, " ({})", value_shape(node.value()));
        return out;
    };

    out.push_str(" (");
    let mut first = true;
    for (name, value) in fields {
        if name == "type" {
            continue;
        }
        if !first {
            out.push_str(", ");
        }
        first = false;
        let _ = write!(out, "{name}:{}", value_shape(value));
    }
    out.push(')');
    out
}

/// Short description of a field value.
fn value_shape(value: &Value) -> &str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "[]",
        Value::Object(map) => map.get("type").and_then(Value::as_str).unwrap_or("object"),
    }
}
