//! Reading raw AST documents produced by an external parser.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Parse a JSON AST document from text.
///
/// Nesting depth is unbounded: deeply nested expressions are ordinary parser
/// output, so the stack grows on demand instead of hitting a recursion limit.
pub fn parse_document(text: &str) -> Result<Value> {
    let mut json = serde_json::Deserializer::from_str(text);
    json.disable_recursion_limit();
    let document = Value::deserialize(serde_stacker::Deserializer::new(&mut json))
        .context("AST document is not valid JSON")?;
    json.end().context("AST document is not valid JSON")?;
    if !document.is_object() {
        anyhow::bail!("AST document must be a JSON object, found {}", json_type(&document));
    }
    Ok(document)
}

/// Read and parse a JSON AST document. A path of `-` reads standard input.
pub fn load_document(path: &Path) -> Result<Value> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read AST from stdin")?;
        text
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    parse_document(&text).with_context(|| format!("failed to load {}", path.display()))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod loader_tests;
