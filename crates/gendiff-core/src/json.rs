//! JSON renderer — a machine-readable change log.
//!
//! ```json
//! {
//!   "diff": [
//!     { "key": "timeout", "type": "updated", "oldValue": 50, "newValue": 20 },
//!     { "key": "common", "type": "nested", "children": [ ... ] }
//!   ]
//! }
//! ```
//!
//! Reconstructed composite values are emitted as native JSON objects.

use crate::diff::{Change, DiffNode};
use serde_json::{json, Value};

/// Render a diff as pretty-printed JSON (two-space indentation).
pub fn render_json(nodes: &[DiffNode]) -> String {
    let document = json!({ "diff": entries(nodes) });
    // `{:#}` is serde_json's infallible pretty printer.
    format!("{:#}", document)
}

fn entries(nodes: &[DiffNode]) -> Value {
    Value::Array(nodes.iter().map(entry).collect())
}

fn entry(node: &DiffNode) -> Value {
    match &node.change {
        Change::Added { value } => json!({
            "key": node.key,
            "type": "added",
            "value": Value::from(value)
        }),
        Change::Removed { value } => json!({
            "key": node.key,
            "type": "removed",
            "value": Value::from(value)
        }),
        Change::Unchanged { value } => json!({
            "key": node.key,
            "type": "unchanged",
            "value": Value::from(value)
        }),
        Change::Modified { old, new } => json!({
            "key": node.key,
            "type": "updated",
            "oldValue": Value::from(old),
            "newValue": Value::from(new)
        }),
        Change::Nested { children } => json!({
            "key": node.key,
            "type": "nested",
            "children": entries(children)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_diff_has_empty_array() {
        let parsed: Value = serde_json::from_str(&render_json(&[])).unwrap();
        assert_eq!(parsed, json!({"diff": []}));
    }
}
