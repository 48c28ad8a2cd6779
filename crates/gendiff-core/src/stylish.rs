//! Stylish renderer — the diff as a nested brace block.
//!
//! ```text
//! {
//!     common: {
//!       + follow: false
//!         setting1: Value 1
//!       - setting2: 200
//!     }
//!   - timeout: 50
//!   + timeout: 20
//! }
//! ```
//!
//! Every entry at depth `d` starts with `4*d + 2` spaces and a two-character
//! marker: `+ `, `- `, or two spaces for unchanged and nested keys.

use crate::diff::{Change, DiffNode};
use crate::types::GenericValue;

const ADDED: &str = "+ ";
const REMOVED: &str = "- ";
const KEPT: &str = "  ";

/// Render a diff in the stylish format. No trailing newline.
pub fn render_stylish(nodes: &[DiffNode]) -> String {
    let mut out = String::from("{\n");
    render_nodes(nodes, 0, &mut out);
    out.push('}');
    out
}

fn render_nodes(nodes: &[DiffNode], depth: usize, out: &mut String) {
    for node in nodes {
        match &node.change {
            Change::Added { value } => push_entry(out, depth, ADDED, &node.key, value),
            Change::Removed { value } => push_entry(out, depth, REMOVED, &node.key, value),
            Change::Unchanged { value } => push_entry(out, depth, KEPT, &node.key, value),
            Change::Modified { old, new } => {
                push_entry(out, depth, REMOVED, &node.key, old);
                push_entry(out, depth, ADDED, &node.key, new);
            }
            Change::Nested { children } => {
                let indent = marker_indent(depth);
                out.push_str(&format!("{}{}{}: {{\n", indent, KEPT, node.key));
                render_nodes(children, depth + 1, out);
                out.push_str(&format!("{}{}}}\n", indent, KEPT));
            }
        }
    }
}

fn push_entry(out: &mut String, depth: usize, marker: &str, key: &str, value: &GenericValue) {
    out.push_str(&marker_indent(depth));
    out.push_str(marker);
    out.push_str(key);
    out.push_str(": ");
    out.push_str(&format_value(value, depth + 1));
    out.push('\n');
}

/// Format a value appearing on an entry line. `depth` is the depth its own
/// entries would have if it were expanded into a block.
///
/// Mapping keys are emitted in sorted order. The empty string renders as
/// nothing, leaving the line as `key: `. Values taken from a diff are always
/// reconstructed mappings; the sequence arms cover hand-built `DiffNode`s.
fn format_value(value: &GenericValue, depth: usize) -> String {
    match value {
        GenericValue::Null => "null".to_string(),
        GenericValue::String(s) => s.clone(),
        GenericValue::Mapping(map) if map.is_empty() => "{}".to_string(),
        GenericValue::Mapping(map) => {
            let indent = block_indent(depth);
            let mut out = String::from("{\n");
            for (key, child) in map {
                out.push_str(&format!("{}{}: {}\n", indent, key, format_value(child, depth + 1)));
            }
            out.push_str(&closing_indent(depth));
            out.push('}');
            out
        }
        GenericValue::Sequence(items) if items.is_empty() => "[]".to_string(),
        GenericValue::Sequence(items) => {
            let indent = block_indent(depth);
            let mut out = String::from("[\n");
            for item in items {
                out.push_str(&format!("{}{}\n", indent, format_value(item, depth + 1)));
            }
            out.push_str(&closing_indent(depth));
            out.push(']');
            out
        }
        scalar => scalar.to_string(),
    }
}

/// Indentation before the two-character marker of an entry at `depth`.
fn marker_indent(depth: usize) -> String {
    " ".repeat(depth * 4 + 2)
}

/// Indentation of the entries inside an expanded value block.
fn block_indent(depth: usize) -> String {
    " ".repeat(depth * 4 + 4)
}

fn closing_indent(depth: usize) -> String {
    " ".repeat(depth * 4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_diff_is_empty_braces() {
        assert_eq!(render_stylish(&[]), "{\n}");
    }

    #[test]
    fn nested_mapping_value_is_indented_block() {
        let value = GenericValue::from(json!({"key": "value", "doge": {"wow": ""}}));
        let out = format_value(&value, 1);
        assert_eq!(
            out,
            "{\n        doge: {\n            wow: \n        }\n        key: value\n    }"
        );
    }

    #[test]
    fn sequence_value_is_bracket_block() {
        let value = GenericValue::from(json!([1, "two"]));
        assert_eq!(format_value(&value, 1), "[\n        1\n        two\n    ]");
    }

    #[test]
    fn empty_containers_render_literally() {
        assert_eq!(format_value(&GenericValue::from(json!({})), 1), "{}");
        assert_eq!(format_value(&GenericValue::from(json!([])), 1), "[]");
    }
}
