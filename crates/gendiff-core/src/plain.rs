//! Plain renderer — one sentence per changed property, addressed by its
//! dotted path from the document root (`common.setting6.doge.wow`).
//!
//! Unchanged keys produce nothing, and a nested key only contributes the
//! sentences of its descendants.

use crate::diff::{Change, DiffNode};
use crate::types::GenericValue;

/// Render a diff in the plain format. Lines are separated by `\n` and the
/// result carries no trailing whitespace.
pub fn render_plain(nodes: &[DiffNode]) -> String {
    let mut lines = Vec::new();
    collect_lines(nodes, "", &mut lines);
    lines.join("\n").trim_end().to_string()
}

fn collect_lines(nodes: &[DiffNode], parent: &str, lines: &mut Vec<String>) {
    for node in nodes {
        let path = property_path(parent, &node.key);
        match &node.change {
            Change::Added { value } => lines.push(format!(
                "Property '{}' was added with value: {}",
                path,
                plain_value(value)
            )),
            Change::Removed { .. } => lines.push(format!("Property '{}' was removed", path)),
            Change::Modified { old, new } => lines.push(format!(
                "Property '{}' was updated. From {} to {}",
                path,
                plain_value(old),
                plain_value(new)
            )),
            Change::Nested { children } => collect_lines(children, &path, lines),
            Change::Unchanged { .. } => {}
        }
    }
}

fn property_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Strings are single-quoted and composites collapse to `[complex value]`.
/// Sequences only reach here through hand-built `DiffNode`s.
fn plain_value(value: &GenericValue) -> String {
    match value {
        GenericValue::Null => "null".to_string(),
        GenericValue::String(s) => format!("'{}'", s),
        GenericValue::Mapping(_) | GenericValue::Sequence(_) => "[complex value]".to_string(),
        scalar => scalar.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn path_joins_with_dots() {
        assert_eq!(property_path("", "common"), "common");
        assert_eq!(property_path("common.setting6", "doge"), "common.setting6.doge");
    }

    #[test]
    fn value_formatting() {
        assert_eq!(plain_value(&GenericValue::Null), "null");
        assert_eq!(plain_value(&GenericValue::from("")), "''");
        assert_eq!(plain_value(&GenericValue::from("so much")), "'so much'");
        assert_eq!(plain_value(&GenericValue::from(20)), "20");
        assert_eq!(plain_value(&GenericValue::from(false)), "false");
        assert_eq!(plain_value(&GenericValue::from(json!({"a": 1}))), "[complex value]");
        assert_eq!(plain_value(&GenericValue::from(json!([1]))), "[complex value]");
    }

    #[test]
    fn empty_diff_renders_empty_string() {
        assert_eq!(render_plain(&[]), "");
    }
}
