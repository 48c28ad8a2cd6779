//! Tree Builder — converts a parsed mapping into the canonical [`TreeNode`] form.
//!
//! Mappings and sequences both become composite nodes. Sequence elements are
//! keyed by a synthetic index label (`[0]`, `[1]`, ...) so the diff engine can
//! pair them by position exactly like mapping entries.
//!
//! A container with no entries produces no children, and a node without
//! children is a leaf. Empty mappings and sequences therefore degrade to a
//! `Null` leaf and compare equal to each other and to `null`.

use crate::types::{GenericValue, Mapping};

/// Key of the node returned by [`build_tree`], and of the wrapper entry the
/// parser adds around non-mapping documents.
pub const ROOT_KEY: &str = "root";

/// One node of a document tree.
///
/// A node is composite iff `children` is non-empty; `value` is only
/// meaningful on leaves and is `Null` on composites.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub key: String,
    pub value: GenericValue,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(key: impl Into<String>, value: GenericValue) -> Self {
        Self {
            key: key.into(),
            value,
            children: Vec::new(),
        }
    }

    pub fn composite(key: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            key: key.into(),
            value: GenericValue::Null,
            children,
        }
    }

    pub fn is_composite(&self) -> bool {
        !self.children.is_empty()
    }

    /// Find an immediate child by exact key.
    pub fn child(&self, key: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.key == key)
    }

    /// Flatten this node back into a plain value: a leaf yields its value, a
    /// composite yields a mapping of child keys to their reconstructions.
    ///
    /// Sequences come back as mappings keyed by their index labels.
    pub fn reconstruct(&self) -> GenericValue {
        if !self.is_composite() {
            return self.value.clone();
        }
        GenericValue::Mapping(
            self.children
                .iter()
                .map(|c| (c.key.clone(), c.reconstruct()))
                .collect(),
        )
    }
}

/// Build the tree for a whole document. The returned node is keyed `"root"`.
pub fn build_tree(data: &Mapping) -> TreeNode {
    TreeNode::composite(ROOT_KEY, build_children(data))
}

fn build_children(data: &Mapping) -> Vec<TreeNode> {
    data.iter().map(|(key, value)| build_entry(key, value)).collect()
}

/// Build the node for one `key: value` entry.
///
/// A nested mapping contributes its entries directly as this node's children.
/// Sequence elements recurse through this same function under their index
/// label, which covers mapping elements (renamed to `[i]`), nested sequences
/// and scalars alike.
fn build_entry(key: &str, value: &GenericValue) -> TreeNode {
    match value {
        GenericValue::Mapping(map) => TreeNode::composite(key, build_children(map)),
        GenericValue::Sequence(items) => TreeNode::composite(
            key,
            items
                .iter()
                .enumerate()
                .map(|(i, item)| build_entry(&index_key(i), item))
                .collect(),
        ),
        scalar => TreeNode::leaf(key, scalar.clone()),
    }
}

/// Synthetic key for the zero-based `index`-th sequence element.
pub fn index_key(index: usize) -> String {
    format!("[{}]", index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_key_is_bracketed_zero_based() {
        assert_eq!(index_key(0), "[0]");
        assert_eq!(index_key(12), "[12]");
    }

    #[test]
    fn composite_constructor_without_children_is_a_leaf() {
        let node = TreeNode::composite("empty", Vec::new());
        assert!(!node.is_composite());
        assert_eq!(node.value, GenericValue::Null);
    }

    #[test]
    fn child_lookup_is_exact() {
        let node = TreeNode::composite(
            "root",
            vec![
                TreeNode::leaf("a", GenericValue::from(1)),
                TreeNode::leaf("ab", GenericValue::from(2)),
            ],
        );
        assert_eq!(node.child("ab").map(|c| &c.value), Some(&GenericValue::from(2)));
        assert!(node.child("b").is_none());
    }
}
