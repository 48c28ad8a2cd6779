//! Diff Engine — classifies every key of two document trees.
//!
//! Keys from both sides are merged into one sorted set, and each key is
//! classified as added, removed, unchanged, modified or nested. Composite
//! children that exist on both sides are diffed recursively; everything else
//! is reported as a single value (composites via [`TreeNode::reconstruct`]).
//!
//! The sorted key order chosen here is the order every renderer emits.

use crate::tree::TreeNode;
use crate::types::GenericValue;
use std::collections::BTreeSet;
use std::fmt;
use tracing::trace;

/// Classification of one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Added,
    Removed,
    Unchanged,
    Modified,
    Nested,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Added => "added",
            Status::Removed => "removed",
            Status::Unchanged => "unchanged",
            Status::Modified => "modified",
            Status::Nested => "nested",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to a key, with the values that status carries.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Added { value: GenericValue },
    Removed { value: GenericValue },
    Unchanged { value: GenericValue },
    Modified { old: GenericValue, new: GenericValue },
    Nested { children: Vec<DiffNode> },
}

/// One classified key.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffNode {
    pub key: String,
    pub change: Change,
}

impl DiffNode {
    pub fn new(key: impl Into<String>, change: Change) -> Self {
        Self {
            key: key.into(),
            change,
        }
    }

    pub fn status(&self) -> Status {
        match self.change {
            Change::Added { .. } => Status::Added,
            Change::Removed { .. } => Status::Removed,
            Change::Unchanged { .. } => Status::Unchanged,
            Change::Modified { .. } => Status::Modified,
            Change::Nested { .. } => Status::Nested,
        }
    }

    /// Value on the first side: set for removed, unchanged and modified keys.
    pub fn old_value(&self) -> Option<&GenericValue> {
        match &self.change {
            Change::Removed { value } | Change::Unchanged { value } => Some(value),
            Change::Modified { old, .. } => Some(old),
            Change::Added { .. } | Change::Nested { .. } => None,
        }
    }

    /// Value on the second side: set for added, unchanged and modified keys.
    pub fn new_value(&self) -> Option<&GenericValue> {
        match &self.change {
            Change::Added { value } | Change::Unchanged { value } => Some(value),
            Change::Modified { new, .. } => Some(new),
            Change::Removed { .. } | Change::Nested { .. } => None,
        }
    }

    /// Child diff of a nested key; empty for every other status.
    pub fn children(&self) -> &[DiffNode] {
        match &self.change {
            Change::Nested { children } => children,
            _ => &[],
        }
    }
}

/// Diff the immediate children of two trees, recursing into keys that are
/// composite on both sides. Output is sorted by key (byte order).
pub fn diff(old: &TreeNode, new: &TreeNode) -> Vec<DiffNode> {
    let keys: BTreeSet<&str> = old
        .children
        .iter()
        .chain(new.children.iter())
        .map(|c| c.key.as_str())
        .collect();

    keys.into_iter()
        .filter_map(|key| classify(key, old.child(key), new.child(key)))
        .collect()
}

fn classify(key: &str, old: Option<&TreeNode>, new: Option<&TreeNode>) -> Option<DiffNode> {
    let change = match (old, new) {
        (None, Some(b)) => Change::Added {
            value: b.reconstruct(),
        },
        (Some(a), None) => Change::Removed {
            value: a.reconstruct(),
        },
        (Some(a), Some(b)) if a.is_composite() && b.is_composite() => {
            trace!(key, old = a.children.len(), new = b.children.len(), "descending into nested key");
            Change::Nested {
                children: diff(a, b),
            }
        }
        (Some(a), Some(b))
            if !a.is_composite() && !b.is_composite() && values_equal(&a.value, &b.value) =>
        {
            Change::Unchanged {
                value: a.value.clone(),
            }
        }
        (Some(a), Some(b)) => Change::Modified {
            old: a.reconstruct(),
            new: b.reconstruct(),
        },
        (None, None) => return None,
    };
    Some(DiffNode::new(key, change))
}

/// Leaf equality: two values are equal when their comparison texts are.
///
/// This is looser than type equality, so `50` equals `"50"`. Null compares as
/// `<nil>`, which keeps it apart from the string `"null"`.
pub fn values_equal(a: &GenericValue, b: &GenericValue) -> bool {
    comparison_text(a) == comparison_text(b)
}

fn comparison_text(value: &GenericValue) -> String {
    match value {
        GenericValue::Null => NULL_TEXT.to_string(),
        other => other.to_string(),
    }
}

const NULL_TEXT: &str = "<nil>";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_names() {
        assert_eq!(Status::Added.to_string(), "added");
        assert_eq!(Status::Modified.as_str(), "modified");
        assert_eq!(Status::Nested.as_str(), "nested");
    }

    #[test]
    fn values_equal_is_textual() {
        assert!(values_equal(&GenericValue::from(50), &GenericValue::from("50")));
        assert!(values_equal(&GenericValue::from(true), &GenericValue::from("true")));
        assert!(!values_equal(&GenericValue::from(50), &GenericValue::from(20)));
    }

    #[test]
    fn null_only_equals_null() {
        assert!(values_equal(&GenericValue::Null, &GenericValue::Null));
        assert!(!values_equal(&GenericValue::Null, &GenericValue::from("null")));
        assert!(!values_equal(&GenericValue::from("<nil>"), &GenericValue::Null));
    }

    #[test]
    fn accessors_follow_status() {
        let modified = DiffNode::new(
            "timeout",
            Change::Modified {
                old: GenericValue::from(50),
                new: GenericValue::from(20),
            },
        );
        assert_eq!(modified.status(), Status::Modified);
        assert_eq!(modified.old_value(), Some(&GenericValue::from(50)));
        assert_eq!(modified.new_value(), Some(&GenericValue::from(20)));
        assert!(modified.children().is_empty());

        let added = DiffNode::new("verbose", Change::Added { value: GenericValue::from(true) });
        assert_eq!(added.old_value(), None);
        assert_eq!(added.new_value(), Some(&GenericValue::from(true)));
    }

    #[test]
    fn empty_trees_give_empty_diff() {
        let empty = TreeNode::composite("root", Vec::new());
        assert!(diff(&empty, &empty).is_empty());
    }
}
