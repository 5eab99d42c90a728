//! Expansion State
//!
//! Which nodes of a rendered tree are open. Keyed by group id so it
//! survives rebuilding the forest after a reload.

use std::collections::HashSet;

use crate::builder::TreeNode;
use crate::record::GroupId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSet {
    ids: HashSet<GroupId>,
}

impl ExpandedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn expand(&mut self, id: &str) {
        self.ids.insert(id.to_string());
    }

    pub fn collapse(&mut self, id: &str) {
        self.ids.remove(id);
    }

    /// Flip one node; returns the new state
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Open every node that has children
    pub fn expand_all(&mut self, roots: &[TreeNode]) {
        for node in roots {
            if node.has_children() {
                self.ids.insert(node.record.id.clone());
                self.expand_all(&node.children);
            }
        }
    }

    pub fn collapse_all(&mut self) {
        self.ids.clear();
    }

    /// Forget ids that are no longer in the forest (deleted groups)
    pub fn retain_existing(&mut self, roots: &[TreeNode]) {
        fn gather<'a>(nodes: &'a [TreeNode], seen: &mut HashSet<&'a str>) {
            for node in nodes {
                seen.insert(node.id());
                gather(&node.children, seen);
            }
        }

        let mut seen = HashSet::new();
        gather(roots, &mut seen);
        self.ids.retain(|id| seen.contains(id.as_str()));
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_tree;
    use crate::record::GroupRecord;

    fn sample() -> Vec<TreeNode> {
        build_tree(&[
            GroupRecord::new("1", "Assets"),
            GroupRecord::new("2", "Current Assets").with_parent("1"),
            GroupRecord::new("3", "Cash").with_parent("2"),
            GroupRecord::new("4", "Income"),
        ])
    }

    #[test]
    fn test_toggle() {
        let mut expanded = ExpandedSet::new();
        assert!(expanded.toggle("1"));
        assert!(expanded.is_expanded("1"));
        assert!(!expanded.toggle("1"));
        assert!(!expanded.is_expanded("1"));
    }

    #[test]
    fn test_expand_all_only_opens_parents() {
        let mut expanded = ExpandedSet::new();
        expanded.expand_all(&sample());

        assert!(expanded.is_expanded("1"));
        assert!(expanded.is_expanded("2"));
        assert!(!expanded.is_expanded("3"));
        assert!(!expanded.is_expanded("4"));
        assert_eq!(expanded.len(), 2);

        expanded.collapse_all();
        assert!(expanded.is_empty());
    }

    #[test]
    fn test_retain_existing_drops_deleted_ids() {
        let mut expanded = ExpandedSet::new();
        expanded.expand("1");
        expanded.expand("gone");

        expanded.retain_existing(&sample());

        assert!(expanded.is_expanded("1"));
        assert!(!expanded.is_expanded("gone"));
    }
}
