//! Tree Flattener
//!
//! Depth-first walk producing indented rows for single-level dropdowns.

use serde::Serialize;

use crate::builder::TreeNode;
use crate::expansion::ExpandedSet;
use crate::record::GroupRecord;

/// Indentation added per level
pub const INDENT_UNIT: &str = "  ";

/// A group positioned in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenedNode {
    #[serde(flatten)]
    pub record: GroupRecord,
    pub display_name: String,
    pub level: usize,
}

impl FlattenedNode {
    pub fn id(&self) -> &str {
        &self.record.id
    }
}

/// Pre-order rows for the whole forest, roots at level 0
pub fn flatten(roots: &[TreeNode]) -> Vec<FlattenedNode> {
    flatten_from(roots, 0, "")
}

/// Pre-order rows starting at `level` with `indent` already applied
pub fn flatten_from(roots: &[TreeNode], level: usize, indent: &str) -> Vec<FlattenedNode> {
    let mut rows = Vec::new();
    walk(roots, level, indent, &|_: &TreeNode| true, &mut rows);
    rows
}

/// Like [`flatten`] but children of collapsed nodes are left out
pub fn flatten_visible(roots: &[TreeNode], expanded: &ExpandedSet) -> Vec<FlattenedNode> {
    let mut rows = Vec::new();
    walk(roots, 0, "", &|node: &TreeNode| expanded.is_expanded(node.id()), &mut rows);
    rows
}

fn walk(
    nodes: &[TreeNode],
    level: usize,
    indent: &str,
    descend: &dyn Fn(&TreeNode) -> bool,
    rows: &mut Vec<FlattenedNode>,
) {
    let child_indent = format!("{}{}", indent, INDENT_UNIT);
    for node in nodes {
        rows.push(FlattenedNode {
            record: node.record.clone(),
            display_name: format!("{}{}", indent, node.record.name),
            level,
        });
        if descend(node) {
            walk(&node.children, level + 1, &child_indent, descend, rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build_tree, node_count};

    fn sample() -> Vec<TreeNode> {
        build_tree(&[
            GroupRecord::new("1", "Assets"),
            GroupRecord::new("2", "Current Assets").with_parent("1"),
            GroupRecord::new("3", "Cash").with_parent("2"),
            GroupRecord::new("4", "Bank").with_parent("2"),
            GroupRecord::new("5", "Income"),
        ])
    }

    #[test]
    fn test_flatten_example_chain() {
        let roots = build_tree(&[
            GroupRecord::new("1", "Assets"),
            GroupRecord::new("2", "Current Assets").with_parent("1"),
            GroupRecord::new("3", "Cash").with_parent("2"),
        ]);

        let rows = flatten(&roots);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].display_name, "Assets");
        assert_eq!(rows[0].level, 0);
        assert_eq!(rows[1].display_name, "  Current Assets");
        assert_eq!(rows[1].level, 1);
        assert_eq!(rows[2].display_name, "    Cash");
        assert_eq!(rows[2].level, 2);
        assert_eq!(rows[2].record.name, "Cash");
    }

    #[test]
    fn test_flatten_preorder() {
        let rows = flatten(&sample());
        let order: Vec<&str> = rows.iter().map(|r| r.id()).collect();
        let levels: Vec<usize> = rows.iter().map(|r| r.level).collect();

        assert_eq!(order, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(levels, vec![0, 1, 2, 2, 0]);
        assert_eq!(rows.len(), node_count(&sample()));
    }

    #[test]
    fn test_flatten_from_offset() {
        let rows = flatten_from(&sample(), 2, "--");
        assert_eq!(rows[0].display_name, "--Assets");
        assert_eq!(rows[0].level, 2);
        assert_eq!(rows[1].display_name, "--  Current Assets");
        assert_eq!(rows[1].level, 3);
    }

    #[test]
    fn test_flatten_visible_skips_collapsed() {
        let roots = sample();
        let mut expanded = ExpandedSet::new();
        expanded.expand("1");

        let rows = flatten_visible(&roots, &expanded);
        let order: Vec<&str> = rows.iter().map(|r| r.id()).collect();

        // "2" is collapsed, so Cash and Bank are hidden
        assert_eq!(order, vec!["1", "2", "5"]);
    }

    #[test]
    fn test_flatten_cyclic_input_keeps_every_record() {
        let records = vec![
            GroupRecord::new("a", "A").with_parent("c"),
            GroupRecord::new("b", "B").with_parent("a"),
            GroupRecord::new("c", "C").with_parent("b"),
            GroupRecord::new("d", "D"),
        ];
        assert_eq!(flatten(&build_tree(&records)).len(), records.len());
    }

    #[test]
    fn test_serialized_row_shape() {
        let rows = flatten(&sample());
        let json = serde_json::to_value(&rows[1]).unwrap();
        assert_eq!(json["displayName"], "  Current Assets");
        assert_eq!(json["level"], 1);
        assert_eq!(json["id"], "2");
        assert!(json.get("children").is_none());
    }
}
