//! Subtree Scoping
//!
//! Finds a designated group in a forest and collects it with everything
//! beneath it, e.g. only "Sundry Debtors" groups for customer accounts.

use serde::{Deserialize, Serialize};

use crate::builder::{build_tree, TreeNode};
use crate::error::ScopeError;
use crate::flatten::{flatten, FlattenedNode};
use crate::record::{slugify, GroupRecord};

/// How a subtree root is identified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupMatcher {
    /// Exact display name
    Name(String),
    /// Slug, compared against the record's effective slug
    Slug(String),
}

impl GroupMatcher {
    pub fn name(name: impl Into<String>) -> Self {
        GroupMatcher::Name(name.into())
    }

    pub fn slug(slug: impl Into<String>) -> Self {
        GroupMatcher::Slug(slug.into())
    }

    pub fn matches(&self, record: &GroupRecord) -> bool {
        match self {
            GroupMatcher::Name(name) => record.name == *name,
            GroupMatcher::Slug(slug) => record.effective_slug() == slugify(slug),
        }
    }

    pub fn as_predicate(&self) -> impl Fn(&TreeNode) -> bool + '_ {
        move |node: &TreeNode| self.matches(&node.record)
    }
}

impl std::fmt::Display for GroupMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupMatcher::Name(name) => write!(f, "name \"{}\"", name),
            GroupMatcher::Slug(slug) => write!(f, "slug \"{}\"", slug),
        }
    }
}

/// First node in pre-order satisfying `matcher`
pub fn find_node<'a, F>(roots: &'a [TreeNode], matcher: F) -> Option<&'a TreeNode>
where
    F: Fn(&TreeNode) -> bool,
{
    fn search<'a>(nodes: &'a [TreeNode], matcher: &dyn Fn(&TreeNode) -> bool) -> Option<&'a TreeNode> {
        for node in nodes {
            if matcher(node) {
                return Some(node);
            }
            if let Some(found) = search(&node.children, matcher) {
                return Some(found);
            }
        }
        None
    }

    search(roots, &matcher)
}

/// The first matching node and all of its descendants, self first, in
/// pre-order, as flat records ready to be rebuilt into a tree.
///
/// No match gives an empty list.
pub fn collect_subtree<F>(roots: &[TreeNode], matcher: F) -> Vec<GroupRecord>
where
    F: Fn(&TreeNode) -> bool,
{
    fn collect(node: &TreeNode, out: &mut Vec<GroupRecord>) {
        out.push(node.record.clone());
        for child in &node.children {
            collect(child, out);
        }
    }

    let mut out = Vec::new();
    if let Some(root) = find_node(roots, matcher) {
        collect(root, &mut out);
    }
    out
}

/// Records under the group identified by `matcher`
///
/// A missing root is an error rather than a reason to fall back to the
/// whole list; callers decide what to show instead.
pub fn scope_records(
    records: &[GroupRecord],
    matcher: &GroupMatcher,
) -> Result<Vec<GroupRecord>, ScopeError> {
    let roots = build_tree(records);
    let scoped = collect_subtree(&roots, matcher.as_predicate());
    if scoped.is_empty() {
        return Err(ScopeError::RootNotFound(matcher.clone()));
    }
    Ok(scoped)
}

/// Dropdown options for the subtree identified by `matcher`
pub fn scoped_options(
    records: &[GroupRecord],
    matcher: &GroupMatcher,
) -> Result<Vec<FlattenedNode>, ScopeError> {
    let scoped = scope_records(records, matcher)?;
    Ok(flatten(&build_tree(&scoped)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::node_count;

    fn chart() -> Vec<GroupRecord> {
        vec![
            GroupRecord::new("1", "Assets"),
            GroupRecord::new("2", "Current Assets").with_parent("1"),
            GroupRecord::new("3", "Sundry Debtors").with_parent("2"),
            GroupRecord::new("4", "Retail Customers").with_parent("3"),
            GroupRecord::new("5", "Wholesale Customers").with_parent("3"),
            GroupRecord::new("6", "Hotels").with_parent("5"),
            GroupRecord::new("7", "Liability"),
            GroupRecord::new("8", "Sundry Creditors").with_parent("7").with_slug("creditors"),
            GroupRecord::new("9", "Feed Suppliers").with_parent("8"),
        ]
    }

    fn ids(records: &[GroupRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_collect_subtree_by_name() {
        let roots = build_tree(&chart());
        let matcher = GroupMatcher::name("Sundry Debtors");

        let scoped = collect_subtree(&roots, matcher.as_predicate());

        assert_eq!(ids(&scoped), vec!["3", "4", "5", "6"]);
        let root = find_node(&roots, matcher.as_predicate()).unwrap();
        assert_eq!(scoped.len(), 1 + root.descendant_count());
    }

    #[test]
    fn test_collect_subtree_members_descend_from_root() {
        let roots = build_tree(&chart());
        let scoped = collect_subtree(&roots, |n| n.id() == "3");

        // Rebuilding the scoped records gives a single tree rooted at the match
        let rebuilt = build_tree(&scoped);
        assert_eq!(rebuilt.len(), 1);
        assert_eq!(rebuilt[0].id(), "3");
        assert_eq!(node_count(&rebuilt), scoped.len());
    }

    #[test]
    fn test_collect_subtree_by_slug() {
        let roots = build_tree(&chart());

        let derived = collect_subtree(&roots, GroupMatcher::slug("sundry-debtors").as_predicate());
        assert_eq!(derived.len(), 4);

        let explicit = collect_subtree(&roots, GroupMatcher::slug("Creditors").as_predicate());
        assert_eq!(ids(&explicit), vec!["8", "9"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let roots = build_tree(&chart());
        let scoped = collect_subtree(&roots, |_| false);
        assert!(scoped.is_empty());
        assert!(collect_subtree(&[], |_| true).is_empty());
    }

    #[test]
    fn test_first_match_in_preorder_wins() {
        let records = vec![
            GroupRecord::new("a", "Parties"),
            GroupRecord::new("b", "Misc").with_parent("a"),
            GroupRecord::new("c", "Misc"),
            GroupRecord::new("d", "Old").with_parent("c"),
        ];
        let roots = build_tree(&records);

        let scoped = collect_subtree(&roots, GroupMatcher::name("Misc").as_predicate());

        assert_eq!(ids(&scoped), vec!["b"]);
    }

    #[test]
    fn test_scope_records_missing_root() {
        let matcher = GroupMatcher::slug("sundry-debtors");
        let records = vec![GroupRecord::new("1", "Assets")];

        let result = scope_records(&records, &matcher);

        assert_eq!(result, Err(ScopeError::RootNotFound(matcher)));
    }

    #[test]
    fn test_scoped_options() {
        let options = scoped_options(&chart(), &GroupMatcher::name("Sundry Debtors")).unwrap();

        let names: Vec<&str> = options.iter().map(|o| o.display_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Sundry Debtors", "  Retail Customers", "  Wholesale Customers", "    Hotels"]
        );
        assert_eq!(options[0].level, 0);
    }

    #[test]
    fn test_matcher_from_config_json() {
        let matcher: GroupMatcher = serde_json::from_str(r#"{"slug": "sundry-creditors"}"#).unwrap();
        assert_eq!(matcher, GroupMatcher::slug("sundry-creditors"));
        assert_eq!(matcher.to_string(), "slug \"sundry-creditors\"");
    }
}
