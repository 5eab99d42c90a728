//! Tree Utilities
//!
//! Screen-level helpers on top of `group-tree`.

use std::collections::HashSet;

use group_tree::{
    build_tree, collect_subtree, flatten, scoped_options, FlattenedNode, GroupRecord, GroupType,
    ScopeError, TreeNode,
};

use crate::config::AppConfig;
use crate::models::PartyKind;

/// Groups of one type, or all of them
///
/// A group whose parent has another type shows up as a root.
pub fn filter_by_type(groups: &[GroupRecord], group_type: Option<GroupType>) -> Vec<GroupRecord> {
    match group_type {
        None => groups.to_vec(),
        Some(t) => groups
            .iter()
            .filter(|g| g.group_type.as_ref() == Some(&t))
            .cloned()
            .collect(),
    }
}

/// Forest for the groups page
pub fn group_forest(groups: &[GroupRecord], group_type: Option<GroupType>) -> Vec<TreeNode> {
    build_tree(&filter_by_type(groups, group_type))
}

/// Candidate parents when editing `editing`: every group except the edited
/// one and its descendants, which would create a loop.
pub fn parent_options(groups: &[GroupRecord], editing: Option<&str>) -> Vec<FlattenedNode> {
    let roots = build_tree(groups);
    let Some(editing) = editing else {
        return flatten(&roots);
    };

    let excluded: HashSet<String> = collect_subtree(&roots, |n| n.id() == editing)
        .into_iter()
        .map(|g| g.id)
        .collect();
    flatten(&roots)
        .into_iter()
        .filter(|row| !excluded.contains(row.id()))
        .collect()
}

/// Dropdown options for a customer or vendor account group
pub fn account_group_options(
    groups: &[GroupRecord],
    kind: PartyKind,
    config: &AppConfig,
) -> Result<Vec<FlattenedNode>, ScopeError> {
    scoped_options(groups, &kind.group_root(config))
}

/// Option text for a `<select>`. HTML collapses leading spaces, so the
/// indentation uses non-breaking spaces instead of the row's display name.
pub fn option_label(row: &FlattenedNode) -> String {
    format!("{}{}", "\u{a0}\u{a0}".repeat(row.level), row.record.name)
}

/// "Assets / Current Assets / Cash" for a group id
pub fn group_path(groups: &[GroupRecord], id: &str) -> Option<String> {
    let mut names = Vec::new();
    let mut seen = HashSet::new();
    let mut cursor = Some(id);
    while let Some(current) = cursor {
        if !seen.insert(current) {
            break;
        }
        let Some(group) = groups.iter().find(|g| g.id == current) else {
            break;
        };
        names.push(group.name.as_str());
        cursor = group.parent_id();
    }
    if names.is_empty() {
        return None;
    }
    names.reverse();
    Some(names.join(" / "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use group_tree::GroupMatcher;

    fn make_group(id: &str, name: &str, parent: Option<&str>, group_type: GroupType) -> GroupRecord {
        let record = GroupRecord::new(id, name).with_type(group_type);
        match parent {
            Some(p) => record.with_parent(p),
            None => record,
        }
    }

    fn chart() -> Vec<GroupRecord> {
        vec![
            make_group("1", "Assets", None, GroupType::Assets),
            make_group("2", "Current Assets", Some("1"), GroupType::Assets),
            make_group("3", "Sundry Debtors", Some("2"), GroupType::Assets),
            make_group("4", "Retail", Some("3"), GroupType::Assets),
            make_group("5", "Liability", None, GroupType::Liability),
            make_group("6", "Sundry Creditors", Some("5"), GroupType::Liability),
        ]
    }

    #[test]
    fn test_filter_by_type() {
        let forest = group_forest(&chart(), Some(GroupType::Liability));
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].name(), "Liability");
        assert_eq!(group_forest(&chart(), None).len(), 2);
    }

    #[test]
    fn test_parent_options_exclude_own_subtree() {
        let rows = parent_options(&chart(), Some("2"));
        let ids: Vec<&str> = rows.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["1", "5", "6"]);

        assert_eq!(parent_options(&chart(), None).len(), 6);
    }

    #[test]
    fn test_account_group_options() {
        let config = AppConfig::default();

        let customer = account_group_options(&chart(), PartyKind::Customer, &config).unwrap();
        let names: Vec<&str> = customer.iter().map(|r| r.display_name.as_str()).collect();
        assert_eq!(names, vec!["Sundry Debtors", "  Retail"]);

        let vendor = account_group_options(&chart(), PartyKind::Vendor, &config).unwrap();
        assert_eq!(vendor.len(), 1);
    }

    #[test]
    fn test_account_group_options_missing_root() {
        let mut config = AppConfig::default();
        config.vendor_root = GroupMatcher::name("Creditors (Trade)");

        let result = account_group_options(&chart(), PartyKind::Vendor, &config);

        assert_eq!(
            result,
            Err(ScopeError::RootNotFound(GroupMatcher::name("Creditors (Trade)")))
        );
    }

    #[test]
    fn test_empty_chart_reports_missing_root() {
        let config = AppConfig::default();
        let result = account_group_options(&[], PartyKind::Customer, &config);
        assert_eq!(result, Err(ScopeError::RootNotFound(config.customer_root.clone())));
    }

    #[test]
    fn test_option_label_uses_nbsp() {
        let rows = parent_options(&chart(), None);
        assert_eq!(option_label(&rows[0]), "Assets");
        assert_eq!(option_label(&rows[2]), "\u{a0}\u{a0}\u{a0}\u{a0}Sundry Debtors");
    }

    #[test]
    fn test_group_path() {
        let groups = chart();
        assert_eq!(
            group_path(&groups, "4").as_deref(),
            Some("Assets / Current Assets / Sundry Debtors / Retail")
        );
        assert_eq!(group_path(&groups, "missing"), None);

        let looped = vec![
            make_group("a", "A", Some("b"), GroupType::Income),
            make_group("b", "B", Some("a"), GroupType::Income),
        ];
        assert_eq!(group_path(&looped, "a").as_deref(), Some("B / A"));
    }
}
