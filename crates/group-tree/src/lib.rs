//! Group Tree
//!
//! Chart-of-accounts groups arrive from the backend as a flat list with
//! parent references. This crate turns that list into a forest, scopes it to
//! one subtree and flattens it into indented rows.
//!
//! Pipeline used by every screen:
//! flat records -> [`build_tree`] -> [`collect_subtree`] (optional) ->
//! [`build_tree`] -> [`flatten`].

mod builder;
mod error;
mod expansion;
mod flatten;
mod record;
mod subtree;

pub use builder::{build_forest, build_tree, node_count, Forest, TreeNode};
pub use error::{ScopeError, TreeDiagnostic};
pub use expansion::ExpandedSet;
pub use flatten::{flatten, flatten_from, flatten_visible, FlattenedNode, INDENT_UNIT};
pub use record::{slugify, GroupId, GroupRecord, GroupType, ParentRef};
pub use subtree::{collect_subtree, find_node, scope_records, scoped_options, GroupMatcher};
