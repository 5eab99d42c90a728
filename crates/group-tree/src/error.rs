//! Diagnostics and Errors
//!
//! Building never fails; problems with the input are reported as
//! diagnostics. Scoping to a subtree can fail when the root is missing.

use serde::{Deserialize, Serialize};

use crate::record::GroupId;
use crate::subtree::GroupMatcher;

/// Something odd about the input noticed while building a forest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeDiagnostic {
    /// Parent reference does not resolve; the record became a root
    Orphan { id: GroupId, missing_parent: GroupId },
    /// Parent chain loops back on itself. `ids` is the loop in chain order,
    /// starting at the record whose parent edge was cut (it became a root).
    Cycle { ids: Vec<GroupId> },
    /// Id seen more than once; lookups resolve to the first occurrence
    DuplicateId { id: GroupId },
}

impl std::fmt::Display for TreeDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeDiagnostic::Orphan { id, missing_parent } => {
                write!(f, "group {} references missing parent {}, shown as root", id, missing_parent)
            }
            TreeDiagnostic::Cycle { ids } => {
                let cut = ids.first().map(String::as_str).unwrap_or("?");
                write!(f, "parent cycle {} broken at {}", ids.join(" -> "), cut)
            }
            TreeDiagnostic::DuplicateId { id } => write!(f, "duplicate group id {}", id),
        }
    }
}

/// Scoping errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// No group matched the configured subtree root
    RootNotFound(GroupMatcher),
}

impl std::fmt::Display for ScopeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScopeError::RootNotFound(matcher) => {
                write!(f, "account group configuration missing: no group with {}", matcher)
            }
        }
    }
}

impl std::error::Error for ScopeError {}
