//! Frontend Models
//!
//! Data structures matching backend entities. Group records live in the
//! `group-tree` crate and are re-exported here.

use serde::{Deserialize, Serialize};

pub use group_tree::{GroupId, GroupRecord, GroupType};

use crate::config::AppConfig;
use group_tree::GroupMatcher;

/// Create/update payload for `POST /group` and `PUT /group/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInput {
    pub name: String,
    /// Omitted when the record never had a type, so an update leaves it alone
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub group_type: Option<GroupType>,
    pub parent_group: Option<GroupId>,
    pub is_active: bool,
}

impl GroupInput {
    /// Prefill from an existing record (editing)
    pub fn from_record(record: &GroupRecord) -> Self {
        Self {
            name: record.name.clone(),
            group_type: record.group_type.clone(),
            parent_group: record.parent_id().map(str::to_string),
            is_active: record.is_active(),
        }
    }
}

/// Reference to the account group a customer or vendor is filed under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountGroupRef {
    pub id: GroupId,
    #[serde(default)]
    pub name: Option<String>,
}

/// A customer or vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub account_group: Option<AccountGroupRef>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Party {
    /// Customers registered through the app wait for approval
    pub fn is_pending(&self) -> bool {
        self.status
            .as_deref()
            .map(|s| s.eq_ignore_ascii_case("pending"))
            .unwrap_or(false)
    }

    pub fn account_group_id(&self) -> Option<&str> {
        self.account_group.as_ref().map(|g| g.id.as_str())
    }
}

/// Which kind of party a screen works with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartyKind {
    Customer,
    Vendor,
}

impl PartyKind {
    /// Collection path on the backend
    pub fn path(&self) -> &'static str {
        match self {
            PartyKind::Customer => "customer",
            PartyKind::Vendor => "vendor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PartyKind::Customer => "Customers",
            PartyKind::Vendor => "Vendors",
        }
    }

    /// Subtree the account group must come from
    pub fn group_root(&self, config: &AppConfig) -> GroupMatcher {
        match self {
            PartyKind::Customer => config.customer_root.clone(),
            PartyKind::Vendor => config.vendor_root.clone(),
        }
    }
}
