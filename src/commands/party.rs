//! Party Commands
//!
//! Customers and vendors, as far as account groups are concerned.

use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::models::{Party, PartyKind};

#[derive(Serialize)]
struct AccountGroupArgs<'a> {
    #[serde(rename = "accountGroup")]
    account_group: &'a str,
}

// ========================
// Party Commands
// ========================

pub async fn list_parties(api: &ApiClient, kind: PartyKind) -> Result<Vec<Party>, ApiError> {
    api.get(&[kind.path()]).await
}

pub async fn set_party_account_group(
    api: &ApiClient,
    kind: PartyKind,
    id: &str,
    group_id: &str,
) -> Result<Party, ApiError> {
    api.put(&[kind.path(), id], &AccountGroupArgs { account_group: group_id }).await
}

/// Approve a pending customer, filing it under `group_id`
pub async fn approve_customer(api: &ApiClient, id: &str, group_id: &str) -> Result<Party, ApiError> {
    api.put(
        &[PartyKind::Customer.path(), id, "approve"],
        &AccountGroupArgs { account_group: group_id },
    )
    .await
}
