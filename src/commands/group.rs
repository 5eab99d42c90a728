//! Group Commands
//!
//! Chart-of-accounts group CRUD.

use super::{ApiClient, ApiError};
use crate::models::{GroupInput, GroupRecord};

const GROUP: &str = "group";

// ========================
// Group CRUD Commands
// ========================

pub async fn list_groups(api: &ApiClient) -> Result<Vec<GroupRecord>, ApiError> {
    api.get(&[GROUP]).await
}

pub async fn create_group(api: &ApiClient, input: &GroupInput) -> Result<GroupRecord, ApiError> {
    api.post(&[GROUP], input).await
}

pub async fn update_group(api: &ApiClient, id: &str, input: &GroupInput) -> Result<GroupRecord, ApiError> {
    api.put(&[GROUP, id], input).await
}

pub async fn delete_group(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&[GROUP, id]).await
}
