//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{GroupRecord, Party, PartyKind};

/// Latest message shown in the status bar
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    /// Distinguishes repeated identical messages when auto-clearing
    pub id: u64,
    pub text: String,
    pub is_error: bool,
}

/// Whether the group list has arrived
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GroupsState {
    #[default]
    Pending,
    Loaded,
    /// Last fetch failed and nothing was loaded before it
    Failed(String),
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All account groups, flat, as returned by the backend
    pub groups: Vec<GroupRecord>,
    /// Distinguishes "not loaded yet" and "failed" from an empty chart
    pub groups_state: GroupsState,
    pub customers: Vec<Party>,
    pub vendors: Vec<Party>,
    pub status: Option<StatusMessage>,
    /// Counter feeding `StatusMessage::id`
    pub status_seq: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Request Sequencing
// ========================

/// Collections fetched independently
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Groups,
    Customers,
    Vendors,
}

impl Resource {
    fn slot(self) -> usize {
        match self {
            Resource::Groups => 0,
            Resource::Customers => 1,
            Resource::Vendors => 2,
        }
    }

    pub fn parties(kind: PartyKind) -> Self {
        match kind {
            PartyKind::Customer => Resource::Customers,
            PartyKind::Vendor => Resource::Vendors,
        }
    }
}

/// Tickets for in-flight fetches. Only the newest ticket per resource may
/// write its response, so a slow earlier response cannot overwrite a
/// newer one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: [u64; 3],
}

impl RequestSeq {
    pub fn issue(&mut self, resource: Resource) -> u64 {
        let slot = &mut self.latest[resource.slot()];
        *slot += 1;
        *slot
    }

    pub fn is_current(&self, resource: Resource, ticket: u64) -> bool {
        self.latest[resource.slot()] == ticket
    }
}

// ========================
// Store Helper Functions
// ========================

/// All groups (tracked)
pub fn store_groups(store: &AppStore) -> Vec<GroupRecord> {
    store.groups().get()
}

pub fn store_groups_state(store: &AppStore) -> GroupsState {
    store.groups_state().get()
}

pub fn store_set_groups(store: &AppStore, groups: Vec<GroupRecord>) {
    store.groups().set(groups);
    store.groups_state().set(GroupsState::Loaded);
}

/// Record a failed fetch. Groups loaded earlier stay usable.
pub fn store_groups_failed(store: &AppStore, reason: String) {
    let state = store.groups_state();
    if state.with_untracked(|s| *s != GroupsState::Loaded) {
        state.set(GroupsState::Failed(reason));
    }
}

/// Insert a new group or replace the one with the same id
pub fn store_upsert_group(store: &AppStore, group: GroupRecord) {
    let field = store.groups();
    let mut groups = field.write();
    match groups.iter_mut().find(|g| g.id == group.id) {
        Some(existing) => *existing = group,
        None => groups.push(group),
    }
}

pub fn store_remove_group(store: &AppStore, group_id: &str) {
    let field = store.groups();
    field.write().retain(|g| g.id != group_id);
}

/// Customers or vendors (tracked)
pub fn store_parties(store: &AppStore, kind: PartyKind) -> Vec<Party> {
    match kind {
        PartyKind::Customer => store.customers().get(),
        PartyKind::Vendor => store.vendors().get(),
    }
}

pub fn store_set_parties(store: &AppStore, kind: PartyKind, parties: Vec<Party>) {
    match kind {
        PartyKind::Customer => store.customers().set(parties),
        PartyKind::Vendor => store.vendors().set(parties),
    }
}

/// Update a party in the store by ID
pub fn store_update_party(store: &AppStore, kind: PartyKind, updated: Party) {
    let replace = |parties: &mut Vec<Party>| {
        if let Some(party) = parties.iter_mut().find(|p| p.id == updated.id) {
            *party = updated.clone();
        }
    };
    match kind {
        PartyKind::Customer => {
            let field = store.customers();
            replace(&mut field.write());
        }
        PartyKind::Vendor => {
            let field = store.vendors();
            replace(&mut field.write());
        }
    }
}

pub fn store_status(store: &AppStore) -> Option<StatusMessage> {
    store.status().get()
}

/// Show a message; returns its id
pub fn store_set_status(store: &AppStore, text: String, is_error: bool) -> u64 {
    let id = {
        let field = store.status_seq();
        let mut seq = field.write();
        *seq += 1;
        *seq
    };
    store.status().set(Some(StatusMessage { id, text, is_error }));
    id
}

/// Clear the status, but only if it is still message `id`
pub fn store_clear_status(store: &AppStore, id: u64) {
    let current = store.status().with_untracked(|s| s.as_ref().map(|m| m.id));
    if current == Some(id) {
        store.status().set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let mut seq = RequestSeq::default();
        let first = seq.issue(Resource::Groups);
        let second = seq.issue(Resource::Groups);

        assert!(!seq.is_current(Resource::Groups, first));
        assert!(seq.is_current(Resource::Groups, second));
    }

    #[test]
    fn test_resources_are_independent() {
        let mut seq = RequestSeq::default();
        let groups = seq.issue(Resource::Groups);
        let customers = seq.issue(Resource::Customers);
        seq.issue(Resource::Vendors);
        seq.issue(Resource::Vendors);

        assert!(seq.is_current(Resource::Groups, groups));
        assert!(seq.is_current(Resource::Customers, customers));
        assert!(!seq.is_current(Resource::Vendors, 1));
        assert_eq!(Resource::parties(PartyKind::Vendor), Resource::Vendors);
    }

    fn make_store() -> AppStore {
        let owner = Owner::new();
        owner.set();
        // Keep the owner alive for the rest of the test so the store isn't disposed.
        std::mem::forget(owner);
        Store::new(AppState::new())
    }

    #[test]
    fn test_empty_chart_counts_as_loaded() {
        let store = make_store();
        assert_eq!(store_groups_state(&store), GroupsState::Pending);

        store_set_groups(&store, Vec::new());

        assert_eq!(store_groups_state(&store), GroupsState::Loaded);
        assert!(store_groups(&store).is_empty());
    }

    #[test]
    fn test_failed_fetch_keeps_earlier_groups() {
        let store = make_store();
        store_groups_failed(&store, "Network error: offline".to_string());
        assert_eq!(
            store_groups_state(&store),
            GroupsState::Failed("Network error: offline".to_string())
        );

        store_set_groups(&store, vec![GroupRecord::new("1", "Assets")]);
        store_groups_failed(&store, "Network error: offline".to_string());
        assert_eq!(store_groups_state(&store), GroupsState::Loaded);
        assert_eq!(store_groups(&store).len(), 1);
    }
}
