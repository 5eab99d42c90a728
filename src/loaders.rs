//! Data Loaders
//!
//! Fetch collections into the store and report failures in the status bar.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

use crate::commands::{self, ApiError};
use crate::context::AppContext;
use crate::models::PartyKind;
use crate::store::{
    store_clear_status, store_groups_failed, store_set_groups, store_set_parties, store_set_status, AppStore, Resource,
};

/// How long a status message stays up
const STATUS_TTL_MS: u32 = 4000;

/// What to do with a finished fetch
#[derive(Debug, PartialEq)]
enum Settled<T> {
    /// A newer request for the same resource is in flight or done
    Stale,
    Apply(T),
    Fail(ApiError),
}

/// Only the newest request may touch the store, success or failure
fn settle<T>(is_current: bool, result: Result<T, ApiError>) -> Settled<T> {
    match result {
        _ if !is_current => Settled::Stale,
        Ok(value) => Settled::Apply(value),
        Err(e) => Settled::Fail(e),
    }
}

/// Reload all groups
pub fn load_groups(store: AppStore, ctx: AppContext) {
    let ticket = ctx.issue_ticket(Resource::Groups);
    let api = ctx.api();
    spawn_local(async move {
        let result = commands::list_groups(&api).await;
        match settle(ctx.is_current(Resource::Groups, ticket), result) {
            Settled::Stale => log::debug!("[GROUPS] Dropping stale response (ticket {})", ticket),
            Settled::Apply(groups) => {
                log::info!("[GROUPS] Loaded {} groups", groups.len());
                store_set_groups(&store, groups);
            }
            Settled::Fail(e) => {
                store_groups_failed(&store, e.to_string());
                report_error(store, "Failed to load groups", &e);
            }
        }
    });
}

/// Reload customers or vendors
pub fn load_parties(store: AppStore, ctx: AppContext, kind: PartyKind) {
    let resource = Resource::parties(kind);
    let ticket = ctx.issue_ticket(resource);
    let api = ctx.api();
    spawn_local(async move {
        let result = commands::list_parties(&api, kind).await;
        match settle(ctx.is_current(resource, ticket), result) {
            Settled::Stale => {
                log::debug!("[{}] Dropping stale response (ticket {})", kind.path().to_uppercase(), ticket)
            }
            Settled::Apply(parties) => {
                log::info!("[{}] Loaded {} records", kind.path().to_uppercase(), parties.len());
                store_set_parties(&store, kind, parties);
            }
            Settled::Fail(e) => report_error(store, &format!("Failed to load {}", kind.label().to_lowercase()), &e),
        }
    });
}

/// Log an API failure and show it
pub fn report_error(store: AppStore, context: &str, err: &ApiError) {
    log::error!("[API] {}: {}", context, err);
    flash_status(store, format!("{}: {}", context, err), true);
}

/// Show a message that disappears after a few seconds
pub fn flash_status(store: AppStore, text: String, is_error: bool) {
    let id = store_set_status(&store, text, is_error);
    spawn_local(async move {
        TimeoutFuture::new(STATUS_TTL_MS).await;
        store_clear_status(&store, id);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superseded_failure_is_dropped() {
        let late: Result<Vec<u32>, ApiError> = Err(ApiError::Network("timed out".to_string()));
        assert_eq!(settle(false, late), Settled::Stale);

        assert_eq!(settle(false, Ok(vec![1, 2])), Settled::Stale);
    }

    #[test]
    fn test_current_response_applies() {
        assert_eq!(settle(true, Ok(vec![1, 2])), Settled::Apply(vec![1, 2]));
        assert_eq!(
            settle::<Vec<u32>>(true, Err(ApiError::Unauthorized)),
            Settled::Fail(ApiError::Unauthorized)
        );
    }
}
