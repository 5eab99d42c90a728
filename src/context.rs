//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::ApiClient;
use crate::config::AppConfig;
use crate::store::{RequestSeq, Resource};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload data from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload data from backend - write
    set_reload_trigger: WriteSignal<u32>,
    config: StoredValue<AppConfig>,
    requests: RwSignal<RequestSeq>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: AppConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
            requests: RwSignal::new(RequestSeq::default()),
        }
    }

    /// Trigger a reload of everything
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Client for the configured backend
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.config.with_value(|c| c.api_base_url.clone()))
    }

    /// Start a fetch of `resource`; only the newest ticket may apply its result
    pub fn issue_ticket(&self, resource: Resource) -> u64 {
        let mut ticket = 0;
        self.requests.update_untracked(|seq| ticket = seq.issue(resource));
        ticket
    }

    pub fn is_current(&self, resource: Resource, ticket: u64) -> bool {
        self.requests.with_untracked(|seq| seq.is_current(resource, ticket))
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
