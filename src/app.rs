//! Poultry Admin App
//!
//! Tabbed layout: account groups, customers and vendors.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{GroupsPage, PartyAccountsPanel, StatusBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::PartyKind;
use crate::store::AppState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Groups,
    Customers,
    Vendors,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Groups, Tab::Customers, Tab::Vendors];

    fn label(self) -> &'static str {
        match self {
            Tab::Groups => "Groups",
            Tab::Customers => "Customers",
            Tab::Vendors => "Vendors",
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (active_tab, set_active_tab) = signal(Tab::Groups);

    // Provide context to all children
    let ctx = AppContext::new(signal(0u32), config);
    provide_context(ctx);
    provide_context(Store::new(AppState::new()));

    view! {
        <div class="app-layout">
            <nav class="tab-bar">
                {Tab::ALL.iter().map(|&tab| view! {
                    <button
                        class=move || if active_tab.get() == tab { "tab active" } else { "tab" }
                        on:click=move |_| set_active_tab.set(tab)
                    >
                        {tab.label()}
                    </button>
                }).collect_view()}
                <button class="tab refresh-btn" title="Reload" on:click=move |_| ctx.reload()>"⟳"</button>
            </nav>

            <main class="main-content">
                {move || match active_tab.get() {
                    Tab::Groups => view! { <GroupsPage /> }.into_any(),
                    Tab::Customers => view! { <PartyAccountsPanel kind=PartyKind::Customer /> }.into_any(),
                    Tab::Vendors => view! { <PartyAccountsPanel kind=PartyKind::Vendor /> }.into_any(),
                }}
            </main>

            <StatusBar />
        </div>
    }
}
