//! Account Group Picker Component
//!
//! Group dropdown restricted to the subtree configured for customers or
//! vendors. A missing subtree root is shown as a configuration problem
//! instead of offering every group.

use leptos::prelude::*;

use crate::components::GroupSelect;
use crate::context::use_app_context;
use crate::models::{GroupId, PartyKind};
use crate::store::{store_groups, store_groups_state, use_app_store, GroupsState};
use crate::tree::account_group_options;

#[component]
pub fn AccountGroupPicker(
    kind: PartyKind,
    #[prop(into)] selected: Signal<Option<GroupId>>,
    #[prop(into)] on_change: Callback<Option<GroupId>>,
) -> impl IntoView {
    let store = use_app_store();
    let config = use_app_context().config();

    let options = Memo::new(move |_| account_group_options(&store_groups(&store), kind, &config));
    let rows = Signal::derive(move || options.get().unwrap_or_default());
    let problem = Memo::new(move |_| {
        if store_groups_state(&store) != GroupsState::Loaded {
            return None;
        }
        options.with(|result| result.as_ref().err().map(|e| e.to_string()))
    });

    // Once per distinct problem, not on every render
    Effect::new(move |_| {
        if let Some(message) = problem.get() {
            log::warn!("[{}] {}", kind.path().to_uppercase(), message);
        }
    });

    view! {
        {move || match store_groups_state(&store) {
            GroupsState::Pending => view! { <span class="picker-loading">"Loading groups..."</span> }.into_any(),
            GroupsState::Failed(reason) => {
                let text = format!("Groups unavailable: {}", reason);
                view! { <span class="picker-error">{text}</span> }.into_any()
            }
            GroupsState::Loaded => match problem.get() {
                Some(message) => {
                    let title = message.clone();
                    view! { <span class="config-missing" title=title>{message}</span> }.into_any()
                }
                None => view! {
                    <GroupSelect
                        options=rows
                        selected=selected
                        on_change=on_change
                        placeholder="Select account group..."
                    />
                }.into_any(),
            },
        }}
    }
}
