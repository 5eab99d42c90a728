//! Party Accounts Panel
//!
//! Customers or vendors with their account group. Groups can be reassigned,
//! and pending customers approved into a group.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::AccountGroupPicker;
use crate::context::use_app_context;
use crate::loaders::{flash_status, load_groups, load_parties, report_error};
use crate::models::{GroupId, Party, PartyKind};
use crate::store::{store_groups, store_parties, store_update_party, use_app_store};
use crate::tree::group_path;

/// One customer/vendor row
#[component]
fn PartyRow(kind: PartyKind, party: Party) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let party_id = party.id.clone();
    let current_group = party.account_group_id().map(str::to_string);
    let pending = kind == PartyKind::Customer && party.is_pending();
    let (choice, set_choice) = signal(current_group.clone());
    let (busy, set_busy) = signal(false);

    let group_label = {
        let current_group = current_group.clone();
        let fallback = party.account_group.as_ref().and_then(|g| g.name.clone());
        move || {
            current_group
                .as_deref()
                .and_then(|id| group_path(&store_groups(&store), id))
                .or_else(|| fallback.clone())
                .unwrap_or_else(|| "—".to_string())
        }
    };

    let changed = move || choice.get().is_some() && choice.get() != current_group;

    let submit = move |approve: bool| {
        let Some(group_id) = choice.get_untracked() else {
            return;
        };
        let id = party_id.clone();
        let api = ctx.api();
        set_busy.set(true);
        spawn_local(async move {
            let result = if approve {
                commands::approve_customer(&api, &id, &group_id).await
            } else {
                commands::set_party_account_group(&api, kind, &id, &group_id).await
            };
            set_busy.set(false);
            match result {
                Ok(updated) => {
                    let verb = if approve { "Approved" } else { "Updated" };
                    log::info!("[{}] {} {} -> group {}", kind.path().to_uppercase(), verb, id, group_id);
                    flash_status(store, format!("{} {}", verb, updated.name), false);
                    store_update_party(&store, kind, updated);
                }
                Err(e) => report_error(store, &format!("Failed to update {}", id), &e),
            }
        });
    };
    let approve = submit.clone();

    view! {
        <tr class=if pending { "party-row pending" } else { "party-row" }>
            <td class="party-name">{party.name.clone()}</td>
            <td class="party-group">{group_label}</td>
            <td class="party-picker">
                <AccountGroupPicker
                    kind=kind
                    selected=choice
                    on_change={move |value: Option<GroupId>| set_choice.set(value)}
                />
                <button
                    class="small"
                    disabled=move || busy.get() || !changed()
                    on:click=move |_| submit(false)
                >
                    "Save"
                </button>
            </td>
            {(kind == PartyKind::Customer).then(|| view! {
                <td class="party-approval">
                    {if pending {
                        view! {
                            <button
                                class="small approve-btn"
                                disabled=move || busy.get() || choice.get().is_none()
                                on:click=move |_| approve(true)
                            >
                                "Approve"
                            </button>
                        }.into_any()
                    } else {
                        view! { <span class="approved">"✓"</span> }.into_any()
                    }}
                </td>
            })}
        </tr>
    }
}

#[component]
pub fn PartyAccountsPanel(kind: PartyKind) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    // Groups feed the pickers; load both on mount and on every reload
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        load_groups(store, ctx);
        load_parties(store, ctx, kind);
    });

    let parties = move || store_parties(&store, kind);

    view! {
        <section class="party-panel">
            <h2>{kind.label()}</h2>
            <table class="party-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Account group"</th>
                        <th>"Change group"</th>
                        {(kind == PartyKind::Customer).then(|| view! { <th>"Approval"</th> })}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=parties
                        key={|party: &Party| (party.id.clone(), party.account_group_id().map(str::to_string), party.status.clone())}
                        children=move |party| view! { <PartyRow kind=kind party=party /> }
                    />
                </tbody>
            </table>
            {move || if store_parties(&store, kind).is_empty() {
                view! { <div class="no-parties-message">{format!("No {} yet", kind.label().to_lowercase())}</div> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
        </section>
    }
}
