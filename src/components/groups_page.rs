//! Groups Page
//!
//! Chart-of-accounts tree with type filter, editor and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use group_tree::ExpandedSet;

use crate::commands;
use crate::components::{EditorMode, GroupEditor, GroupTreeView};
use crate::context::use_app_context;
use crate::loaders::{flash_status, load_groups, report_error};
use crate::models::{GroupId, GroupRecord, GroupType};
use crate::store::{store_groups, store_remove_group, use_app_store};
use crate::tree::group_forest;

#[component]
pub fn GroupsPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let expanded = RwSignal::new(ExpandedSet::new());
    let editor = RwSignal::new(EditorMode::Closed);
    let deleting = RwSignal::new(None::<GroupId>);
    let (type_filter, set_type_filter) = signal::<Option<GroupType>>(None);

    // Load groups on mount and on every reload
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        load_groups(store, ctx);
    });

    let forest = Memo::new(move |_| group_forest(&store_groups(&store), type_filter.get()));

    // Forget expansion state of groups that disappeared
    Effect::new(move |_| {
        forest.with(|roots| expanded.update(|set| set.retain_existing(roots)));
    });

    let on_edit = move |record: GroupRecord| editor.set(EditorMode::Edit(record));

    let on_delete = move |id: GroupId| {
        if deleting.with_untracked(|d| d.is_some()) {
            return;
        }
        deleting.set(Some(id.clone()));
        let api = ctx.api();
        spawn_local(async move {
            let result = commands::delete_group(&api, &id).await;
            deleting.set(None);
            match result {
                Ok(()) => {
                    log::info!("[GROUPS] Deleted group {}", id);
                    store_remove_group(&store, &id);
                    if editor.with_untracked(|m| m.editing_id().as_deref() == Some(id.as_str())) {
                        editor.set(EditorMode::Closed);
                    }
                    flash_status(store, "Group deleted".to_string(), false);
                    // Children may have been re-parented by the backend
                    ctx.reload();
                }
                Err(e) => report_error(store, "Failed to delete group", &e),
            }
        });
    };

    view! {
        <section class="groups-page">
            <div class="groups-header">
                <h2>"Groups"</h2>

                <select
                    class="type-filter"
                    on:change=move |ev| set_type_filter.set(GroupType::parse(&event_target_value(&ev)))
                >
                    <option value="">"All types"</option>
                    {GroupType::SELECTABLE.iter().map(|t| {
                        let value = t.as_str().to_string();
                        view! { <option value=value.clone()>{value.clone()}</option> }
                    }).collect_view()}
                </select>

                <button on:click=move |_| editor.set(EditorMode::Create)>"+ New group"</button>
            </div>

            <div class="groups-body">
                <GroupTreeView
                    forest=forest
                    expanded=expanded
                    on_edit=on_edit
                    on_delete=on_delete
                    deleting=deleting
                />

                <Show when=move || editor.with(|m| m.is_open())>
                    <GroupEditor mode=editor />
                </Show>
            </div>
        </section>
    }
}
