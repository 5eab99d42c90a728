//! Group Tree Node Component
//!
//! One group row plus, when expanded, its children (recursive).

use leptos::prelude::*;

use group_tree::{ExpandedSet, TreeNode};

use crate::components::GroupDeleteButton;
use crate::models::{GroupId, GroupRecord};

/// Recursive group tree item
#[component]
pub fn GroupTreeNode(
    node: TreeNode,
    depth: usize,
    expanded: RwSignal<ExpandedSet>,
    on_edit: Callback<GroupRecord>,
    on_delete: Callback<GroupId>,
    /// Group whose delete request is in flight
    deleting: RwSignal<Option<GroupId>>,
) -> impl IntoView {
    let subgroups = node.descendant_count();
    let TreeNode { record, children } = node;
    let id = record.id.clone();
    let has_children = !children.is_empty();
    let indent = depth * 16;
    let deletable = record.is_deletable();
    let row_class = if record.is_active() { "group-tree-row" } else { "group-tree-row inactive" };
    let type_label = record.group_type.as_ref().map(|t| t.as_str().to_string()).unwrap_or_default();
    let name = record.name.clone();

    let is_expanded = {
        let id = id.clone();
        move || expanded.with(|set| set.is_expanded(&id))
    };
    let toggle_icon = is_expanded.clone();
    let toggle_id = id.clone();
    let pending_id = id.clone();
    let pending = Signal::derive(move || deleting.with(|d| d.as_deref() == Some(pending_id.as_str())));
    let delete_id = id;

    view! {
        <div class="group-tree-item">
            <div class=row_class style=format!("padding-left: {}px;", indent + 8)>
                // Expand/collapse toggle
                {if has_children {
                    view! {
                        <button
                            class="group-expand-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                expanded.update(|set| {
                                    set.toggle(&toggle_id);
                                });
                            }
                        >
                            {move || if toggle_icon() { "▼" } else { "▶" }}
                        </button>
                    }.into_any()
                } else {
                    view! { <span class="group-expand-placeholder">"·"</span> }.into_any()
                }}

                <span class="group-tree-name">{name.clone()}</span>
                <span class="group-type-badge">{type_label}</span>

                <button
                    class="group-edit-btn"
                    title="Edit"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_edit.run(record.clone());
                    }
                >
                    "✎"
                </button>

                {if deletable {
                    view! {
                        <GroupDeleteButton
                            group_name=name.clone()
                            subgroups=subgroups
                            pending=pending
                            on_confirm=move |_: ()| on_delete.run(delete_id.clone())
                        />
                    }.into_any()
                } else {
                    view! { <span class="group-predefined" title="Predefined group">"🔒"</span> }.into_any()
                }}
            </div>

            // Children (recursive)
            {move || if has_children && is_expanded() {
                let nodes = children.clone();
                view! {
                    <div class="group-tree-children">
                        {nodes.into_iter().map(|child| view! {
                            <GroupTreeNode
                                node=child
                                depth=depth + 1
                                expanded=expanded
                                on_edit=on_edit
                                on_delete=on_delete
                                deleting=deleting
                            />
                        }).collect_view()}
                    </div>
                }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
        </div>
    }
}
