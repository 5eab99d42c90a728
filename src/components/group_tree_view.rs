//! Group Tree View Component
//!
//! Expandable chart-of-accounts tree with edit/delete affordances.

use leptos::prelude::*;

use group_tree::{node_count, ExpandedSet, TreeNode};

use crate::components::GroupTreeNode;
use crate::models::{GroupId, GroupRecord};

#[component]
pub fn GroupTreeView(
    #[prop(into)] forest: Signal<Vec<TreeNode>>,
    expanded: RwSignal<ExpandedSet>,
    #[prop(into)] on_edit: Callback<GroupRecord>,
    #[prop(into)] on_delete: Callback<GroupId>,
    deleting: RwSignal<Option<GroupId>>,
) -> impl IntoView {
    let expand_all = move |_: web_sys::MouseEvent| forest.with(|roots| expanded.update(|set| set.expand_all(roots)));
    let collapse_all = move |_: web_sys::MouseEvent| expanded.update(|set| set.collapse_all());

    view! {
        <div class="group-tree-view">
            <div class="group-tree-toolbar">
                <button class="small" on:click=expand_all>"Expand all"</button>
                <button class="small" on:click=collapse_all>"Collapse all"</button>
                <span class="group-count">
                    {move || forest.with(|roots| format!("{} groups", node_count(roots)))}
                </span>
            </div>

            <div class="group-tree">
                {move || forest.get().into_iter().map(|root| view! {
                    <GroupTreeNode
                        node=root
                        depth=0
                        expanded=expanded
                        on_edit=on_edit
                        on_delete=on_delete
                        deleting=deleting
                    />
                }).collect_view()}
            </div>

            {move || if forest.with(|roots| roots.is_empty()) {
                view! { <div class="no-groups-message">"No groups yet"</div> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
        </div>
    }
}
