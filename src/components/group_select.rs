//! Group Select Component
//!
//! Single-level dropdown over flattened groups, indented by depth.

use leptos::prelude::*;

use group_tree::FlattenedNode;

use crate::models::GroupId;
use crate::tree::option_label;

#[component]
pub fn GroupSelect(
    #[prop(into)] options: Signal<Vec<FlattenedNode>>,
    #[prop(into)] selected: Signal<Option<GroupId>>,
    #[prop(into)] on_change: Callback<Option<GroupId>>,
    #[prop(into, default = "Select group...".to_string())] placeholder: String,
) -> impl IntoView {
    view! {
        <select
            class="group-select"
            on:change=move |ev| {
                let value = event_target_value(&ev);
                on_change.run(if value.is_empty() { None } else { Some(value) });
            }
        >
            <option value="" prop:selected=move || selected.with(|s| s.is_none())>{placeholder}</option>
            {move || options.get().into_iter().map(|row| {
                let id = row.record.id.clone();
                let current = id.clone();
                let label = option_label(&row);
                let class = if row.record.is_active() { "" } else { "inactive" };
                view! {
                    <option
                        value=id
                        class=class
                        prop:selected=move || selected.with(|s| s.as_deref() == Some(current.as_str()))
                    >
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
