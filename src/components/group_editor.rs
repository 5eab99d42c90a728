//! Group Editor Component
//!
//! Create or edit a group: name, type, parent and active flag.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::GroupSelect;
use crate::context::use_app_context;
use crate::loaders::{flash_status, report_error};
use crate::models::{GroupId, GroupInput, GroupRecord, GroupType};
use crate::store::{store_groups, store_upsert_group, use_app_store};
use crate::tree::parent_options;

/// What the editor panel is doing
#[derive(Clone, Debug, PartialEq)]
pub enum EditorMode {
    Closed,
    Create,
    Edit(GroupRecord),
}

impl EditorMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditorMode::Closed)
    }

    pub fn editing_id(&self) -> Option<GroupId> {
        match self {
            EditorMode::Edit(record) => Some(record.id.clone()),
            _ => None,
        }
    }
}

#[component]
pub fn GroupEditor(mode: RwSignal<EditorMode>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (group_type, set_group_type) = signal::<Option<GroupType>>(Some(GroupType::Assets));
    let (parent, set_parent) = signal::<Option<GroupId>>(None);
    let (is_active, set_is_active) = signal(true);
    let (saving, set_saving) = signal(false);

    // Reset fields whenever a different group (or a blank form) is opened
    Effect::new(move |_| {
        let input = match mode.get() {
            EditorMode::Edit(record) => GroupInput::from_record(&record),
            _ => GroupInput {
                name: String::new(),
                group_type: Some(GroupType::Assets),
                parent_group: None,
                is_active: true,
            },
        };
        set_name.set(input.name);
        set_group_type.set(input.group_type);
        set_parent.set(input.parent_group);
        set_is_active.set(input.is_active);
    });

    // Type stored on the backend that this client cannot offer itself
    let stored_type = Memo::new(move |_| match mode.get() {
        EditorMode::Edit(record) => record.group_type.filter(|t| !t.is_known()),
        _ => None,
    });

    let parents = Memo::new(move |_| {
        let groups = store_groups(&store);
        let editing = mode.with(|m| m.editing_id());
        parent_options(&groups, editing.as_deref())
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let trimmed = name.get().trim().to_string();
        if trimmed.is_empty() || saving.get() {
            return;
        }
        // New groups need a real type; existing ones may keep what they have
        if group_type.get().is_none() && mode.with_untracked(|m| !matches!(m, EditorMode::Edit(_))) {
            return;
        }
        let input = GroupInput {
            name: trimmed,
            group_type: group_type.get(),
            parent_group: parent.get(),
            is_active: is_active.get(),
        };
        let editing = mode.with_untracked(|m| m.editing_id());
        let api = ctx.api();
        set_saving.set(true);

        spawn_local(async move {
            let result = match &editing {
                Some(id) => commands::update_group(&api, id, &input).await,
                None => commands::create_group(&api, &input).await,
            };
            set_saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("[GROUPS] Saved group {} ({})", saved.name, saved.id);
                    flash_status(store, format!("Saved \"{}\"", saved.name), false);
                    store_upsert_group(&store, saved);
                    mode.set(EditorMode::Closed);
                }
                Err(e) => report_error(store, "Failed to save group", &e),
            }
        });
    };

    let title = move || match mode.get() {
        EditorMode::Edit(record) => format!("Edit \"{}\"", record.name),
        _ => "New group".to_string(),
    };

    view! {
        <form class="group-editor" on:submit=save>
            <div class="group-editor-header">{title}</div>

            <label>
                "Name"
                <input
                    type="text"
                    placeholder="Group name..."
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>

            <label>
                "Type"
                <select
                    prop:value=move || group_type.get().map(|t| t.as_str().to_string()).unwrap_or_default()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let picked = GroupType::parse(&value)
                            .or_else(|| stored_type.get_untracked().filter(|t| t.as_str() == value));
                        set_group_type.set(picked);
                    }
                >
                    <Show when=move || group_type.with(|t| t.is_none())>
                        <option value="">"(not set)"</option>
                    </Show>
                    {move || stored_type.get().map(|t| {
                        let value = t.as_str().to_string();
                        let label = format!("{} (kept as is)", value);
                        view! { <option value=value>{label}</option> }
                    })}
                    {GroupType::SELECTABLE.iter().map(|t| {
                        let value = t.as_str().to_string();
                        view! { <option value=value.clone()>{value.clone()}</option> }
                    }).collect_view()}
                </select>
            </label>

            <label>
                "Parent"
                <GroupSelect
                    options=parents
                    selected=parent
                    on_change={move |value: Option<GroupId>| set_parent.set(value)}
                    placeholder="(top level)"
                />
            </label>

            <label class="checkbox-row">
                <input
                    type="checkbox"
                    prop:checked=move || is_active.get()
                    on:change=move |ev| set_is_active.set(event_target_checked(&ev))
                />
                "Active"
            </label>

            <div class="group-editor-actions">
                <button type="submit" disabled=move || saving.get()>"Save"</button>
                <button type="button" class="cancel-btn" on:click=move |_| mode.set(EditorMode::Closed)>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
