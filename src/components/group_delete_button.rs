//! Group Delete Button
//!
//! Inline two-step delete for a group row. The prompt names the group and
//! warns about subgroups; the button stays disabled while the request runs.

use leptos::prelude::*;

/// Confirmation text for deleting `name`
fn confirm_prompt(name: &str, subgroups: usize) -> String {
    match subgroups {
        0 => format!("Delete \"{}\"?", name),
        1 => format!("Delete \"{}\" and its subgroup?", name),
        n => format!("Delete \"{}\" and its {} subgroups?", name, n),
    }
}

#[component]
pub fn GroupDeleteButton(
    #[prop(into)] group_name: String,
    subgroups: usize,
    /// True while this group's delete request is in flight
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let prompt = confirm_prompt(&group_name, subgroups);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button
                    class="group-delete-btn"
                    title="Delete group"
                    disabled=move || pending.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(true);
                    }
                >
                    {move || if pending.get() { "…" } else { "×" }}
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_prompt_mentions_subgroups() {
        assert_eq!(confirm_prompt("Cash", 0), "Delete \"Cash\"?");
        assert_eq!(confirm_prompt("Current Assets", 1), "Delete \"Current Assets\" and its subgroup?");
        assert_eq!(confirm_prompt("Assets", 4), "Delete \"Assets\" and its 4 subgroups?");
    }
}
