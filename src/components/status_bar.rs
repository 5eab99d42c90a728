//! Status Bar Component
//!
//! Latest status message plus a view of the recent log lines.

use leptos::prelude::*;

use crate::store::{store_status, use_app_store};

#[component]
pub fn StatusBar() -> impl IntoView {
    let store = use_app_store();
    let (log_lines, set_log_lines) = signal(Vec::<String>::new());
    let (show_log, set_show_log) = signal(false);

    let toggle_log = move |_: web_sys::MouseEvent| {
        if !show_log.get() {
            let lines = rolling_logger::recent_entries()
                .iter()
                .rev()
                .map(|entry| entry.to_string())
                .collect();
            set_log_lines.set(lines);
        }
        set_show_log.update(|v| *v = !*v);
    };

    view! {
        <footer class="status-bar">
            {move || match store_status(&store) {
                Some(msg) => view! {
                    <span class=if msg.is_error { "status-message error" } else { "status-message" }>
                        {msg.text}
                    </span>
                }.into_any(),
                None => view! { <span class="status-message idle"></span> }.into_any(),
            }}

            <button class="small log-toggle" on:click=toggle_log>
                {move || if show_log.get() { "Hide log" } else { "Recent log" }}
            </button>

            <Show when=move || show_log.get()>
                <ul class="recent-log">
                    {move || log_lines.get().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ul>
            </Show>
        </footer>
    }
}
