use leptos::prelude::*;
use campuslist_core::{Action, ViewState};
use super::dispatch;

#[component]
pub fn SearchBar(state: RwSignal<ViewState>) -> impl IntoView {
    let has_query = move || state.with(|s| !s.query().is_empty());

    view! {
        <div class="search-box">
            <input
                type="text"
                placeholder="Search by college name"
                prop:value=move || state.with(|s| s.query().to_string())
                on:input=move |ev| {
                    dispatch(state, Action::SetQuery(event_target_value(&ev)));
                }
            />
            <Show when=has_query>
                <button
                    class="search-clear"
                    on:click=move |_| dispatch(state, Action::ClearQuery)
                    title="Clear search"
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
