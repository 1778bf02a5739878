use leptos::prelude::*;
use web_sys::console;
use campuslist_core::{Dataset, ListingConfig, ViewState};
use crate::components::{InstitutionTable, SearchBar};

#[component]
pub fn App() -> impl IntoView {
    let config = ListingConfig::default();

    match Dataset::embedded() {
        Ok(dataset) => {
            console::log_1(&format!("Loaded {} colleges", dataset.len()).into());
            let state = RwSignal::new(ViewState::new(&config));
            view! {
                <div class="app-container">
                    <SearchBar state=state />
                    <InstitutionTable dataset=dataset state=state config=config />
                </div>
            }.into_any()
        }
        Err(e) => {
            console::error_1(&format!("Failed to load colleges: {}", e).into());
            view! {
                <div class="app-container">
                    <div class="empty-state">
                        <p>{format!("Could not load the college list: {}", e)}</p>
                    </div>
                </div>
            }.into_any()
        }
    }
}
