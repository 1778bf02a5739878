mod institution_table;
mod scroll_listener;
mod search_bar;

pub use institution_table::InstitutionTable;
pub use search_bar::SearchBar;

use leptos::prelude::*;
use campuslist_core::{Action, ViewState};

/// Run an action through the view reducer
pub(crate) fn dispatch(state: RwSignal<ViewState>, action: Action) {
    state.update(|s| *s = std::mem::take(s).reduce(action));
}
