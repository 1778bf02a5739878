//! Sortable college table with infinite scroll

use leptos::prelude::*;
use web_sys::console;
use campuslist_core::format::{format_fee, format_rating};
use campuslist_core::view::derive_rows;
use campuslist_core::{Action, Dataset, Institution, ListingConfig, SortDirection, SortKey, SortState, ViewState};
use super::dispatch;
use super::scroll_listener::on_scroll_bottom;

#[component]
pub fn InstitutionTable(
    dataset: Dataset,
    state: RwSignal<ViewState>,
    #[prop(optional)]
    config: ListingConfig,
) -> impl IntoView {
    let total = dataset.len();
    let dataset = StoredValue::new(dataset);

    on_scroll_bottom(config.bottom_detection, move || {
        console::log_1(&format!(
            "Scrolled to bottom, window {} of {}",
            state.with_untracked(|s| s.window_size()),
            total
        ).into());
        dispatch(state, Action::Grow);
    });

    // Re-derived whenever the window, sort or query changes
    let rows = Memo::new(move |_| {
        let current = state.get();
        dataset.with_value(|d| {
            derive_rows(d.records(), &current)
                .into_iter()
                .map(|row| (row.position, row.institution.clone()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="table-scroll">
            <table class="institution-table">
                <thead>
                    <tr class="table-header">
                        <SortHeader label="CD Rank" key=SortKey::Ranking state=state />
                        <th>"Colleges"</th>
                        <SortHeader label="Course Fees" key=SortKey::Fees state=state />
                        <SortHeader label="Placement" key=SortKey::Placement state=state />
                        <SortHeader label="User Reviews" key=SortKey::UserReviewRating state=state />
                        <SortHeader label="Ranking" key=SortKey::Ranking state=state />
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|(position, institution)| (*position, institution.id)
                        children=move |(position, institution)| {
                            view! { <InstitutionRow position=position institution=institution /> }
                        }
                    />
                </tbody>
            </table>
            {move || rows.with(|r| r.is_empty()).then(|| view! {
                <div class="empty-state">
                    <p>"No colleges match your search."</p>
                </div>
            })}
            {move || (!state.with(|s| s.is_exhausted(total))).then(|| view! {
                <div class="loading-more">"Scroll down to load more..."</div>
            })}
            <div class="institution-count">
                {move || format!("{} colleges", rows.with(|r| r.len()))}
            </div>
        </div>
    }
}

#[component]
fn SortHeader(label: &'static str, key: SortKey, state: RwSignal<ViewState>) -> impl IntoView {
    let indicator = move || match state.with(|s| s.sort()) {
        Some(SortState { key: active, direction }) if active == key => match direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        },
        _ => "",
    };

    view! {
        <th
            class="sortable"
            class:sorted=move || !indicator().is_empty()
            on:click=move |_| dispatch(state, Action::SortBy(key))
        >
            {label}
            <span class="sort-indicator">{indicator}</span>
        </th>
    }
}

#[component]
fn InstitutionRow(position: usize, institution: Institution) -> impl IntoView {
    let featured = institution.featured;
    let fees = format_fee(institution.fees);
    let rating = format_rating(institution.user_review_rating);

    // Only the position, name, fees and rating come from the record; the
    // remaining text is fixed copy
    view! {
        <tr class="institution-row" class:featured=featured>
            <td>{format!("#{}", position)}</td>
            <td>
                <div class="cell-stack">
                    {featured.then(|| view! {
                        <span class="featured-badge">"Featured"</span>
                    })}
                    <span class="institution-name">{institution.name}</span>
                    <span class="cell-muted">"Location, State"</span>
                    <div class="row-links">
                        <a href="#" class="link-apply">"Apply Now"</a>
                        <a href="#" class="link-brochure">"Download Brochure"</a>
                    </div>
                </div>
            </td>
            <td>
                <div class="cell-stack">
                    <span class="cell-value">{fees}</span>
                    <span class="cell-muted">"B.Tech Fees"</span>
                    <a href="#" class="link-apply">"Compare Fees"</a>
                </div>
            </td>
            <td>
                <div class="cell-stack">
                    <span class="cell-value">"₹2,00,000"</span>
                    <span class="cell-muted">"Avg Package"</span>
                    <span class="cell-muted">"Campus Placement"</span>
                </div>
            </td>
            <td>
                <div class="cell-stack">
                    <span class="cell-value">{rating}</span>
                    <span class="cell-muted">"Based on 300 reviews"</span>
                    <span class="cell-highlight">"Best in Social Life"</span>
                </div>
            </td>
            <td>
                <div class="cell-stack">
                    <span class="cell-value">"#1"</span>
                    <span class="cell-muted">"#313 in India"</span>
                    <a href="#" class="link-brochure">"+ More"</a>
                </div>
            </td>
        </tr>
    }
}
