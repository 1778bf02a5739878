//! Table view state and row derivation
//!
//! The visible rows are always `filter(sort(first_n(records, window_size)))`.
//! Sorting and searching only act on the records already loaded into the
//! window; they never pull in records past it.

use serde::{Deserialize, Serialize};

use crate::config::ListingConfig;
use crate::institution::{Institution, SortKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The single active sort column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Events that change the view
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Scroll reached the bottom of the page
    Grow,
    /// Column header clicked
    SortBy(SortKey),
    /// Search box edited
    SetQuery(String),
    ClearQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    window_size: usize,
    increment: usize,
    sort: Option<SortState>,
    query: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&ListingConfig::default())
    }
}

impl ViewState {
    pub fn new(config: &ListingConfig) -> Self {
        Self {
            window_size: config.initial_window,
            increment: config.window_increment,
            sort: None,
            query: String::new(),
        }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// True once the window covers every record
    pub fn is_exhausted(&self, total: usize) -> bool {
        self.window_size >= total
    }

    /// Apply one event and return the next state
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::Grow => self.grow(),
            Action::SortBy(key) => self.sort_by(key),
            Action::SetQuery(query) => Self { query, ..self },
            Action::ClearQuery => Self { query: String::new(), ..self },
        }
    }

    /// Widen the window by one increment
    pub fn grow(self) -> Self {
        let window_size = self.window_size.saturating_add(self.increment);
        tracing::debug!("Window grown to {}", window_size);
        Self { window_size, ..self }
    }

    /// Same key while ascending flips to descending, anything else starts ascending
    pub fn sort_by(self, key: SortKey) -> Self {
        let direction = match self.sort {
            Some(SortState { key: active, direction: SortDirection::Ascending }) if active == key => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        tracing::debug!("Sorting by {} {:?}", key.as_str(), direction);
        Self {
            sort: Some(SortState { key, direction }),
            ..self
        }
    }
}

/// A derived table row. `position` is the 1-based index after filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row<'a> {
    pub position: usize,
    pub institution: &'a Institution,
}

/// The first `window_size` records in original order
pub fn materialize(records: &[Institution], window_size: usize) -> &[Institution] {
    &records[..window_size.min(records.len())]
}

/// Order records by the active sort, or keep input order when there is none
pub fn apply_sort<'a>(records: &'a [Institution], sort: Option<SortState>) -> Vec<&'a Institution> {
    let mut sorted: Vec<&Institution> = records.iter().collect();
    if let Some(SortState { key, direction }) = sort {
        sorted.sort_by(|a, b| match direction {
            SortDirection::Ascending => key.compare(a, b),
            SortDirection::Descending => key.compare(b, a),
        });
    }
    sorted
}

/// Keep records whose name contains `query`, ignoring case
pub fn apply_filter<'a>(records: Vec<&'a Institution>, query: &str) -> Vec<&'a Institution> {
    if query.is_empty() {
        return records;
    }
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}

/// Run the window, sort and filter stages in that order
pub fn derive_rows<'a>(records: &'a [Institution], state: &ViewState) -> Vec<Row<'a>> {
    let window = materialize(records, state.window_size);
    let sorted = apply_sort(window, state.sort);
    apply_filter(sorted, &state.query)
        .into_iter()
        .enumerate()
        .map(|(index, institution)| Row { position: index + 1, institution })
        .collect()
}
