//! Campuslist Core - Dataset, view state and row derivation for the institution table

pub mod config;
pub mod dataset;
pub mod format;
pub mod institution;
pub mod scroll;
pub mod view;

pub use config::{ConfigError, ListingConfig};
pub use dataset::{Dataset, DatasetError};
pub use institution::{FieldValue, Institution, SortKey};
pub use scroll::{BottomDetection, ScrollMetrics, Subscription};
pub use view::{Action, Row, SortDirection, SortState, ViewState};
