//! The static institution collection
//!
//! Loaded once at startup from JSON. Records are never created, changed or
//! removed afterwards.

use std::collections::HashSet;

use thiserror::Error;

use crate::institution::Institution;

/// Dataset bundled into the build
const EMBEDDED_JSON: &str = include_str!("../data/colleges.json");

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate institution id {0}")]
    DuplicateId(u64),
    #[error("institution {id} has an empty name")]
    EmptyName { id: u64 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Institution>,
}

impl Dataset {
    /// Build a dataset from records, rejecting duplicate ids and blank names
    pub fn new(records: Vec<Institution>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(DatasetError::DuplicateId(record.id));
            }
            if record.name.trim().is_empty() {
                return Err(DatasetError::EmptyName { id: record.id });
            }
        }
        Ok(Self { records })
    }

    /// Parse a JSON array of institution records
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<Institution> = serde_json::from_str(json)?;
        let dataset = Self::new(records)?;
        tracing::info!("Loaded {} institutions", dataset.len());
        Ok(dataset)
    }

    /// The dataset compiled into the binary
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_json(EMBEDDED_JSON)
    }

    pub fn records(&self) -> &[Institution] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
