//! Listing configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scroll::BottomDetection;

/// Records shown before the first scroll
pub const DEFAULT_INITIAL_WINDOW: usize = 10;
/// Records added per scroll-bottom event
pub const DEFAULT_WINDOW_INCREMENT: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse listing config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("window increment must be greater than zero")]
    ZeroIncrement,
    #[error("bottom tolerance must not be negative (got {0})")]
    NegativeTolerance(f64),
}

/// How many records to load and when to load more
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingConfig {
    pub initial_window: usize,
    pub window_increment: usize,
    pub bottom_detection: BottomDetection,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            initial_window: DEFAULT_INITIAL_WINDOW,
            window_increment: DEFAULT_WINDOW_INCREMENT,
            bottom_detection: BottomDetection::default(),
        }
    }
}

impl ListingConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_increment == 0 {
            tracing::warn!("Rejecting listing config with zero window increment");
            return Err(ConfigError::ZeroIncrement);
        }
        if let BottomDetection::Tolerance(px) = self.bottom_detection {
            if px < 0.0 || px.is_nan() {
                tracing::warn!("Rejecting listing config with bottom tolerance {}", px);
                return Err(ConfigError::NegativeTolerance(px));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ListingConfig::default();
        assert_eq!(config.initial_window, 10);
        assert_eq!(config.window_increment, 10);
        assert_eq!(config.bottom_detection, BottomDetection::Tolerance(1.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ListingConfig::from_json(r#"{"windowIncrement":25}"#).unwrap();
        assert_eq!(config.initial_window, 10);
        assert_eq!(config.window_increment, 25);
    }

    #[test]
    fn test_exact_detection_from_json() {
        let config = ListingConfig::from_json(r#"{"bottomDetection":"exact"}"#).unwrap();
        assert_eq!(config.bottom_detection, BottomDetection::Exact);

        let config = ListingConfig::from_json(r#"{"bottomDetection":{"tolerance":4.0}}"#).unwrap();
        assert_eq!(config.bottom_detection, BottomDetection::Tolerance(4.0));
    }

    #[test]
    fn test_zero_increment_rejected() {
        let err = ListingConfig::from_json(r#"{"windowIncrement":0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroIncrement));
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let err = ListingConfig::from_json(r#"{"bottomDetection":{"tolerance":-2.0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NegativeTolerance(_)));
    }

    #[test]
    fn test_unknown_detection_is_parse_error() {
        let err = ListingConfig::from_json(r#"{"bottomDetection":"sometimes"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
