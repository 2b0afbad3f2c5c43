//! Search configuration.

use pokesort_core::SavedConfig;
use thiserror::Error;

/// A searchable record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    NameEn,
    NameDe,
    /// The zero-padded display number. Matched by exact substring, since
    /// digits carry no typo semantics worth tolerating.
    Number,
}

/// Invalid field-weight configuration. Fatal to index construction; no
/// partial index is ever produced.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("no search fields configured")]
    NoFields,

    #[error("non-positive weight {weight} for field {field:?}")]
    NonPositiveWeight { field: SearchField, weight: f64 },

    #[error("threshold {0} outside (0, 1]")]
    ThresholdOutOfRange(f64),
}

/// Default per-field similarity cutoff.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Field weights and similarity threshold for the fuzzy index.
///
/// Weights divide a field's score, so a higher weight makes hits on that
/// field rank better. The threshold is the worst per-field score (0-1
/// scale, lower is better) still considered a match.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Ordered (field, weight) pairs. Weights must be positive.
    pub fields: Vec<(SearchField, f64)>,
    /// Per-field similarity cutoff in (0, 1].
    pub threshold: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fields: vec![
                (SearchField::NameEn, 1.0),
                (SearchField::NameDe, 1.0),
                (SearchField::Number, 0.8),
            ],
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SearchConfig {
    /// Builds a config from saved user settings.
    pub fn from_saved(saved: &SavedConfig) -> Self {
        Self {
            fields: vec![
                (SearchField::NameEn, saved.weight_name_en),
                (SearchField::NameDe, saved.weight_name_de),
                (SearchField::Number, saved.weight_number),
            ],
            threshold: saved.threshold,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.fields.is_empty() {
            return Err(ConfigError::NoFields);
        }
        for &(field, weight) in &self.fields {
            if weight <= 0.0 {
                return Err(ConfigError::NonPositiveWeight { field, weight });
            }
        }
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(ConfigError::ThresholdOutOfRange(self.threshold));
        }
        Ok(())
    }
}
