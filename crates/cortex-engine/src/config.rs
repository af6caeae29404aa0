//! Engine configuration: attribute weights and discovery threshold

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Default acceptance threshold for connection discovery
pub const DEFAULT_THRESHOLD: f64 = 70.0;

/// Per-attribute weights for the similarity engine.
///
/// Weights are relative: they are normalized to sum 1.0 when the engine is
/// constructed, so `{2, 2, 2, 2}` behaves exactly like `{1, 1, 1, 1}`. An
/// all-zero table falls back to an equal split rather than dividing by
/// zero. Negative or non-finite weights are rejected by [`validate`].
///
/// [`validate`]: WeightConfig::validate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightConfig {
    /// Weight for title similarity
    pub title: f64,

    /// Weight for description similarity
    pub description: f64,

    /// Weight for content-body similarity
    pub content: f64,

    /// Weight for tag-set similarity
    pub tags: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            title: 0.4,
            description: 0.3,
            content: 0.3,
            tags: 0.3,
        }
    }
}

impl WeightConfig {
    /// Validate the configuration: every weight must be finite and
    /// non-negative. An all-zero table is valid (equal-split fallback).
    pub fn validate(&self) -> Result<(), EngineError> {
        for (attribute, value) in [
            ("title", self.title),
            ("description", self.description),
            ("content", self.content),
            ("tags", self.tags),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidWeight { attribute, value });
            }
        }
        Ok(())
    }

    /// Normalize the weights so they sum to 1.0.
    ///
    /// Assumes a validated table. A zero total falls back to an equal
    /// split across the four attributes.
    pub(crate) fn normalized(&self) -> NormalizedWeights {
        let total = self.title + self.description + self.content + self.tags;
        if total == 0.0 {
            let equal = 1.0 / 4.0;
            return NormalizedWeights {
                title: equal,
                description: equal,
                content: equal,
                tags: equal,
            };
        }
        NormalizedWeights {
            title: self.title / total,
            description: self.description / total,
            content: self.content / total,
            tags: self.tags / total,
        }
    }
}

/// Weights after normalization; always sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NormalizedWeights {
    pub title: f64,
    pub description: f64,
    pub content: f64,
    pub tags: f64,
}

/// Full engine configuration: weights plus discovery threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Per-attribute similarity weights
    pub weights: WeightConfig,

    /// Minimum score (0-100) for a candidate to count as a connection
    pub threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: WeightConfig::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), EngineError> {
        self.weights.validate()?;
        if !self.threshold.is_finite() || !(0.0..=100.0).contains(&self.threshold) {
            return Err(EngineError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, EngineError> {
        toml::from_str(toml_str)
            .map_err(|e| EngineError::Config(format!("failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, EngineError> {
        toml::to_string_pretty(self)
            .map_err(|e| EngineError::Config(format!("failed to serialize TOML: {}", e)))
    }
}
