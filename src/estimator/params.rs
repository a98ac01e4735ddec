//! Model parameters
//!
//! Numeric constants of the shelf-life model. Defaults reproduce the
//! reference model exactly; a JSON file may override any subset of them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable constants of the estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParameters {
    /// Storage temperature with no shelf-life penalty (°C)
    pub optimal_temperature_c: f64,

    /// Shelf-life fraction lost per °C above the optimum
    pub temperature_slope_per_c: f64,

    /// Lowest temperature factor
    pub temperature_factor_floor: f64,

    /// Allowed deviation from the food's preferred humidity (percentage points)
    pub humidity_tolerance_pct: f64,

    /// Factor applied when humidity is outside the tolerance
    pub humidity_penalty: f64,

    /// Share of material effectiveness added to the shelf-life multiplier
    pub material_weight: f64,

    /// Microbial level at which food stops being Fresh
    pub degrading_threshold: f64,

    /// Microbial level at which food becomes Unfit
    pub unfit_threshold: f64,

    /// Temperature above which the refrigerate advisory is issued (°C)
    pub warm_storage_threshold_c: f64,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            optimal_temperature_c: 4.0,
            temperature_slope_per_c: 0.1,
            temperature_factor_floor: 0.5,
            humidity_tolerance_pct: 10.0,
            humidity_penalty: 0.8,
            material_weight: 0.5,
            degrading_threshold: 0.3,
            unfit_threshold: 0.7,
            warm_storage_threshold_c: 10.0,
        }
    }
}

impl ModelParameters {
    /// Parse parameters from JSON. Missing fields keep their defaults.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let params: ModelParameters = serde_json::from_str(contents)
            .with_context(|| "Failed to parse model parameters JSON")?;
        params.validate()?;
        Ok(params)
    }

    /// Load parameters from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read model parameters file: {:?}", path))?;
        let params = Self::from_json_str(&contents)
            .with_context(|| format!("Invalid model parameters file: {:?}", path))?;
        tracing::info!("Loaded model parameters from {:?}", path);
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("optimal_temperature_c", self.optimal_temperature_c),
            ("temperature_slope_per_c", self.temperature_slope_per_c),
            ("temperature_factor_floor", self.temperature_factor_floor),
            ("humidity_tolerance_pct", self.humidity_tolerance_pct),
            ("humidity_penalty", self.humidity_penalty),
            ("material_weight", self.material_weight),
            ("degrading_threshold", self.degrading_threshold),
            ("unfit_threshold", self.unfit_threshold),
            ("warm_storage_threshold_c", self.warm_storage_threshold_c),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            anyhow::bail!("{} must be finite, got {}", name, value);
        }

        if self.temperature_slope_per_c < 0.0 {
            anyhow::bail!("temperature_slope_per_c must be >= 0");
        }
        if !(self.temperature_factor_floor > 0.0 && self.temperature_factor_floor <= 1.0) {
            anyhow::bail!("temperature_factor_floor must be in (0, 1]");
        }
        if self.humidity_tolerance_pct < 0.0 {
            anyhow::bail!("humidity_tolerance_pct must be >= 0");
        }
        if !(self.humidity_penalty > 0.0 && self.humidity_penalty <= 1.0) {
            anyhow::bail!("humidity_penalty must be in (0, 1]");
        }
        if self.material_weight < 0.0 {
            anyhow::bail!("material_weight must be >= 0");
        }
        if !(self.degrading_threshold > 0.0 && self.degrading_threshold < self.unfit_threshold) {
            anyhow::bail!(
                "thresholds must satisfy 0 < degrading ({}) < unfit ({})",
                self.degrading_threshold,
                self.unfit_threshold
            );
        }
        Ok(())
    }
}
