//! Estimation output

use serde::{Deserialize, Serialize};

use super::advice::Recommendations;
use super::status::FreshnessStatus;
use crate::catalog::{FoodKind, MaterialKind};
use crate::locale::Locale;

/// Intermediate multipliers behind the adjusted shelf-life (unrounded)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentFactors {
    pub temperature: f64,
    pub humidity: f64,
    pub material: f64,
}

impl AdjustmentFactors {
    /// Combined multiplier applied to the base shelf-life
    pub fn combined(&self) -> f64 {
        self.material * self.temperature * self.humidity
    }
}

/// Outcome of one estimate. Owned by the caller; the core keeps no copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    pub food: FoodKind,
    pub material: MaterialKind,

    pub status: FreshnessStatus,

    /// Shelf-life without treatment (days)
    pub base_shelf_life_days: f64,

    /// Shelf-life with treatment under the given conditions (days, 1 decimal)
    pub adjusted_shelf_life_days: f64,

    /// Days left before the adjusted shelf-life runs out (1 decimal, >= 0)
    pub remaining_days: f64,

    /// Microbial load proxy (2 decimals)
    pub microbial_level: f64,

    pub factors: AdjustmentFactors,

    /// Advisories in display order
    pub recommendations: Recommendations,
}

impl EstimationResult {
    /// Recommendation texts in display order
    pub fn recommendation_lines(&self, locale: Locale) -> Vec<String> {
        self.recommendations.iter().map(|r| r.text(locale)).collect()
    }

    /// Days gained by the treatment over the untreated shelf-life.
    /// Negative when storage conditions outweigh the treatment.
    pub fn shelf_life_gain_days(&self) -> f64 {
        self.adjusted_shelf_life_days - self.base_shelf_life_days
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_days <= 0.0
    }
}
