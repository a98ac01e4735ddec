//! Freshness verdict

use serde::{Deserialize, Serialize};
use std::fmt;

use super::params::ModelParameters;
use crate::locale::Locale;

/// Qualitative freshness classification derived from the microbial level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessStatus {
    /// Microbial level below the degrading threshold
    Fresh,
    /// Spoilage has started but the food is still usable
    Degrading,
    /// Not fit for consumption
    Unfit,
}

impl FreshnessStatus {
    /// Classify a microbial level. Bands are closed on the low side, so a
    /// level exactly on a threshold falls into the worse band.
    pub fn classify(microbial_level: f64, params: &ModelParameters) -> Self {
        if microbial_level < params.degrading_threshold {
            FreshnessStatus::Fresh
        } else if microbial_level < params.unfit_threshold {
            FreshnessStatus::Degrading
        } else {
            FreshnessStatus::Unfit
        }
    }

    /// Classify with the default thresholds (0.3 / 0.7)
    pub fn from_microbial_level(microbial_level: f64) -> Self {
        Self::classify(microbial_level, &ModelParameters::default())
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (FreshnessStatus::Fresh, Locale::En) => "Fresh",
            (FreshnessStatus::Degrading, Locale::En) => "Degrading",
            (FreshnessStatus::Unfit, Locale::En) => "Unfit",
            (FreshnessStatus::Fresh, Locale::Id) => "Segar",
            (FreshnessStatus::Degrading, Locale::Id) => "Mulai Rusak",
            (FreshnessStatus::Unfit, Locale::Id) => "Tidak Layak",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FreshnessStatus::Fresh => "🟢",
            FreshnessStatus::Degrading => "🟡",
            FreshnessStatus::Unfit => "🔴",
        }
    }

    /// CSS color name for the indicator swatch
    pub fn indicator_color(&self) -> &'static str {
        match self {
            FreshnessStatus::Fresh => "green",
            FreshnessStatus::Degrading => "yellow",
            FreshnessStatus::Unfit => "red",
        }
    }

    pub fn is_consumable(&self) -> bool {
        !matches!(self, FreshnessStatus::Unfit)
    }
}

impl fmt::Display for FreshnessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Locale::En))
    }
}
