//! Food categories and their spoilage characteristics
//!
//! Reference values come from the NanoSmart packaging study tables. Shelf-life
//! figures are in days at refrigerated storage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogTable, EstimateError};
use crate::locale::Locale;

/// Food category identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FoodKind {
    /// Meat
    Daging,
    /// Fish
    Ikan,
    /// Fruit
    Buah,
    /// Vegetables
    Sayur,
    /// Processed products
    #[serde(rename = "Produk Olahan")]
    ProdukOlahan,
}

impl FoodKind {
    /// Canonical identifier, as listed to presentation layers
    pub fn id(&self) -> &'static str {
        match self {
            FoodKind::Daging => "Daging",
            FoodKind::Ikan => "Ikan",
            FoodKind::Buah => "Buah",
            FoodKind::Sayur => "Sayur",
            FoodKind::ProdukOlahan => "Produk Olahan",
        }
    }

    /// All categories in listing order
    pub fn all() -> &'static [FoodKind] {
        &[
            FoodKind::Daging,
            FoodKind::Ikan,
            FoodKind::Buah,
            FoodKind::Sayur,
            FoodKind::ProdukOlahan,
        ]
    }

    /// Exact match on the canonical identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.id() == id)
    }

    pub fn display_name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Id => self.id(),
            Locale::En => match self {
                FoodKind::Daging => "Meat",
                FoodKind::Ikan => "Fish",
                FoodKind::Buah => "Fruit",
                FoodKind::Sayur => "Vegetables",
                FoodKind::ProdukOlahan => "Processed products",
            },
        }
    }

    /// Fresh animal protein, which spoils fast enough to need high-barrier packaging
    pub fn is_highly_perishable(&self) -> bool {
        matches!(self, FoodKind::Daging | FoodKind::Ikan)
    }
}

impl fmt::Display for FoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FoodKind {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| EstimateError::not_found(CatalogTable::Food, s))
    }
}

/// Spoilage characteristics of one food category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCategory {
    #[serde(rename = "id")]
    pub kind: FoodKind,

    /// Shelf-life without any nano treatment (days)
    pub shelf_life_untreated_days: f64,

    /// Published shelf-life with treatment (days). Informational only; the
    /// estimator derives its own treated figure.
    pub shelf_life_treated_days: f64,

    /// Temperature above which the category is considered at risk (°C)
    pub temperature_sensitivity_c: f64,

    /// Relative humidity the category keeps best at (%)
    pub humidity_sensitivity_pct: f64,

    /// Microbial load gained per storage day (unitless)
    pub microbial_growth_rate: f64,

    /// Chart color
    pub color: String,
}

impl FoodCategory {
    pub fn id(&self) -> &'static str {
        self.kind.id()
    }
}

// ============================================================================
// Built-in reference table
// ============================================================================

fn entry(
    kind: FoodKind,
    untreated: f64,
    treated: f64,
    temperature: f64,
    humidity: f64,
    growth: f64,
    color: &str,
) -> FoodCategory {
    FoodCategory {
        kind,
        shelf_life_untreated_days: untreated,
        shelf_life_treated_days: treated,
        temperature_sensitivity_c: temperature,
        humidity_sensitivity_pct: humidity,
        microbial_growth_rate: growth,
        color: color.to_string(),
    }
}

/// Built-in food table, in listing order
pub fn builtin_foods() -> Vec<FoodCategory> {
    vec![
        entry(FoodKind::Daging, 7.0, 14.0, 5.0, 70.0, 0.15, "#FF6B6B"),
        entry(FoodKind::Ikan, 3.0, 7.0, 2.0, 80.0, 0.25, "#4ECDC4"),
        entry(FoodKind::Buah, 10.0, 21.0, 8.0, 85.0, 0.08, "#FFD166"),
        entry(FoodKind::Sayur, 7.0, 14.0, 6.0, 90.0, 0.12, "#06D6A0"),
        entry(FoodKind::ProdukOlahan, 30.0, 60.0, 15.0, 60.0, 0.05, "#118AB2"),
    ]
}
