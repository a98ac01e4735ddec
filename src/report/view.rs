//! View models for presentation layers

use serde::Serialize;

use crate::catalog::Catalog;
use crate::estimator::factors::round_to;
use crate::estimator::{EstimationResult, FreshnessStatus};
use crate::locale::Locale;

const UNTREATED_BAR_COLOR: &str = "#FF6B6B";
const TREATED_BAR_COLOR: &str = "#4ECDC4";

/// One bar of the shelf-life comparison chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonBar {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// Untreated vs treated shelf-life, ready for a bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShelfLifeComparison {
    pub title: String,
    pub y_axis_label: String,
    pub bars: Vec<ComparisonBar>,
}

impl ShelfLifeComparison {
    pub fn from_result(result: &EstimationResult, locale: Locale) -> Self {
        let (title, axis, untreated, treated) = match locale {
            Locale::En => ("Shelf-Life Comparison", "Days", "Without Nano", "With Nano"),
            Locale::Id => ("Perbandingan Umur Simpan", "Hari", "Tanpa Nano", "Dengan Nano"),
        };
        Self {
            title: title.to_string(),
            y_axis_label: axis.to_string(),
            bars: vec![
                ComparisonBar {
                    label: untreated.to_string(),
                    value: result.base_shelf_life_days,
                    color: UNTREATED_BAR_COLOR.to_string(),
                },
                ComparisonBar {
                    label: treated.to_string(),
                    value: result.adjusted_shelf_life_days,
                    color: TREATED_BAR_COLOR.to_string(),
                },
            ],
        }
    }
}

/// Everything a result page renders, with labels already localized
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub locale: Locale,
    pub food: String,
    pub material: String,
    pub status: FreshnessStatus,
    pub status_label: String,
    pub status_icon: String,
    pub indicator_color: String,
    pub microbial_level: f64,
    pub base_shelf_life_days: f64,
    pub adjusted_shelf_life_days: f64,
    pub remaining_days: f64,
    pub recommendations: Vec<String>,
    pub comparison: ShelfLifeComparison,
}

impl ResultView {
    pub fn build(result: &EstimationResult, locale: Locale) -> Self {
        Self {
            locale,
            food: result.food.id().to_string(),
            material: result.material.id().to_string(),
            status: result.status,
            status_label: result.status.label(locale).to_string(),
            status_icon: result.status.icon().to_string(),
            indicator_color: result.status.indicator_color().to_string(),
            microbial_level: result.microbial_level,
            base_shelf_life_days: result.base_shelf_life_days,
            adjusted_shelf_life_days: result.adjusted_shelf_life_days,
            remaining_days: result.remaining_days,
            recommendations: result.recommendation_lines(locale),
            comparison: ShelfLifeComparison::from_result(result, locale),
        }
    }
}

/// Dashboard row describing one nano material
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialSummary {
    pub material: String,
    pub effectiveness_pct: f64,
    pub antimicrobial_pct: f64,
    pub barrier_property_pct: f64,
    pub cost: String,
}

/// One summary row per catalog material, in listing order
pub fn material_summaries(catalog: &Catalog, locale: Locale) -> Vec<MaterialSummary> {
    catalog
        .materials()
        .map(|m| MaterialSummary {
            material: m.id().to_string(),
            effectiveness_pct: round_to(m.effectiveness * 100.0, 1),
            antimicrobial_pct: round_to(m.antimicrobial * 100.0, 1),
            barrier_property_pct: round_to(m.barrier_property * 100.0, 1),
            cost: m.cost.label(locale).to_string(),
        })
        .collect()
}
