//! JSON catalog files
//!
//! File layout:
//! ```json
//! {
//!   "foods": [
//!     { "id": "Daging", "shelf_life_untreated_days": 7, "shelf_life_treated_days": 14,
//!       "temperature_sensitivity_c": 5, "humidity_sensitivity_pct": 70,
//!       "microbial_growth_rate": 0.15, "color": "#FF6B6B" }
//!   ],
//!   "materials": [
//!     { "id": "Nano-Ag", "effectiveness": 0.85, "barrier_property": 0.9,
//!       "antimicrobial": 0.95, "cost": "high", "color": "#C5C5C5" }
//!   ]
//! }
//! ```
//! Identifiers are read as plain strings first so an unknown id is reported
//! as a `CatalogError` instead of a serde parse failure.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::{Catalog, CostTier, FoodCategory, FoodKind, MaterialKind, NanoMaterial};
use crate::error::{CatalogError, CatalogTable};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    foods: Vec<FoodRecord>,
    materials: Vec<MaterialRecord>,
}

#[derive(Debug, Deserialize)]
struct FoodRecord {
    id: String,
    shelf_life_untreated_days: f64,
    shelf_life_treated_days: f64,
    temperature_sensitivity_c: f64,
    humidity_sensitivity_pct: f64,
    microbial_growth_rate: f64,
    #[serde(default)]
    color: String,
}

#[derive(Debug, Deserialize)]
struct MaterialRecord {
    id: String,
    effectiveness: f64,
    barrier_property: f64,
    antimicrobial: f64,
    cost: CostTier,
    #[serde(default)]
    color: String,
}

impl FoodRecord {
    fn into_category(self) -> Result<FoodCategory, CatalogError> {
        let kind = FoodKind::from_id(&self.id).ok_or(CatalogError::UnknownEntry {
            table: CatalogTable::Food,
            id: self.id.clone(),
        })?;
        Ok(FoodCategory {
            kind,
            shelf_life_untreated_days: self.shelf_life_untreated_days,
            shelf_life_treated_days: self.shelf_life_treated_days,
            temperature_sensitivity_c: self.temperature_sensitivity_c,
            humidity_sensitivity_pct: self.humidity_sensitivity_pct,
            microbial_growth_rate: self.microbial_growth_rate,
            color: self.color,
        })
    }
}

impl MaterialRecord {
    fn into_material(self) -> Result<NanoMaterial, CatalogError> {
        let kind = MaterialKind::from_id(&self.id).ok_or(CatalogError::UnknownEntry {
            table: CatalogTable::Material,
            id: self.id.clone(),
        })?;
        Ok(NanoMaterial {
            kind,
            effectiveness: self.effectiveness,
            barrier_property: self.barrier_property,
            antimicrobial: self.antimicrobial,
            cost: self.cost,
            color: self.color,
        })
    }
}

impl Catalog {
    /// Parse and validate a catalog from a JSON document
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(contents).with_context(|| "Failed to parse catalog JSON")?;

        let foods = file
            .foods
            .into_iter()
            .map(FoodRecord::into_category)
            .collect::<Result<Vec<_>, _>>();
        let materials = file
            .materials
            .into_iter()
            .map(MaterialRecord::into_material)
            .collect::<Result<Vec<_>, _>>();

        let catalog = foods
            .and_then(|foods| materials.and_then(|materials| Catalog::from_entries(foods, materials)))
            .map_err(|e| {
                tracing::warn!("Rejected catalog: {}", e);
                e
            })?;

        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {:?}", path))?;

        let catalog = Self::from_json_str(&contents)
            .with_context(|| format!("Invalid catalog file: {:?}", path))?;

        tracing::info!(
            "Loaded catalog from {:?} ({} foods, {} materials)",
            path,
            catalog.foods().count(),
            catalog.materials().count()
        );
        Ok(catalog)
    }
}
