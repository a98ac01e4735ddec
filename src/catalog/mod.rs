//! Reference Catalog
//!
//! Immutable lookup tables for food categories and nano-material treatments.
//!
//! The built-in catalog is created and validated on first use, then shared
//! read-only for the rest of the process. Alternative catalogs (for example a JSON file with
//! updated study values) go through the same validation and are passed to an
//! `Estimator` explicitly.
//!
//! ## Architecture
//! - `food.rs` - FoodKind identifiers + built-in food table
//! - `material.rs` - MaterialKind identifiers, CostTier + built-in material table
//! - `loader.rs` - JSON catalog files

pub mod food;
pub mod material;
pub mod loader;

pub use food::{FoodCategory, FoodKind};
pub use material::{CostTier, MaterialKind, NanoMaterial};

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

use crate::error::{CatalogError, CatalogTable, EstimateError};

static BUILTIN: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();

/// Validated food and material tables keyed by identifier
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    foods: FxHashMap<FoodKind, FoodCategory>,
    materials: FxHashMap<MaterialKind, NanoMaterial>,
}

impl Catalog {
    /// The process-wide built-in catalog. Validation runs once; a rejected
    /// table keeps being reported on every call.
    pub fn global() -> Result<&'static Catalog, CatalogError> {
        BUILTIN
            .get_or_init(|| {
                let catalog = Catalog::builtin();
                if let Err(e) = &catalog {
                    tracing::error!("Built-in catalog rejected: {}", e);
                }
                catalog
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Build and validate a fresh copy of the built-in tables
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_entries(food::builtin_foods(), material::builtin_materials())
    }

    /// Build a catalog from explicit entries.
    ///
    /// Every food and material identifier must appear exactly once and every
    /// entry must satisfy the range checks in `validate_food` /
    /// `validate_material`.
    pub fn from_entries(
        foods: Vec<FoodCategory>,
        materials: Vec<NanoMaterial>,
    ) -> Result<Self, CatalogError> {
        let mut food_map = FxHashMap::default();
        for entry in foods {
            validate_food(&entry)?;
            let kind = entry.kind;
            if food_map.insert(kind, entry).is_some() {
                return Err(CatalogError::DuplicateEntry {
                    table: CatalogTable::Food,
                    id: kind.id().to_string(),
                });
            }
        }

        let mut material_map = FxHashMap::default();
        for entry in materials {
            validate_material(&entry)?;
            let kind = entry.kind;
            if material_map.insert(kind, entry).is_some() {
                return Err(CatalogError::DuplicateEntry {
                    table: CatalogTable::Material,
                    id: kind.id().to_string(),
                });
            }
        }

        if let Some(kind) = FoodKind::all().iter().find(|k| !food_map.contains_key(*k)) {
            return Err(CatalogError::MissingEntry {
                table: CatalogTable::Food,
                id: kind.id(),
            });
        }
        if let Some(kind) = MaterialKind::all().iter().find(|k| !material_map.contains_key(*k)) {
            return Err(CatalogError::MissingEntry {
                table: CatalogTable::Material,
                id: kind.id(),
            });
        }

        Ok(Self {
            foods: food_map,
            materials: material_map,
        })
    }

    /// Re-run every entry check
    pub fn validate(&self) -> Result<(), CatalogError> {
        for kind in FoodKind::all() {
            let entry = self.foods.get(kind).ok_or(CatalogError::MissingEntry {
                table: CatalogTable::Food,
                id: kind.id(),
            })?;
            validate_food(entry)?;
        }
        for kind in MaterialKind::all() {
            let entry = self.materials.get(kind).ok_or(CatalogError::MissingEntry {
                table: CatalogTable::Material,
                id: kind.id(),
            })?;
            validate_material(entry)?;
        }
        Ok(())
    }

    pub fn food(&self, kind: FoodKind) -> Result<&FoodCategory, EstimateError> {
        self.foods
            .get(&kind)
            .ok_or_else(|| EstimateError::not_found(CatalogTable::Food, kind.id()))
    }

    pub fn material(&self, kind: MaterialKind) -> Result<&NanoMaterial, EstimateError> {
        self.materials
            .get(&kind)
            .ok_or_else(|| EstimateError::not_found(CatalogTable::Material, kind.id()))
    }

    /// Look up a food category by its string identifier
    pub fn lookup_food(&self, id: &str) -> Result<&FoodCategory, EstimateError> {
        self.food(id.parse()?)
    }

    /// Look up a nano material by its string identifier
    pub fn lookup_material(&self, id: &str) -> Result<&NanoMaterial, EstimateError> {
        self.material(id.parse()?)
    }

    /// Food entries in listing order
    pub fn foods(&self) -> impl Iterator<Item = &FoodCategory> + '_ {
        FoodKind::all().iter().filter_map(|k| self.foods.get(k))
    }

    /// Material entries in listing order
    pub fn materials(&self) -> impl Iterator<Item = &NanoMaterial> + '_ {
        MaterialKind::all().iter().filter_map(|k| self.materials.get(k))
    }

    /// Largest effectiveness coefficient in the material table
    pub fn max_effectiveness(&self) -> f64 {
        self.materials().map(|m| m.effectiveness).fold(0.0, f64::max)
    }
}

// ============================================================================
// Entry validation
// ============================================================================

fn check_positive(id: &str, field: &'static str, value: f64) -> Result<(), CatalogError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CatalogError::OutOfRange {
            id: id.to_string(),
            field,
            value,
            expected: "a finite value > 0",
        })
    }
}

fn check_finite(id: &str, field: &'static str, value: f64) -> Result<(), CatalogError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CatalogError::OutOfRange {
            id: id.to_string(),
            field,
            value,
            expected: "a finite value",
        })
    }
}

fn check_unit_interval(id: &str, field: &'static str, value: f64) -> Result<(), CatalogError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CatalogError::OutOfRange {
            id: id.to_string(),
            field,
            value,
            expected: "a value in [0, 1]",
        })
    }
}

pub fn validate_food(entry: &FoodCategory) -> Result<(), CatalogError> {
    let id = entry.id();
    check_positive(id, "shelf_life_untreated_days", entry.shelf_life_untreated_days)?;
    check_positive(id, "shelf_life_treated_days", entry.shelf_life_treated_days)?;
    check_positive(id, "microbial_growth_rate", entry.microbial_growth_rate)?;
    check_finite(id, "temperature_sensitivity_c", entry.temperature_sensitivity_c)?;
    check_finite(id, "humidity_sensitivity_pct", entry.humidity_sensitivity_pct)?;
    Ok(())
}

pub fn validate_material(entry: &NanoMaterial) -> Result<(), CatalogError> {
    let id = entry.id();
    check_unit_interval(id, "effectiveness", entry.effectiveness)?;
    check_unit_interval(id, "barrier_property", entry.barrier_property)?;
    check_unit_interval(id, "antimicrobial", entry.antimicrobial)?;
    Ok(())
}

// ============================================================================
// Process-wide entry points
// ============================================================================

/// Look up a food category in the built-in catalog
pub fn lookup_food(id: &str) -> Result<&'static FoodCategory, EstimateError> {
    Catalog::global()?.lookup_food(id)
}

/// Look up a nano material in the built-in catalog
pub fn lookup_material(id: &str) -> Result<&'static NanoMaterial, EstimateError> {
    Catalog::global()?.lookup_material(id)
}

/// Food identifiers in listing order
pub fn list_food_ids() -> Vec<&'static str> {
    FoodKind::all().iter().map(FoodKind::id).collect()
}

/// Material identifiers in listing order
pub fn list_material_ids() -> Vec<&'static str> {
    MaterialKind::all().iter().map(MaterialKind::id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_passes_validation() {
        let catalog = Catalog::builtin().unwrap();
        catalog.validate().unwrap();
        assert_eq!(Catalog::global().unwrap(), &catalog);
    }

    #[test]
    fn test_builtin_rows_go_through_entry_checks() {
        // A corrupted copy of the compiled-in rows is refused by the same
        // constructor the global catalog uses
        let mut foods = food::builtin_foods();
        foods[1].microbial_growth_rate = f64::NAN;
        let err = Catalog::from_entries(foods, material::builtin_materials()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::OutOfRange { field: "microbial_growth_rate", .. }
        ));
    }

    #[test]
    fn test_listing_order() {
        assert_eq!(
            list_food_ids(),
            vec!["Daging", "Ikan", "Buah", "Sayur", "Produk Olahan"]
        );
        assert_eq!(
            list_material_ids(),
            vec!["Nano-Ag", "Nano-ZnO", "Nano-clay", "Nano-kitosan"]
        );
    }

    #[test]
    fn test_lookup() {
        let daging = lookup_food("Daging").unwrap();
        assert_eq!(daging.shelf_life_untreated_days, 7.0);
        assert_eq!(daging.humidity_sensitivity_pct, 70.0);
        assert_eq!(daging.microbial_growth_rate, 0.15);

        let zno = lookup_material("Nano-ZnO").unwrap();
        assert_eq!(zno.antimicrobial, 0.85);
        assert_eq!(zno.cost, CostTier::Medium);
    }

    #[test]
    fn test_lookup_unknown() {
        let err = lookup_food("Tempe").unwrap_err();
        assert_eq!(
            err,
            EstimateError::NotFound {
                table: CatalogTable::Food,
                id: "Tempe".to_string()
            }
        );
        let err = lookup_material("nano-ag").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_global_is_shared() {
        let a = Catalog::global().unwrap() as *const Catalog;
        let b = Catalog::global().unwrap() as *const Catalog;
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_duplicate_food() {
        let mut foods = food::builtin_foods();
        foods.push(foods[0].clone());
        let err = Catalog::from_entries(foods, material::builtin_materials()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateEntry { table: CatalogTable::Food, .. }));
    }

    #[test]
    fn test_rejects_missing_material() {
        let mut materials = material::builtin_materials();
        materials.retain(|m| m.kind != MaterialKind::NanoClay);
        let err = Catalog::from_entries(food::builtin_foods(), materials).unwrap_err();
        assert_eq!(
            err,
            CatalogError::MissingEntry {
                table: CatalogTable::Material,
                id: "Nano-clay"
            }
        );
    }

    #[test]
    fn test_rejects_bad_ranges() {
        let mut foods = food::builtin_foods();
        foods[1].microbial_growth_rate = 0.0;
        let err = Catalog::from_entries(foods, material::builtin_materials()).unwrap_err();
        assert!(matches!(err, CatalogError::OutOfRange { field: "microbial_growth_rate", .. }));

        let mut materials = material::builtin_materials();
        materials[2].antimicrobial = 1.2;
        let err = Catalog::from_entries(food::builtin_foods(), materials).unwrap_err();
        assert!(matches!(err, CatalogError::OutOfRange { field: "antimicrobial", .. }));

        let mut materials = material::builtin_materials();
        materials[0].effectiveness = f64::NAN;
        assert!(Catalog::from_entries(food::builtin_foods(), materials).is_err());
    }

    #[test]
    fn test_max_effectiveness() {
        assert_eq!(Catalog::global().unwrap().max_effectiveness(), 0.85);
    }
}
