//! NanoSmart Shelf-Life Estimator
//!
//! Estimates how long a food item stays acceptable inside nano-material
//! packaging, given storage temperature, humidity and elapsed storage days.
//!
//! Layout:
//! - `catalog/`: reference tables for food categories and nano materials
//! - `estimator/`: shelf-life formula, microbial load, freshness verdict, advice
//! - `report/`: markdown and JSON views of a result for presentation layers
//! - `locale`: English / Indonesian wording switch
//!
//! Every call is pure: the only shared state is the built-in catalog, which
//! is initialised once and never written afterwards.

pub mod error;
pub mod locale;
pub mod catalog;
pub mod estimator;
pub mod report;

// Re-export commonly used types
pub use error::{CatalogError, CatalogTable, EstimateError};
pub use locale::Locale;
pub use catalog::{
    list_food_ids, list_material_ids, lookup_food, lookup_material, Catalog, CostTier,
    FoodCategory, FoodKind, MaterialKind, NanoMaterial,
};
pub use estimator::{
    estimate, AdjustmentFactors, EstimationRequest, EstimationResult, Estimator,
    FreshnessStatus, ModelParameters, Recommendation,
};
pub use report::{JsonFormatter, MarkdownFormatter, ResultView};
