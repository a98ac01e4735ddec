//! Shelf-life estimator
//!
//! Combines a food category and a nano treatment with storage conditions:
//! 1. base shelf-life from the catalog
//! 2. temperature, humidity and material factors (see `factors.rs`)
//! 3. microbial load → freshness status
//! 4. remaining days, rounding, advice

use super::advice::generate_recommendations;
use super::factors::{
    humidity_factor, material_factor, microbial_level, round_to, temperature_factor,
};
use super::params::ModelParameters;
use super::request::EstimationRequest;
use super::result::{AdjustmentFactors, EstimationResult};
use super::status::FreshnessStatus;
use crate::catalog::Catalog;
use crate::error::EstimateError;

/// Estimator bound to a catalog and a validated parameter set. Holds no
/// mutable state.
#[derive(Debug, Clone)]
pub struct Estimator<'a> {
    catalog: &'a Catalog,
    params: ModelParameters,
}

impl Estimator<'static> {
    /// Built-in catalog with default parameters
    pub fn new() -> Result<Self, EstimateError> {
        Ok(Self {
            catalog: Catalog::global()?,
            params: ModelParameters::default(),
        })
    }
}

impl<'a> Estimator<'a> {
    /// Bind a catalog and a parameter set.
    ///
    /// Parameters are checked with `ModelParameters::validate` so a set the
    /// file loader would reject cannot reach `estimate` either.
    pub fn with_catalog(catalog: &'a Catalog, params: ModelParameters) -> anyhow::Result<Self> {
        params.validate()?;
        Ok(Self { catalog, params })
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// Estimate shelf-life and freshness for one request
    pub fn estimate(&self, request: &EstimationRequest) -> Result<EstimationResult, EstimateError> {
        request.validate()?;

        let food = self.catalog.food(request.food)?;
        let material = self.catalog.material(request.material)?;
        let params = &self.params;

        let base = food.shelf_life_untreated_days;

        let factors = AdjustmentFactors {
            temperature: temperature_factor(request.temperature_c, params),
            humidity: humidity_factor(request.humidity_pct, food.humidity_sensitivity_pct, params),
            material: material_factor(material.effectiveness, params),
        };

        let adjusted = base * factors.material * factors.temperature * factors.humidity;

        let microbial = microbial_level(
            food.microbial_growth_rate,
            request.storage_days,
            material.antimicrobial,
        );
        let status = FreshnessStatus::classify(microbial, params);

        let remaining = f64::max(0.0, adjusted - f64::from(request.storage_days));

        tracing::debug!(
            food = %request.food,
            material = %request.material,
            temperature_factor = factors.temperature,
            humidity_factor = factors.humidity,
            material_factor = factors.material,
            adjusted,
            microbial,
            ?status,
            "Estimated shelf-life"
        );

        Ok(EstimationResult {
            food: request.food,
            material: request.material,
            status,
            base_shelf_life_days: base,
            adjusted_shelf_life_days: round_to(adjusted, 1),
            remaining_days: round_to(remaining, 1),
            microbial_level: round_to(microbial, 2),
            factors,
            recommendations: generate_recommendations(
                request.food,
                request.material,
                request.temperature_c,
                params,
            ),
        })
    }

    /// Estimate from string identifiers
    pub fn estimate_by_id(
        &self,
        food_id: &str,
        material_id: &str,
        temperature_c: f64,
        storage_days: u32,
        humidity_pct: f64,
    ) -> Result<EstimationResult, EstimateError> {
        let request = EstimationRequest::from_ids(
            food_id,
            material_id,
            temperature_c,
            storage_days,
            humidity_pct,
        )?;
        self.estimate(&request)
    }
}

/// Estimate against the built-in catalog with default parameters
pub fn estimate(
    food_id: &str,
    material_id: &str,
    temperature_c: f64,
    storage_days: u32,
    humidity_pct: f64,
) -> Result<EstimationResult, EstimateError> {
    Estimator::new()?.estimate_by_id(food_id, material_id, temperature_c, storage_days, humidity_pct)
}
