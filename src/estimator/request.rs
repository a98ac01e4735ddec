//! Estimation input

use serde::{Deserialize, Serialize};

use crate::catalog::{FoodKind, MaterialKind};
use crate::error::EstimateError;

pub const MIN_STORAGE_DAYS: u32 = 1;
pub const MIN_HUMIDITY_PCT: f64 = 30.0;
pub const MAX_HUMIDITY_PCT: f64 = 100.0;

/// One estimation call's inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationRequest {
    pub food: FoodKind,
    pub material: MaterialKind,

    /// Storage temperature (°C). Any finite value; typically -5 to 40.
    pub temperature_c: f64,

    /// Days already in storage, at least 1
    pub storage_days: u32,

    /// Relative humidity (%), 30 to 100
    pub humidity_pct: f64,
}

impl EstimationRequest {
    pub fn new(
        food: FoodKind,
        material: MaterialKind,
        temperature_c: f64,
        storage_days: u32,
        humidity_pct: f64,
    ) -> Self {
        Self {
            food,
            material,
            temperature_c,
            storage_days,
            humidity_pct,
        }
    }

    /// Build a request from string identifiers. Unknown ids are `NotFound`.
    pub fn from_ids(
        food_id: &str,
        material_id: &str,
        temperature_c: f64,
        storage_days: u32,
        humidity_pct: f64,
    ) -> Result<Self, EstimateError> {
        Ok(Self::new(
            food_id.parse()?,
            material_id.parse()?,
            temperature_c,
            storage_days,
            humidity_pct,
        ))
    }

    /// Check the environmental inputs against the model's domain
    pub fn validate(&self) -> Result<(), EstimateError> {
        if self.storage_days < MIN_STORAGE_DAYS {
            return Err(EstimateError::invalid(
                "storage_days",
                format!("must be at least {}, got {}", MIN_STORAGE_DAYS, self.storage_days),
            ));
        }
        if !self.temperature_c.is_finite() {
            return Err(EstimateError::invalid(
                "temperature_c",
                format!("must be finite, got {}", self.temperature_c),
            ));
        }
        if !self.humidity_pct.is_finite() {
            return Err(EstimateError::invalid(
                "humidity_pct",
                format!("must be finite, got {}", self.humidity_pct),
            ));
        }
        if !(MIN_HUMIDITY_PCT..=MAX_HUMIDITY_PCT).contains(&self.humidity_pct) {
            return Err(EstimateError::invalid(
                "humidity_pct",
                format!(
                    "must be within [{}, {}], got {}",
                    MIN_HUMIDITY_PCT, MAX_HUMIDITY_PCT, self.humidity_pct
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(temperature_c: f64, storage_days: u32, humidity_pct: f64) -> EstimationRequest {
        EstimationRequest::new(
            FoodKind::Daging,
            MaterialKind::NanoAg,
            temperature_c,
            storage_days,
            humidity_pct,
        )
    }

    #[test]
    fn test_valid_edges() {
        request(-5.0, 1, 30.0).validate().unwrap();
        request(40.0, 365, 100.0).validate().unwrap();
        // Temperature has no range limit, only finiteness
        request(-80.0, 1, 70.0).validate().unwrap();
    }

    #[test]
    fn test_zero_days() {
        let err = request(4.0, 0, 70.0).validate().unwrap_err();
        assert!(matches!(err, EstimateError::InvalidArgument { field: "storage_days", .. }));
    }

    #[test]
    fn test_humidity_range() {
        for humidity in [29.9, 100.1, -1.0] {
            let err = request(4.0, 3, humidity).validate().unwrap_err();
            assert!(matches!(err, EstimateError::InvalidArgument { field: "humidity_pct", .. }));
        }
    }

    #[test]
    fn test_non_finite() {
        assert!(request(f64::NAN, 3, 70.0).validate().is_err());
        assert!(request(f64::INFINITY, 3, 70.0).validate().is_err());
        assert!(request(4.0, 3, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_from_ids() {
        let req = EstimationRequest::from_ids("Ikan", "Nano-ZnO", 4.0, 10, 80.0).unwrap();
        assert_eq!(req.food, FoodKind::Ikan);
        assert_eq!(req.material, MaterialKind::NanoZnO);
        assert!(EstimationRequest::from_ids("Ikan", "ZnO", 4.0, 10, 80.0)
            .unwrap_err()
            .is_not_found());
    }
}
