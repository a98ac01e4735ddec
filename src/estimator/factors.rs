//! Adjustment factors
//!
//! The shelf-life multiplier is the product of three independent factors:
//!
//! ```text
//! adjusted = base × material_factor × temperature_factor × humidity_factor
//! microbial = growth_rate × days × (1 − antimicrobial)
//! ```
//!
//! Microbial load does not depend on temperature in this model.

use super::params::ModelParameters;

/// Shelf-life factor for storage temperature.
///
/// 1.0 at or below the optimum, then drops linearly by
/// `temperature_slope_per_c` per degree down to `temperature_factor_floor`.
pub fn temperature_factor(temperature_c: f64, params: &ModelParameters) -> f64 {
    if temperature_c > params.optimal_temperature_c {
        let drop = (temperature_c - params.optimal_temperature_c) * params.temperature_slope_per_c;
        f64::max(params.temperature_factor_floor, 1.0 - drop)
    } else {
        1.0
    }
}

/// Shelf-life factor for relative humidity: a flat penalty once humidity
/// strays more than `humidity_tolerance_pct` from the food's preferred value.
pub fn humidity_factor(humidity_pct: f64, preferred_humidity_pct: f64, params: &ModelParameters) -> f64 {
    if (humidity_pct - preferred_humidity_pct).abs() > params.humidity_tolerance_pct {
        params.humidity_penalty
    } else {
        1.0
    }
}

/// Shelf-life multiplier contributed by the nano treatment
pub fn material_factor(effectiveness: f64, params: &ModelParameters) -> f64 {
    1.0 + effectiveness * params.material_weight
}

/// Accumulated microbial load after `storage_days`, reduced by the
/// treatment's antimicrobial fraction
pub fn microbial_level(growth_rate: f64, storage_days: u32, antimicrobial: f64) -> f64 {
    let mut level = growth_rate * f64::from(storage_days);
    level *= 1.0 - antimicrobial;
    level
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
