//! Shelf-Life Estimator
//!
//! Turns a food category, a nano treatment and storage conditions into a
//! freshness verdict with ordered storage advice.
//!
//! ## Architecture
//! - `params.rs` - ModelParameters (model constants, JSON-loadable)
//! - `factors.rs` - Temperature / humidity / material factors, microbial load, rounding
//! - `status.rs` - FreshnessStatus bands
//! - `request.rs` - EstimationRequest + input validation
//! - `advice.rs` - Ordered storage recommendations
//! - `result.rs` - EstimationResult output struct
//! - `engine.rs` - Estimator tying it together
//!
//! ## Rounding
//! Adjusted shelf-life and remaining days are rounded to 1 decimal, the
//! microbial level to 2, half away from zero. The status is classified on
//! the unrounded microbial level.

pub mod params;
pub mod factors;
pub mod status;
pub mod request;
pub mod advice;
pub mod result;
pub mod engine;

// Re-export public API
pub use params::ModelParameters;
pub use status::FreshnessStatus;
pub use request::EstimationRequest;
pub use advice::{generate_recommendations, Recommendation, Recommendations};
pub use result::{AdjustmentFactors, EstimationResult};
pub use engine::{estimate, Estimator};
