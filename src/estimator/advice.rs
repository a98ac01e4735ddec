//! Advice Generation
//!
//! Storage recommendations attached to every estimate. Rules run in a fixed
//! order and each adds at most one entry; presentation layers number them in
//! that order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::params::ModelParameters;
use crate::catalog::{FoodKind, MaterialKind};
use crate::locale::Locale;

/// Maximum number of recommendations one estimate can carry
pub const MAX_RECOMMENDATIONS: usize = 4;

pub type Recommendations = SmallVec<[Recommendation; MAX_RECOMMENDATIONS]>;

/// A single storage advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "subject", rename_all = "snake_case")]
pub enum Recommendation {
    /// Storage is too warm
    Refrigerate,
    /// Category spoils fast and needs a high-barrier package
    HighBarrierPackaging(FoodKind),
    /// Treatment cost only pays off for high-value products
    HighValueProducts(MaterialKind),
    /// Treatment is eco-friendly
    Biodegradable(MaterialKind),
    /// Closing advisory, always present
    SealedContainer,
}

impl Recommendation {
    pub fn text(&self, locale: Locale) -> String {
        match locale {
            Locale::En => match self {
                Recommendation::Refrigerate => {
                    "Storage temperature is too high. Keep it in a refrigerator (<4°C).".to_string()
                }
                Recommendation::HighBarrierPackaging(food) => format!(
                    "{} ({}) is highly sensitive. Use packaging with a high barrier property.",
                    food.id(),
                    food.display_name(Locale::En).to_lowercase()
                ),
                Recommendation::HighValueProducts(material) => format!(
                    "{} is economically justified for high-value products.",
                    material.id()
                ),
                Recommendation::Biodegradable(material) => {
                    format!("{} is eco-friendly and biodegradable.", material.id())
                }
                Recommendation::SealedContainer => {
                    "Store in a sealed container to maximize the effectiveness of nano packaging."
                        .to_string()
                }
            },
            Locale::Id => match self {
                Recommendation::Refrigerate => {
                    "Suhu penyimpanan terlalu tinggi. Simpan di refrigerator (<4°C).".to_string()
                }
                Recommendation::HighBarrierPackaging(food) => format!(
                    "{} sangat sensitif. Gunakan packaging dengan barrier property tinggi.",
                    food.id()
                ),
                Recommendation::HighValueProducts(material) => format!(
                    "{} efektif untuk produk dengan nilai ekonomi tinggi.",
                    material.id()
                ),
                Recommendation::Biodegradable(material) => {
                    format!("{} ramah lingkungan dan biodegradable.", material.id())
                }
                Recommendation::SealedContainer => {
                    "Simpan dalam wadah tertutup untuk memaksimalkan efektivitas nano packaging."
                        .to_string()
                }
            },
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text(Locale::En))
    }
}

/// Build the ordered advisory list for one estimate
pub fn generate_recommendations(
    food: FoodKind,
    material: MaterialKind,
    temperature_c: f64,
    params: &ModelParameters,
) -> Recommendations {
    let mut recommendations = Recommendations::new();

    if temperature_c > params.warm_storage_threshold_c {
        recommendations.push(Recommendation::Refrigerate);
    }

    if food.is_highly_perishable() {
        recommendations.push(Recommendation::HighBarrierPackaging(food));
    }

    if material.is_premium() {
        recommendations.push(Recommendation::HighValueProducts(material));
    } else if material.is_biodegradable() {
        recommendations.push(Recommendation::Biodegradable(material));
    }

    recommendations.push(Recommendation::SealedContainer);
    recommendations
}
