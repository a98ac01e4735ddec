//! Nano-material packaging treatments

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogTable, EstimateError};
use crate::locale::Locale;

/// Nano-material identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaterialKind {
    /// Silver nanoparticles
    #[serde(rename = "Nano-Ag")]
    NanoAg,
    /// Zinc oxide nanoparticles
    #[serde(rename = "Nano-ZnO")]
    NanoZnO,
    /// Nano-clay composite
    #[serde(rename = "Nano-clay")]
    NanoClay,
    /// Chitosan nanoparticles
    #[serde(rename = "Nano-kitosan")]
    NanoKitosan,
}

impl MaterialKind {
    pub fn id(&self) -> &'static str {
        match self {
            MaterialKind::NanoAg => "Nano-Ag",
            MaterialKind::NanoZnO => "Nano-ZnO",
            MaterialKind::NanoClay => "Nano-clay",
            MaterialKind::NanoKitosan => "Nano-kitosan",
        }
    }

    /// All materials in listing order
    pub fn all() -> &'static [MaterialKind] {
        &[
            MaterialKind::NanoAg,
            MaterialKind::NanoZnO,
            MaterialKind::NanoClay,
            MaterialKind::NanoKitosan,
        ]
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.id() == id)
    }

    /// Strongest antimicrobial and most expensive treatment
    pub fn is_premium(&self) -> bool {
        matches!(self, MaterialKind::NanoAg)
    }

    pub fn is_biodegradable(&self) -> bool {
        matches!(self, MaterialKind::NanoKitosan)
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MaterialKind {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| EstimateError::not_found(CatalogTable::Material, s))
    }
}

/// Relative cost of a treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    Low,
    Medium,
    High,
}

impl CostTier {
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (CostTier::Low, Locale::En) => "Low",
            (CostTier::Medium, Locale::En) => "Medium",
            (CostTier::High, Locale::En) => "High",
            (CostTier::Low, Locale::Id) => "Rendah",
            (CostTier::Medium, Locale::Id) => "Sedang",
            (CostTier::High, Locale::Id) => "Tinggi",
        }
    }
}

/// Protective properties of a nano-material treatment. Coefficients are in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NanoMaterial {
    #[serde(rename = "id")]
    pub kind: MaterialKind,

    /// Overall shelf-life extension strength
    pub effectiveness: f64,

    /// Gas/moisture barrier strength. Not used by the shelf-life formula.
    pub barrier_property: f64,

    /// Fraction of microbial growth suppressed
    pub antimicrobial: f64,

    pub cost: CostTier,

    /// Chart color
    pub color: String,
}

impl NanoMaterial {
    pub fn id(&self) -> &'static str {
        self.kind.id()
    }
}

fn entry(
    kind: MaterialKind,
    effectiveness: f64,
    barrier_property: f64,
    antimicrobial: f64,
    cost: CostTier,
    color: &str,
) -> NanoMaterial {
    NanoMaterial {
        kind,
        effectiveness,
        barrier_property,
        antimicrobial,
        cost,
        color: color.to_string(),
    }
}

/// Built-in material table, in listing order
pub fn builtin_materials() -> Vec<NanoMaterial> {
    vec![
        entry(MaterialKind::NanoAg, 0.85, 0.9, 0.95, CostTier::High, "#C5C5C5"),
        entry(MaterialKind::NanoZnO, 0.75, 0.8, 0.85, CostTier::Medium, "#F0E68C"),
        entry(MaterialKind::NanoClay, 0.7, 0.95, 0.65, CostTier::Low, "#D2B48C"),
        entry(MaterialKind::NanoKitosan, 0.8, 0.85, 0.9, CostTier::Medium, "#98FB98"),
    ]
}
