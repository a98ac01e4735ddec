//! Output language for labels and advice text

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EstimateError;

/// Output language. Identifiers (`Daging`, `Nano-Ag`, ...) are never translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    /// Bahasa Indonesia
    Id,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Id => "id",
        }
    }
}

impl FromStr for Locale {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "id" | "indonesian" | "bahasa" => Ok(Locale::Id),
            other => Err(EstimateError::invalid(
                "locale",
                format!("expected 'en' or 'id', got '{}'", other),
            )),
        }
    }
}
