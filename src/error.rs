//! Error types
//!
//! `EstimateError` is what callers of `estimate` see: an unknown identifier,
//! an input outside the model's domain, or a built-in catalog that failed its
//! own validation. `CatalogError` is raised while validating a catalog,
//! before any estimate runs against it.

use std::fmt;
use thiserror::Error;

/// Which reference table an identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogTable {
    Food,
    Material,
}

impl fmt::Display for CatalogTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogTable::Food => write!(f, "food category"),
            CatalogTable::Material => write!(f, "nano material"),
        }
    }
}

/// Failure of a single estimation call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error("unknown {table} '{id}'")]
    NotFound { table: CatalogTable, id: String },

    #[error("invalid {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    /// The compiled-in tables were rejected at initialisation
    #[error("built-in catalog is invalid: {0}")]
    Catalog(#[from] CatalogError),
}

impl EstimateError {
    pub(crate) fn not_found(table: CatalogTable, id: &str) -> Self {
        EstimateError::NotFound {
            table,
            id: id.to_string(),
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        EstimateError::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, EstimateError::NotFound { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, EstimateError::InvalidArgument { .. })
    }
}

/// Malformed catalog entry, detected when the catalog is built
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("catalog has no entry for {table} '{id}'")]
    MissingEntry { table: CatalogTable, id: &'static str },

    #[error("catalog lists {table} '{id}' more than once")]
    DuplicateEntry { table: CatalogTable, id: String },

    #[error("catalog entry '{id}' is not a known {table}")]
    UnknownEntry { table: CatalogTable, id: String },

    #[error("{id}: {field} = {value} is out of range (expected {expected})")]
    OutOfRange {
        id: String,
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
}
