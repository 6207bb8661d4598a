//! Structured errors for the conversion engine
//!
//! The default conversion path never raises: it degrades to the identity.
//! These errors are what the strict path and the registry builder surface
//! instead, plus a serializable report for tool consumers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const NOT_LINEAR: &str = "NOT_LINEAR";
    pub const DUPLICATE_UNIT: &str = "DUPLICATE_UNIT";
    pub const BASE_UNIT: &str = "BASE_UNIT";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
}

/// Errors raised by registry lookups, strict conversion and query parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown unit '{unit}' in category {category}")]
    UnknownUnit { unit: String, category: String },

    #[error("unit '{0}' has no linear factor")]
    NotLinear(String),

    #[error("unit '{unit}' registered in both {first} and {second}")]
    DuplicateUnit {
        unit: String,
        first: String,
        second: String,
    },

    #[error("category {category} must have exactly one base unit, found {count}")]
    BaseUnit { category: String, count: usize },

    #[error("cannot convert {from} ({from_category}) to {to} ({to_category})")]
    IncompatibleUnits {
        from: String,
        to: String,
        from_category: String,
        to_category: String,
    },

    #[error("parse error: {0}")]
    Parse(String),
}

impl UnitError {
    pub fn unknown_unit(unit: impl Into<String>, category: impl Into<String>) -> Self {
        Self::UnknownUnit {
            unit: unit.into(),
            category: category.into(),
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownCategory(_) => codes::UNKNOWN_CATEGORY,
            Self::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            Self::NotLinear(_) => codes::NOT_LINEAR,
            Self::DuplicateUnit { .. } => codes::DUPLICATE_UNIT,
            Self::BaseUnit { .. } => codes::BASE_UNIT,
            Self::IncompatibleUnits { .. } => codes::INCOMPATIBLE_UNITS,
            Self::Parse(_) => codes::PARSE_ERROR,
        }
    }

    /// Suggestion for fixing the error, when one exists
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::UnknownCategory(_) => Some("Use list_categories to see valid categories".to_string()),
            Self::UnknownUnit { category, .. } => {
                Some(format!("Use list_units('{}') to see valid units", category))
            }
            Self::NotLinear(_) => Some("Temperature units convert through pairwise formulas".to_string()),
            Self::IncompatibleUnits { .. } => Some("Pick two units from the same category".to_string()),
            Self::Parse(_) => Some("Write queries like '5 Kilometer to Mile'".to_string()),
            Self::DuplicateUnit { .. } | Self::BaseUnit { .. } => None,
        }
    }
}

/// Serializable error for tool output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorReport {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|_| {
            serde_json::json!({ "code": self.code, "message": self.message })
        })
    }
}

impl From<&UnitError> for ErrorReport {
    fn from(err: &UnitError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            suggestion: err.suggestion(),
        }
    }
}

impl From<UnitError> for ErrorReport {
    fn from(err: UnitError) -> Self {
        Self::from(&err)
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}
