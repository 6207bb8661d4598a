//! Conversion result - a value with its target unit

use std::fmt;
use serde::{Serialize, Deserialize};
use unitconv_core::{as_sigfigs, DEFAULT_SIGFIGS};

/// A converted value and the unit it is expressed in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// The numeric value, unrounded
    pub value: f64,
    /// The target unit name
    pub unit: String,
}

impl ConversionResult {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        ConversionResult { value, unit: unit.into() }
    }

    /// Render with N significant digits, e.g. "0.6213711922 Mile"
    pub fn display_with(&self, sigfigs: u32) -> String {
        format!("{} {}", as_sigfigs(self.value, sigfigs), self.unit)
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_with(DEFAULT_SIGFIGS))
    }
}
