//! Temperature conversion rules
//!
//! Temperature scales share no multiplicative base, so each ordered pair of
//! scales gets its own affine rule. Both directions are listed explicitly;
//! no inverse is derived at runtime.

use serde::{Serialize, Deserialize};

pub const CELSIUS: &str = "Celsius";
pub const FAHRENHEIT: &str = "Fahrenheit";
pub const KELVIN: &str = "Kelvin";

/// Offset between the Celsius and Kelvin zero points
const KELVIN_OFFSET: f64 = 273.15;

/// One affine rule per ordered pair of temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureRule {
    CelsiusToFahrenheit,
    CelsiusToKelvin,
    FahrenheitToCelsius,
    FahrenheitToKelvin,
    KelvinToCelsius,
    KelvinToFahrenheit,
}

impl TemperatureRule {
    pub const ALL: [TemperatureRule; 6] = [
        TemperatureRule::CelsiusToFahrenheit,
        TemperatureRule::CelsiusToKelvin,
        TemperatureRule::FahrenheitToCelsius,
        TemperatureRule::FahrenheitToKelvin,
        TemperatureRule::KelvinToCelsius,
        TemperatureRule::KelvinToFahrenheit,
    ];

    /// Find the rule for an exact ordered pair of unit names
    pub fn lookup(from: &str, to: &str) -> Option<TemperatureRule> {
        Self::ALL.into_iter().find(|r| r.from_unit() == from && r.to_unit() == to)
    }

    pub fn from_unit(&self) -> &'static str {
        match self {
            Self::CelsiusToFahrenheit | Self::CelsiusToKelvin => CELSIUS,
            Self::FahrenheitToCelsius | Self::FahrenheitToKelvin => FAHRENHEIT,
            Self::KelvinToCelsius | Self::KelvinToFahrenheit => KELVIN,
        }
    }

    pub fn to_unit(&self) -> &'static str {
        match self {
            Self::FahrenheitToCelsius | Self::KelvinToCelsius => CELSIUS,
            Self::CelsiusToFahrenheit | Self::KelvinToFahrenheit => FAHRENHEIT,
            Self::CelsiusToKelvin | Self::FahrenheitToKelvin => KELVIN,
        }
    }

    /// The rule going the other way
    pub fn inverse(&self) -> TemperatureRule {
        match self {
            Self::CelsiusToFahrenheit => Self::FahrenheitToCelsius,
            Self::CelsiusToKelvin => Self::KelvinToCelsius,
            Self::FahrenheitToCelsius => Self::CelsiusToFahrenheit,
            Self::FahrenheitToKelvin => Self::KelvinToFahrenheit,
            Self::KelvinToCelsius => Self::CelsiusToKelvin,
            Self::KelvinToFahrenheit => Self::FahrenheitToKelvin,
        }
    }

    /// Apply the rule. Operation order is fixed so results are reproducible bit for bit.
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Self::CelsiusToFahrenheit => (value * 9.0 / 5.0) + 32.0,
            Self::CelsiusToKelvin => value + KELVIN_OFFSET,
            Self::FahrenheitToCelsius => (value - 32.0) * 5.0 / 9.0,
            Self::FahrenheitToKelvin => (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
            Self::KelvinToCelsius => value - KELVIN_OFFSET,
            Self::KelvinToFahrenheit => (value - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
        }
    }

    /// Curated human-readable formula
    pub fn formula(&self) -> &'static str {
        match self {
            Self::CelsiusToFahrenheit => "(°C × 9/5) + 32 = °F",
            Self::CelsiusToKelvin => "°C + 273.15 = K",
            Self::FahrenheitToCelsius => "(°F - 32) × 5/9 = °C",
            Self::FahrenheitToKelvin => "(°F - 32) × 5/9 + 273.15 = K",
            Self::KelvinToCelsius => "K - 273.15 = °C",
            Self::KelvinToFahrenheit => "(K - 273.15) × 9/5 + 32 = °F",
        }
    }
}
