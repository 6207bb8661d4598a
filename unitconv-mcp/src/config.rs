//! Server configuration from environment variables

use std::env;
use serde::Serialize;
use tracing::warn;
use unitconv_core::{DEFAULT_SIGFIGS, MAX_SIGFIGS};
use unitconv_units::FormulaStyle;

pub const PRECISION_VAR: &str = "UNITCONV_PRECISION";
pub const STRICT_VAR: &str = "UNITCONV_STRICT";
pub const FORMULAS_VAR: &str = "UNITCONV_FORMULAS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    /// Significant digits for displayed results
    pub precision: u32,
    /// Report unknown categories/units instead of returning the input
    pub strict: bool,
    /// Source for formula descriptions
    pub formulas: FormulaStyle,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_SIGFIGS,
            strict: false,
            formulas: FormulaStyle::Curated,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; invalid values keep the default
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(PRECISION_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(p) if (1..=MAX_SIGFIGS).contains(&p) => config.precision = p,
                _ => warn!(value = %raw, "{} must be 1..={}, using {}", PRECISION_VAR, MAX_SIGFIGS, config.precision),
            }
        }

        if let Some(raw) = lookup(STRICT_VAR) {
            match parse_bool(&raw) {
                Some(b) => config.strict = b,
                None => warn!(value = %raw, "{} is not a boolean, ignoring", STRICT_VAR),
            }
        }

        if let Some(raw) = lookup(FORMULAS_VAR) {
            match FormulaStyle::from_name(&raw) {
                Some(style) => config.formulas = style,
                None => warn!(value = %raw, "{} must be 'curated' or 'derived', ignoring", FORMULAS_VAR),
            }
        }

        config
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
