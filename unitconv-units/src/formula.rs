//! Human-readable conversion formulas
//!
//! Two sources: a small hand-written table (Length pairs plus the temperature
//! rules), and strings derived from the factor table. The curated strings are
//! not checked against the factors; some are rounded.

use serde::{Serialize, Deserialize};
use unitconv_core::as_sigfigs;
use crate::{Category, TemperatureRule, UnitRegistry};

/// Significant digits used when deriving a coefficient from the factor table
const DERIVED_SIGFIGS: u32 = 10;

/// Which formula source `describe_formula_with` consults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormulaStyle {
    /// Hand-written table, generic text when the pair is missing
    #[default]
    Curated,
    /// Coefficient computed from the factor table
    Derived,
}

impl FormulaStyle {
    pub fn from_name(name: &str) -> Option<FormulaStyle> {
        match name.trim().to_ascii_lowercase().as_str() {
            "curated" => Some(FormulaStyle::Curated),
            "derived" => Some(FormulaStyle::Derived),
            _ => None,
        }
    }
}

static LENGTH_FORMULAS: [(&str, &str, &str); 21] = [
    ("Meter", "Kilometer", "divide by 1000"),
    ("Meter", "Centimeter", "multiply by 100"),
    ("Meter", "Millimeter", "multiply by 1000"),
    ("Meter", "Mile", "divide by 1609.344"),
    ("Meter", "Yard", "multiply by 1.09361"),
    ("Meter", "Foot", "multiply by 3.28084"),
    ("Meter", "Inch", "multiply by 39.3701"),

    ("Kilometer", "Meter", "multiply by 1000"),
    ("Kilometer", "Mile", "multiply by 0.621371"),

    ("Centimeter", "Meter", "divide by 100"),
    ("Centimeter", "Inch", "multiply by 0.393701"),

    ("Millimeter", "Meter", "divide by 1000"),
    ("Millimeter", "Inch", "multiply by 0.0393701"),

    ("Mile", "Meter", "multiply by 1609.344"),
    ("Mile", "Kilometer", "multiply by 1.60934"),

    ("Yard", "Meter", "multiply by 0.9144"),
    ("Yard", "Foot", "multiply by 3"),

    ("Foot", "Meter", "multiply by 0.3048"),
    ("Foot", "Inch", "multiply by 12"),

    ("Inch", "Centimeter", "multiply by 2.54"),
    ("Inch", "Foot", "divide by 12"),
];

/// Statement used when both units are the same
pub fn identity_formula(unit: &str) -> String {
    format!("1 {} = 1 {}", unit, unit)
}

/// Fallback naming the two units, without a coefficient
pub fn generic_formula(from: &str, to: &str) -> String {
    format!("Convert {} to {}", from, to)
}

/// Hand-written formula for an exact ordered pair, if one exists
pub fn curated_formula(from: &str, to: &str, category: &str) -> Option<&'static str> {
    match Category::from_name(category)? {
        Category::Length => LENGTH_FORMULAS.iter()
            .find(|(f, t, _)| *f == from && *t == to)
            .map(|(_, _, text)| *text),
        Category::Temperature => TemperatureRule::lookup(from, to).map(|r| r.formula()),
        _ => None,
    }
}

/// Formula computed from the registry's factors
///
/// `None` when the category or either unit is unknown, or the units are the
/// same. Temperature pairs return the rule's formula.
pub fn derive_formula(registry: &UnitRegistry, from: &str, to: &str, category: &str) -> Option<String> {
    if from == to {
        return None;
    }
    let category = Category::from_name(category)?;
    if !category.is_linear() {
        return TemperatureRule::lookup(from, to).map(|r| r.formula().to_string());
    }

    let k_from = registry.unit_in(category, from).ok()?.factor()?;
    let k_to = registry.unit_in(category, to).ok()?.factor()?;
    let ratio = k_from / k_to;

    if ratio >= 1.0 {
        Some(format!("multiply by {}", as_sigfigs(ratio, DERIVED_SIGFIGS)))
    } else {
        Some(format!("divide by {}", as_sigfigs(1.0 / ratio, DERIVED_SIGFIGS)))
    }
}

/// Describe the relationship between two units using the given source
pub fn describe_formula_with(
    registry: &UnitRegistry,
    style: FormulaStyle,
    from: &str,
    to: &str,
    category: &str,
) -> String {
    if from == to {
        return identity_formula(from);
    }

    let described = match style {
        FormulaStyle::Curated => curated_formula(from, to, category).map(str::to_string),
        FormulaStyle::Derived => derive_formula(registry, from, to, category),
    };

    described.unwrap_or_else(|| generic_formula(from, to))
}
