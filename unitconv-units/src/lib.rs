//! Unitconv Units - Unit Conversion Engine
//!
//! Converts values between units of one category and describes each
//! conversion with a human-readable formula. Units are held in a static,
//! immutable registry; the engine works generically over its factor table.
//!
//! Categories (in display order):
//! - Length (Meter, Kilometer, Mile, Foot, etc.)
//! - Mass/Weight (Gram, Kilogram, Pound, Ounce, etc.)
//! - Volume (Liter, Gallon, Cup, etc.)
//! - Area (Square Meter, Hectare, Acre, etc.)
//! - Time (Second through Year, 30-day months, 365-day years)
//! - Digital Storage (Bit, Byte, binary Kilobyte through Terabyte)
//! - Speed (Meter per second, Knot, etc.)
//! - Temperature (Celsius, Fahrenheit, Kelvin; pairwise affine rules)

mod category;
mod unit;
mod temperature;
mod units;
mod quantity;
mod convert;
mod formula;
mod parse;

pub use category::Category;
pub use unit::{Unit, Scale};
pub use temperature::TemperatureRule;
pub use units::{UNITS, UnitRegistry, RegistryBuilder};
pub use quantity::ConversionResult;
pub use formula::{FormulaStyle, curated_formula, generic_formula, identity_formula};
pub use parse::Query;
pub use unitconv_core::UnitError;

/// Category display names, in fixed order
pub fn categories() -> Vec<&'static str> {
    Category::ALL.iter().map(|c| c.name()).collect()
}

/// Ordered unit names of a category
pub fn units_of(category: &str) -> Result<Vec<&'static str>, UnitError> {
    UNITS.units_of(category)
}

/// Convert using the global registry; never fails, see [`UnitRegistry::convert`]
pub fn convert(value: f64, from: &str, to: &str, category: &str) -> f64 {
    UNITS.convert(value, from, to, category)
}

/// Strict conversion using the global registry
pub fn try_convert(value: f64, from: &str, to: &str, category: &str) -> Result<f64, UnitError> {
    UNITS.try_convert(value, from, to, category)
}

/// Curated formula description using the global registry
pub fn describe_formula(from: &str, to: &str, category: &str) -> String {
    UNITS.describe_formula(from, to, category)
}

/// Formula derived from the factor table
pub fn derive_formula(from: &str, to: &str, category: &str) -> Option<String> {
    UNITS.derive_formula(from, to, category)
}

/// Parse a free-text query like "5 Kilometer to Mile"
pub fn parse_query(s: &str) -> Result<Query, UnitError> {
    UNITS.parse_query(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let names = categories();
        assert_eq!(names.len(), 8);
        assert_eq!(names[0], "Length");
        assert_eq!(names[7], "Temperature");
    }

    #[test]
    fn test_crate_level_functions() {
        assert_eq!(units_of("Speed").unwrap().len(), 5);
        assert_eq!(convert(1.0, "Hour", "Second", "Time"), 3600.0);
        assert_eq!(try_convert(1.0, "Hour", "Second", "Time"), Ok(3600.0));
        assert_eq!(describe_formula("Foot", "Inch", "Length"), "multiply by 12");
        assert_eq!(derive_formula("Foot", "Inch", "Length").as_deref(), Some("multiply by 12"));
        assert_eq!(parse_query("2 Hour to Minute").unwrap().value, 2.0);
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(convert(5.0, "Foo", "Bar", "Length"), 5.0);
        assert_eq!(describe_formula("Meter", "Kilometer", "Length"), "divide by 1000");
        assert_eq!(describe_formula("Xylophone", "Harp", "Length"), "Convert Xylophone to Harp");
    }
}
