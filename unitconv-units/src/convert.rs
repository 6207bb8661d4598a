//! Conversion between units of one category
//!
//! `convert` is lenient: same-name units short-circuit before any lookup, and
//! an unknown category, unit or temperature pair yields the input unchanged.
//! Callers validate selections. `try_convert` is the strict variant that
//! reports what was wrong instead.

use tracing::debug;
use unitconv_core::UnitError;
use crate::{Category, ConversionResult, TemperatureRule, UnitRegistry};
use crate::formula::{self, FormulaStyle};

impl UnitRegistry {
    /// Convert `value` from one unit to another, falling back to `value`
    pub fn convert(&self, value: f64, from: &str, to: &str, category: &str) -> f64 {
        if from == to {
            return value;
        }

        let Some(cat) = Category::from_name(category) else {
            debug!(category, "unknown category, returning input unchanged");
            return value;
        };

        match self.convert_in(cat, value, from, to) {
            Ok(converted) => converted,
            Err(e) => {
                debug!(error = %e, from, to, "conversion fell back to identity");
                value
            }
        }
    }

    /// Strict conversion: unknown categories and units are errors
    pub fn try_convert(&self, value: f64, from: &str, to: &str, category: &str) -> Result<f64, UnitError> {
        let cat: Category = category.parse()?;
        self.unit_in(cat, from)?;
        self.unit_in(cat, to)?;

        if from == to {
            return Ok(value);
        }
        self.convert_in(cat, value, from, to)
    }

    /// Lenient conversion returning the value together with its unit
    pub fn convert_quantity(&self, value: f64, from: &str, to: &str, category: &str) -> ConversionResult {
        ConversionResult::new(self.convert(value, from, to, category), to)
    }

    /// Describe the formula from the curated table
    pub fn describe_formula(&self, from: &str, to: &str, category: &str) -> String {
        formula::describe_formula_with(self, FormulaStyle::Curated, from, to, category)
    }

    /// Describe the formula from the chosen source
    pub fn describe_formula_with(&self, style: FormulaStyle, from: &str, to: &str, category: &str) -> String {
        formula::describe_formula_with(self, style, from, to, category)
    }

    /// Formula computed from the factor table
    pub fn derive_formula(&self, from: &str, to: &str, category: &str) -> Option<String> {
        formula::derive_formula(self, from, to, category)
    }

    fn convert_in(&self, category: Category, value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
        if !category.is_linear() {
            return match TemperatureRule::lookup(from, to) {
                Some(rule) => Ok(rule.apply(value)),
                None => {
                    let unknown = if TemperatureRule::ALL.iter().any(|r| r.from_unit() == from) { to } else { from };
                    Err(UnitError::unknown_unit(unknown, category.name()))
                }
            };
        }

        let source = self.unit_in(category, from)?;
        let base = source.to_base(value)
            .ok_or_else(|| UnitError::NotLinear(source.name.clone()))?;

        let target = self.unit_in(category, to)?;
        target.from_base(base)
            .ok_or_else(|| UnitError::NotLinear(target.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNITS;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const SAMPLES: [f64; 6] = [0.0, 1.0, -3.5, 42.0, 1e-6, 123456.789];

    #[test]
    fn test_identity_for_every_unit() {
        for category in Category::ALL {
            for unit in UNITS.units_in(category) {
                for v in SAMPLES {
                    assert_eq!(UNITS.convert(v, &unit.name, &unit.name, category.name()), v);
                }
            }
        }
    }

    #[test]
    fn test_identity_without_lookup() {
        // Same name short-circuits even when nothing is registered
        assert_eq!(UNITS.convert(7.0, "Furlong", "Furlong", "Nowhere"), 7.0);
    }

    #[test]
    fn test_round_trip_linear_categories() {
        for category in Category::ALL.into_iter().filter(|c| c.is_linear()) {
            let units = UNITS.units_in(category);
            for a in &units {
                for b in &units {
                    for v in SAMPLES {
                        let there = UNITS.convert(v, &a.name, &b.name, category.name());
                        let back = UNITS.convert(there, &b.name, &a.name, category.name());
                        assert_relative_eq!(back, v, max_relative = 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn test_round_trip_temperature() {
        let units = UNITS.units_of("Temperature").unwrap();
        for a in &units {
            for b in &units {
                for v in [-40.0, 0.0, 25.0, 100.0, 300.0] {
                    let there = UNITS.convert(v, a, b, "Temperature");
                    let back = UNITS.convert(there, b, a, "Temperature");
                    assert_relative_eq!(back, v, epsilon = 1e-9, max_relative = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_temperature_fixed_points() {
        assert_eq!(UNITS.convert(0.0, "Celsius", "Fahrenheit", "Temperature"), 32.0);
        assert_eq!(UNITS.convert(100.0, "Celsius", "Kelvin", "Temperature"), 373.15);
        assert_eq!(UNITS.convert(32.0, "Fahrenheit", "Celsius", "Temperature"), 0.0);
    }

    #[test]
    fn test_digital_storage() {
        assert_eq!(UNITS.convert(1.0, "Gigabyte", "Bit", "Digital Storage"), 8.0 * 1024f64.powi(3));
        assert_eq!(UNITS.convert(2048.0, "Kilobyte", "Megabyte", "Digital Storage"), 2.0);
    }

    #[test]
    fn test_mass() {
        assert_abs_diff_eq!(UNITS.convert(1.0, "Kilogram", "Pound", "Mass/Weight"), 2.20462, epsilon = 1e-4);
        assert_eq!(UNITS.convert(1.0, "Metric Ton", "Kilogram", "Mass/Weight"), 1000.0);
    }

    #[test]
    fn test_length_and_time() {
        assert_eq!(UNITS.convert(5.0, "Kilometer", "Meter", "Length"), 5000.0);
        assert_relative_eq!(UNITS.convert(1.0, "Mile", "Kilometer", "Length"), 1.609344, max_relative = 1e-12);
        assert_eq!(UNITS.convert(2.0, "Week", "Day", "Time"), 14.0);
        assert_eq!(UNITS.convert(1.0, "Year", "Day", "Time"), 365.0);
    }

    #[test]
    fn test_speed() {
        assert_relative_eq!(UNITS.convert(1.0, "Knot", "Meter per second", "Speed"), 0.514444, max_relative = 1e-12);
        assert_relative_eq!(UNITS.convert(100.0, "Kilometer per hour", "Meter per second", "Speed"), 27.7778, max_relative = 1e-12);
    }

    #[test]
    fn test_unknown_pair_falls_back_to_identity() {
        // Current behavior: unknown units return the input unconverted
        assert_eq!(UNITS.convert(5.0, "Foo", "Bar", "Length"), 5.0);
        assert_eq!(UNITS.convert(5.0, "Meter", "Bar", "Length"), 5.0);
        assert_eq!(UNITS.convert(5.0, "Gram", "Meter", "Length"), 5.0);
    }

    #[test]
    fn test_unknown_category_falls_back_to_identity() {
        assert_eq!(UNITS.convert(5.0, "Meter", "Kilometer", "Distance"), 5.0);
        assert_eq!(UNITS.convert(5.0, "Meter", "Kilometer", "length"), 5.0);
    }

    #[test]
    fn test_temperature_unknown_pair_falls_back() {
        assert_eq!(UNITS.convert(10.0, "Celsius", "Rankine", "Temperature"), 10.0);
        assert_eq!(UNITS.convert(10.0, "Meter", "Kilometer", "Temperature"), 10.0);
    }

    #[test]
    fn test_try_convert_ok() {
        assert_eq!(UNITS.try_convert(5.0, "Kilometer", "Meter", "Length").unwrap(), 5000.0);
        assert_eq!(UNITS.try_convert(0.0, "Celsius", "Fahrenheit", "Temperature").unwrap(), 32.0);
        assert_eq!(UNITS.try_convert(3.0, "Byte", "Byte", "Digital Storage").unwrap(), 3.0);
    }

    #[test]
    fn test_try_convert_errors() {
        assert_eq!(
            UNITS.try_convert(5.0, "Foo", "Bar", "Length").unwrap_err(),
            UnitError::unknown_unit("Foo", "Length")
        );
        assert_eq!(
            UNITS.try_convert(5.0, "Meter", "Bar", "Length").unwrap_err(),
            UnitError::unknown_unit("Bar", "Length")
        );
        assert_eq!(
            UNITS.try_convert(5.0, "Meter", "Meter", "Distance").unwrap_err(),
            UnitError::UnknownCategory("Distance".to_string())
        );
        assert_eq!(
            UNITS.try_convert(10.0, "Celsius", "Rankine", "Temperature").unwrap_err(),
            UnitError::unknown_unit("Rankine", "Temperature")
        );
        // Same name is still validated in strict mode
        assert!(UNITS.try_convert(1.0, "Furlong", "Furlong", "Length").is_err());
    }

    #[test]
    fn test_convert_quantity() {
        let result = UNITS.convert_quantity(1.0, "Kilometer", "Mile", "Length");
        assert_eq!(result.unit, "Mile");
        assert_eq!(result.to_string(), "0.6213711922 Mile");
    }

    #[test]
    fn test_describe_formula() {
        assert_eq!(UNITS.describe_formula("Meter", "Kilometer", "Length"), "divide by 1000");
        assert_eq!(UNITS.describe_formula("Xylophone", "Harp", "Length"), "Convert Xylophone to Harp");
        assert_eq!(UNITS.describe_formula("Meter", "Meter", "Length"), "1 Meter = 1 Meter");
        assert_eq!(
            UNITS.describe_formula("Kelvin", "Fahrenheit", "Temperature"),
            "(K - 273.15) × 9/5 + 32 = °F"
        );
        assert_eq!(UNITS.describe_formula("Hour", "Minute", "Time"), "Convert Hour to Minute");
    }

    #[test]
    fn test_curated_strings_may_be_rounded() {
        // The table says 1.09361; the factors give 1.0936132983...
        assert_eq!(UNITS.describe_formula("Meter", "Yard", "Length"), "multiply by 1.09361");
        assert_eq!(UNITS.derive_formula("Meter", "Yard", "Length").as_deref(), Some("multiply by 1.093613298"));
    }

    #[test]
    fn test_describe_formula_with_derived() {
        assert_eq!(
            UNITS.describe_formula_with(FormulaStyle::Derived, "Hour", "Minute", "Time"),
            "multiply by 60"
        );
    }
}
