//! Query parsing - free text like "5 Kilometer to Mile"
//!
//! Unit names may contain spaces ("Metric Ton", "Mile per hour"), so the
//! query is split on a separator first and each side resolved as a whole.

use serde::{Serialize, Deserialize};
use unitconv_core::UnitError;
use crate::{Category, Unit, UnitRegistry};

/// Separators between source and target unit, tried in order
const SEPARATORS: [&str; 4] = ["->", "→", " to ", " in "];

/// A parsed conversion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub value: f64,
    pub from: String,
    pub to: String,
    pub category: Category,
}

impl UnitRegistry {
    /// Parse a conversion like "Kilometer -> Mile" into its two units
    pub fn parse_conversion(&self, s: &str) -> Result<(&Unit, &Unit), UnitError> {
        let (from, to) = split_conversion(s)?;
        let from = self.lookup(from)?;
        let to = self.lookup(to)?;

        if from.category != to.category {
            return Err(UnitError::IncompatibleUnits {
                from: from.name.clone(),
                to: to.name.clone(),
                from_category: from.category.name().to_string(),
                to_category: to.category.name().to_string(),
            });
        }
        Ok((from, to))
    }

    /// Parse a full query like "5 Kilometer to Mile"
    ///
    /// The category is the source unit's; unit names are canonicalized.
    pub fn parse_query(&self, s: &str) -> Result<Query, UnitError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(UnitError::Parse("empty query".to_string()));
        }

        let (number, rest) = split_leading_number(s);
        let value = number.parse::<f64>()
            .map_err(|_| UnitError::Parse(format!("expected a number at the start of '{}'", s)))?;

        let (from, to) = self.parse_conversion(rest)?;
        Ok(Query {
            value,
            from: from.name.clone(),
            to: to.name.clone(),
            category: from.category,
        })
    }

    fn lookup(&self, name: &str) -> Result<&Unit, UnitError> {
        self.resolve(name)
            .ok_or_else(|| UnitError::unknown_unit(name.trim(), "any category"))
    }
}

fn split_conversion(s: &str) -> Result<(&str, &str), UnitError> {
    for sep in SEPARATORS {
        if let Some((from, to)) = s.split_once(sep) {
            if from.trim().is_empty() || to.trim().is_empty() {
                return Err(UnitError::Parse(format!("missing unit around '{}'", sep.trim())));
            }
            return Ok((from.trim(), to.trim()));
        }
    }
    Err(UnitError::Parse(format!("expected 'A to B' or 'A -> B', got '{}'", s.trim())))
}

/// Split "5.5e3 Meter" into ("5.5e3", "Meter"); "100kg" style has no space
fn split_leading_number(s: &str) -> (&str, &str) {
    let mut end = 0;
    let mut prev: Option<char> = None;

    for (i, c) in s.char_indices() {
        let accepted = c.is_ascii_digit()
            || c == '.'
            || ((c == '-' || c == '+') && (i == 0 || matches!(prev, Some('e') | Some('E'))))
            || ((c == 'e' || c == 'E') && prev.is_some_and(|p| p.is_ascii_digit()) && exponent_follows(&s[i + 1..]));

        if !accepted {
            break;
        }
        end = i + c.len_utf8();
        prev = Some(c);
    }

    (&s[..end], &s[end..])
}

/// An exponent marker only counts if digits follow, so "5 Exabyte" stays intact
fn exponent_follows(rest: &str) -> bool {
    let rest = rest.strip_prefix(['+', '-']).unwrap_or(rest);
    rest.starts_with(|c: char| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNITS;

    #[test]
    fn test_parse_conversion_arrow() {
        let (from, to) = UNITS.parse_conversion("Kilometer->Mile").unwrap();
        assert_eq!(from.name, "Kilometer");
        assert_eq!(to.name, "Mile");

        let (from, to) = UNITS.parse_conversion("Celsius → Fahrenheit").unwrap();
        assert_eq!(from.name, "Celsius");
        assert_eq!(to.name, "Fahrenheit");
    }

    #[test]
    fn test_parse_conversion_multiword_units() {
        let (from, to) = UNITS.parse_conversion("mile per hour to meter per second").unwrap();
        assert_eq!(from.name, "Mile per hour");
        assert_eq!(to.name, "Meter per second");
    }

    #[test]
    fn test_parse_conversion_incompatible() {
        let err = UNITS.parse_conversion("Meter to Gram").unwrap_err();
        assert!(matches!(err, UnitError::IncompatibleUnits { .. }));
    }

    #[test]
    fn test_parse_query() {
        let q = UNITS.parse_query("5 Kilometer to Mile").unwrap();
        assert_eq!(q, Query {
            value: 5.0,
            from: "Kilometer".to_string(),
            to: "Mile".to_string(),
            category: Category::Length,
        });
    }

    #[test]
    fn test_parse_query_number_forms() {
        let q = UNITS.parse_query("-3.5 celsius in kelvin").unwrap();
        assert_eq!(q.value, -3.5);
        assert_eq!(q.category, Category::Temperature);

        let q = UNITS.parse_query("1.5e3 Gram -> Kilogram").unwrap();
        assert_eq!(q.value, 1500.0);

        let q = UNITS.parse_query("100Metric Ton to Pound").unwrap();
        assert_eq!(q.value, 100.0);
        assert_eq!(q.from, "Metric Ton");
    }

    #[test]
    fn test_parse_query_exponent_needs_digits() {
        let (number, rest) = split_leading_number("2 Exabyte");
        assert_eq!(number, "2");
        assert_eq!(rest, " Exabyte");

        let (number, rest) = split_leading_number("2e-3 Byte");
        assert_eq!(number, "2e-3");
        assert_eq!(rest, " Byte");
    }

    #[test]
    fn test_parse_query_errors() {
        assert!(matches!(UNITS.parse_query(""), Err(UnitError::Parse(_))));
        assert!(matches!(UNITS.parse_query("Meter to Foot"), Err(UnitError::Parse(_))));
        assert!(matches!(UNITS.parse_query("5 Meter Foot"), Err(UnitError::Parse(_))));
        assert!(matches!(UNITS.parse_query("5 Furlong to Meter"), Err(UnitError::UnknownUnit { .. })));
        assert!(matches!(UNITS.parse_query("5 to Meter"), Err(UnitError::Parse(_))));
    }
}
