//! Unit representation with conversion factors

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::Category;

/// How a unit relates to its category's base unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "factor", rename_all = "lowercase")]
pub enum Scale {
    /// value_base = value * factor
    Linear(f64),
    /// No shared base; converted through pairwise temperature rules
    Affine,
}

/// A unit registered under exactly one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// The unit name (e.g., "Meter", "Metric Ton")
    pub name: String,
    /// The category this unit belongs to
    pub category: Category,
    /// Relationship to the category's base unit
    pub scale: Scale,
}

impl Unit {
    /// Create a unit with a linear factor to its base
    pub fn new(name: &str, category: Category, factor: f64) -> Self {
        Unit {
            name: name.to_string(),
            category,
            scale: Scale::Linear(factor),
        }
    }

    /// Create an affine unit (temperature)
    pub fn affine(name: &str, category: Category) -> Self {
        Unit {
            name: name.to_string(),
            category,
            scale: Scale::Affine,
        }
    }

    /// The linear factor, if this unit has one
    pub fn factor(&self) -> Option<f64> {
        match self.scale {
            Scale::Linear(k) => Some(k),
            Scale::Affine => None,
        }
    }

    /// Check if this is the base unit of its category
    pub fn is_base(&self) -> bool {
        self.factor() == Some(1.0)
    }

    /// Convert a value from this unit to the base unit
    pub fn to_base(&self, value: f64) -> Option<f64> {
        self.factor().map(|k| value * k)
    }

    /// Convert a value from the base unit to this unit
    pub fn from_base(&self, base: f64) -> Option<f64> {
        self.factor().map(|k| base / k)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        Unit::new("Meter", Category::Length, 1.0)
    }

    fn kilometer() -> Unit {
        Unit::new("Kilometer", Category::Length, 1000.0)
    }

    #[test]
    fn test_base_unit() {
        assert!(meter().is_base());
        assert!(!kilometer().is_base());
        assert!(!Unit::affine("Celsius", Category::Temperature).is_base());
    }

    #[test]
    fn test_to_base() {
        assert_eq!(kilometer().to_base(5.0), Some(5000.0));
        assert_eq!(meter().to_base(5.0), Some(5.0));
    }

    #[test]
    fn test_from_base() {
        assert_eq!(kilometer().from_base(5000.0), Some(5.0));
    }

    #[test]
    fn test_affine_has_no_factor() {
        let c = Unit::affine("Celsius", Category::Temperature);
        assert_eq!(c.factor(), None);
        assert_eq!(c.to_base(10.0), None);
        assert_eq!(c.from_base(10.0), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", kilometer()), "Kilometer");
    }
}
