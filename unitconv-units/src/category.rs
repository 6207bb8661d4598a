//! Conversion categories
//!
//! The category list is closed: eight categories in a fixed order, each
//! identified by its display name.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use unitconv_core::UnitError;

/// A family of mutually convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Length,
    #[serde(rename = "Mass/Weight")]
    Mass,
    Volume,
    Area,
    Time,
    #[serde(rename = "Digital Storage")]
    DigitalStorage,
    Speed,
    Temperature,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 8] = [
        Category::Length,
        Category::Mass,
        Category::Volume,
        Category::Area,
        Category::Time,
        Category::DigitalStorage,
        Category::Speed,
        Category::Temperature,
    ];

    /// Display name, as accepted by the string-keyed engine functions
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Mass => "Mass/Weight",
            Category::Volume => "Volume",
            Category::Area => "Area",
            Category::Time => "Time",
            Category::DigitalStorage => "Digital Storage",
            Category::Speed => "Speed",
            Category::Temperature => "Temperature",
        }
    }

    /// Exact (case-sensitive) lookup by display name
    pub fn from_name(name: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Case-insensitive lookup, for free-text input
    pub fn from_name_ignore_case(name: &str) -> Option<Category> {
        let name = name.trim();
        Self::ALL.into_iter().find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Whether units in this category share a multiplicative base
    pub fn is_linear(&self) -> bool {
        !matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_name(s).ok_or_else(|| UnitError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, [
            "Length", "Mass/Weight", "Volume", "Area",
            "Time", "Digital Storage", "Speed", "Temperature",
        ]);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Category::from_name("Mass/Weight"), Some(Category::Mass));
        assert_eq!(Category::from_name("Digital Storage"), Some(Category::DigitalStorage));
        assert_eq!(Category::from_name("length"), None);
        assert_eq!(Category::from_name_ignore_case(" length "), Some(Category::Length));
    }

    #[test]
    fn test_from_str_error() {
        let err = "Pressure".parse::<Category>().unwrap_err();
        assert_eq!(err, UnitError::UnknownCategory("Pressure".to_string()));
    }

    #[test]
    fn test_linear() {
        assert!(Category::Length.is_linear());
        assert!(!Category::Temperature.is_linear());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Category::DigitalStorage), "Digital Storage");
    }
}
