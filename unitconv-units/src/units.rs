//! Unit definitions - the fixed conversion table, organized by category

use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;
use unitconv_core::UnitError;
use crate::{Category, Unit};
use crate::temperature::{CELSIUS, FAHRENHEIT, KELVIN};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(|| {
    UnitRegistry::try_new()
        .unwrap_or_else(|e| panic!("built-in unit table is inconsistent: {}", e))
});

/// Registry of all known units
///
/// Immutable once built. Unit names are unique across categories, so a name
/// alone identifies a unit.
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    units: HashMap<String, Unit>,
    /// Unit names per category, in registration order
    order: HashMap<Category, Vec<String>>,
}

impl UnitRegistry {
    /// Build the built-in table
    pub fn try_new() -> Result<Self, UnitError> {
        let mut builder = RegistryBuilder::new();
        builder.register_all_units();
        builder.build()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Get a unit by exact name
    pub fn get(&self, name: &str) -> Option<&Unit> {
        self.units.get(name)
    }

    /// Get a unit by name, ignoring ASCII case and surrounding whitespace
    pub fn resolve(&self, name: &str) -> Option<&Unit> {
        let name = name.trim();
        if let Some(unit) = self.units.get(name) {
            return Some(unit);
        }
        self.units.values().find(|u| u.name.eq_ignore_ascii_case(name))
    }

    /// Category a unit is registered under
    pub fn category_of(&self, name: &str) -> Option<Category> {
        self.get(name).map(|u| u.category)
    }

    /// All categories in display order
    pub fn categories(&self) -> [Category; 8] {
        Category::ALL
    }

    /// Ordered units of a category
    pub fn units_in(&self, category: Category) -> Vec<&Unit> {
        self.order.get(&category)
            .map(|names| names.iter().filter_map(|n| self.units.get(n)).collect())
            .unwrap_or_default()
    }

    /// Ordered unit names of a category, looked up by display name
    pub fn units_of(&self, category: &str) -> Result<Vec<&str>, UnitError> {
        let category: Category = category.parse()?;
        Ok(self.units_in(category).into_iter().map(|u| u.name.as_str()).collect())
    }

    /// Unit registered under the given category
    pub fn unit_in(&self, category: Category, name: &str) -> Result<&Unit, UnitError> {
        self.get(name)
            .filter(|u| u.category == category)
            .ok_or_else(|| UnitError::unknown_unit(name, category.name()))
    }

    /// Linear factor of a unit relative to its category's base unit
    pub fn factor_of(&self, category: &str, unit: &str) -> Result<f64, UnitError> {
        let category: Category = category.parse()?;
        let unit = self.unit_in(category, unit)?;
        unit.factor().ok_or_else(|| UnitError::NotLinear(unit.name.clone()))
    }

    /// The unit with factor 1, for linear categories
    pub fn base_unit(&self, category: Category) -> Option<&Unit> {
        self.units_in(category).into_iter().find(|u| u.is_base())
    }

    /// Total number of registered units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Collects unit definitions and checks the registry invariants on build
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    units: Vec<Unit>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, unit: Unit) -> &mut Self {
        self.units.push(unit);
        self
    }

    /// Validate and freeze.
    ///
    /// Fails if a unit name appears twice (in any categories) or if a linear
    /// category that has units does not have exactly one base unit.
    pub fn build(self) -> Result<UnitRegistry, UnitError> {
        let mut units: HashMap<String, Unit> = HashMap::with_capacity(self.units.len());
        let mut order: HashMap<Category, Vec<String>> = HashMap::new();

        for unit in self.units {
            if let Some(existing) = units.get(&unit.name) {
                return Err(UnitError::DuplicateUnit {
                    unit: unit.name.clone(),
                    first: existing.category.name().to_string(),
                    second: unit.category.name().to_string(),
                });
            }
            order.entry(unit.category).or_default().push(unit.name.clone());
            units.insert(unit.name.clone(), unit);
        }

        for (category, names) in &order {
            if !category.is_linear() {
                continue;
            }
            let count = names.iter().filter(|n| units[n.as_str()].is_base()).count();
            if count != 1 {
                return Err(UnitError::BaseUnit {
                    category: category.name().to_string(),
                    count,
                });
            }
        }

        debug!(units = units.len(), categories = order.len(), "unit registry built");
        Ok(UnitRegistry { units, order })
    }

    fn linear(&mut self, category: Category, name: &str, factor: f64) {
        self.register(Unit::new(name, category, factor));
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_mass_units();
        self.register_volume_units();
        self.register_area_units();
        self.register_time_units();
        self.register_data_units();
        self.register_speed_units();
        self.register_temperature_units();
    }

    fn register_length_units(&mut self) {
        let c = Category::Length;
        self.linear(c, "Meter", 1.0);
        self.linear(c, "Kilometer", 1000.0);
        self.linear(c, "Centimeter", 0.01);
        self.linear(c, "Millimeter", 0.001);
        self.linear(c, "Mile", 1609.344);
        self.linear(c, "Yard", 0.9144);
        self.linear(c, "Foot", 0.3048);
        self.linear(c, "Inch", 0.0254);
    }

    fn register_mass_units(&mut self) {
        let c = Category::Mass;
        self.linear(c, "Kilogram", 1000.0);
        self.linear(c, "Gram", 1.0);
        self.linear(c, "Milligram", 0.001);
        self.linear(c, "Metric Ton", 1_000_000.0);
        self.linear(c, "Pound", 453.59237);
        self.linear(c, "Ounce", 28.349523125);
    }

    fn register_volume_units(&mut self) {
        let c = Category::Volume;
        self.linear(c, "Liter", 1.0);
        self.linear(c, "Milliliter", 0.001);
        self.linear(c, "Cubic Meter", 1000.0);
        // US liquid measures, rounded to six significant digits
        self.linear(c, "Gallon", 3.78541);
        self.linear(c, "Quart", 0.946353);
        self.linear(c, "Pint", 0.473176);
        self.linear(c, "Cup", 0.236588);
        self.linear(c, "Fluid Ounce", 0.0295735);
    }

    fn register_area_units(&mut self) {
        let c = Category::Area;
        self.linear(c, "Square Meter", 1.0);
        self.linear(c, "Square Kilometer", 1_000_000.0);
        self.linear(c, "Square Centimeter", 0.0001);
        self.linear(c, "Hectare", 10000.0);
        self.linear(c, "Square Mile", 2589988.11);
        self.linear(c, "Acre", 4046.86);
        self.linear(c, "Square Foot", 0.092903);
        self.linear(c, "Square Inch", 0.00064516);
    }

    fn register_time_units(&mut self) {
        let c = Category::Time;
        self.linear(c, "Second", 1.0);
        self.linear(c, "Minute", 60.0);
        self.linear(c, "Hour", 3600.0);
        self.linear(c, "Day", 86400.0);
        self.linear(c, "Week", 604800.0);
        // 30-day month, 365-day year
        self.linear(c, "Month", 2_592_000.0);
        self.linear(c, "Year", 31_536_000.0);
    }

    fn register_data_units(&mut self) {
        // Binary multiples: a kilobyte is 1024 bytes
        let c = Category::DigitalStorage;
        self.linear(c, "Bit", 1.0);
        self.linear(c, "Byte", 8.0);
        self.linear(c, "Kilobyte", (8u64 * 1024) as f64);
        self.linear(c, "Megabyte", (8u64 * 1024 * 1024) as f64);
        self.linear(c, "Gigabyte", (8u64 * 1024 * 1024 * 1024) as f64);
        self.linear(c, "Terabyte", (8u64 * 1024 * 1024 * 1024 * 1024) as f64);
    }

    fn register_speed_units(&mut self) {
        let c = Category::Speed;
        self.linear(c, "Meter per second", 1.0);
        self.linear(c, "Kilometer per hour", 0.277778);
        self.linear(c, "Mile per hour", 0.44704);
        self.linear(c, "Knot", 0.514444);
        self.linear(c, "Foot per second", 0.3048);
    }

    fn register_temperature_units(&mut self) {
        let c = Category::Temperature;
        self.register(Unit::affine(CELSIUS, c));
        self.register(Unit::affine(FAHRENHEIT, c));
        self.register(Unit::affine(KELVIN, c));
    }
}
