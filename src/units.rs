//! Unit types and conversion constants
//!
//! Nutrient units are fixed by the export's column suffixes. Serving quantity
//! units are free text ("g", "cup", "tbsp (20g)") and are only recognized
//! well enough to normalize weights and volumes.

use serde::{Deserialize, Serialize};

/// Unit a nutrient amount is expressed in, as declared by its column name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientUnit {
    Kilocalorie,
    Gram,
    Milligram,
    Microgram,
    InternationalUnit,
}

impl NutrientUnit {
    /// Suffix used inside the export's column names
    pub const fn symbol(&self) -> &'static str {
        match self {
            NutrientUnit::Kilocalorie => "kcal",
            NutrientUnit::Gram => "g",
            NutrientUnit::Milligram => "mg",
            NutrientUnit::Microgram => "µg",
            NutrientUnit::InternationalUnit => "IU",
        }
    }
}

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

pub const ML_PER_TSP: f64 = 4.92892;
pub const ML_PER_TBSP: f64 = 14.7868;
pub const ML_PER_FL_OZ: f64 = 29.5735;
pub const ML_PER_CUP: f64 = 236.588;
pub const ML_PER_LITER: f64 = 1000.0;

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

pub const G_PER_UG: f64 = 0.000001;
pub const G_PER_MG: f64 = 0.001;
pub const G_PER_KG: f64 = 1000.0;
pub const G_PER_OZ: f64 = 28.3495;
pub const G_PER_LB: f64 = 453.592;

/// Get the conversion factor to grams for a weight unit
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    match unit.trim().to_lowercase().as_str() {
        "g" | "gram" | "grams" => Some(1.0),
        "mg" | "milligram" | "milligrams" => Some(G_PER_MG),
        "µg" | "ug" | "mcg" => Some(G_PER_UG),
        "kg" | "kilogram" | "kilograms" => Some(G_PER_KG),
        "oz" | "ounce" | "ounces" => Some(G_PER_OZ),
        "lb" | "lbs" | "pound" | "pounds" => Some(G_PER_LB),
        _ => None,
    }
}

/// Get the conversion factor to milliliters for a volume unit
pub fn ml_per_unit(unit: &str) -> Option<f64> {
    match unit.trim().to_lowercase().as_str() {
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Some(1.0),
        "l" | "liter" | "liters" | "litre" | "litres" => Some(ML_PER_LITER),
        "tsp" | "teaspoon" | "teaspoons" => Some(ML_PER_TSP),
        "tbsp" | "tablespoon" | "tablespoons" => Some(ML_PER_TBSP),
        "fl oz" | "floz" | "fluid ounce" | "fluid ounces" => Some(ML_PER_FL_OZ),
        "cup" | "cups" => Some(ML_PER_CUP),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrient_unit_symbols() {
        assert_eq!(NutrientUnit::Kilocalorie.symbol(), "kcal");
        assert_eq!(NutrientUnit::Microgram.symbol(), "\u{b5}g");
        assert_eq!(NutrientUnit::InternationalUnit.symbol(), "IU");
    }

    #[test]
    fn test_grams_per_unit() {
        assert_eq!(grams_per_unit("g"), Some(1.0));
        assert_eq!(grams_per_unit("LB"), Some(G_PER_LB));
        assert_eq!(grams_per_unit("mcg"), Some(G_PER_UG));
        assert_eq!(grams_per_unit("tbsp"), None);
    }

    #[test]
    fn test_ml_per_unit() {
        assert_eq!(ml_per_unit("ml"), Some(1.0));
        assert_eq!(ml_per_unit("fl oz"), Some(ML_PER_FL_OZ));
        assert_eq!(ml_per_unit("g"), None);
    }
}
