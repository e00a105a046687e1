//! Nutrient columns of the servings export
//!
//! Each [`Nutrient`] is a field selector: it names the export column it is read
//! from and the unit its amount is implied to be in.

use std::ops::{Add, Index, IndexMut};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::units::NutrientUnit;

/// A nutrient tracked by the servings export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Energy,
    Caffeine,
    Water,
    B1,
    B2,
    B3,
    B5,
    B6,
    B12,
    Biotin,
    Choline,
    Folate,
    VitaminA,
    VitaminC,
    VitaminD,
    VitaminE,
    VitaminK,
    Calcium,
    Chromium,
    Copper,
    Fluoride,
    Iodine,
    Iron,
    Magnesium,
    Manganese,
    Phosphorus,
    Potassium,
    Selenium,
    Sodium,
    Zinc,
    Carbs,
    Fiber,
    Fructose,
    Galactose,
    Glucose,
    Lactose,
    Maltose,
    Starch,
    Sucrose,
    Sugars,
    NetCarbs,
    Fat,
    Cholesterol,
    Monounsaturated,
    Polyunsaturated,
    Saturated,
    TransFats,
    Omega3,
    Omega6,
    Cystine,
    Histidine,
    Isoleucine,
    Leucine,
    Lysine,
    Methionine,
    Phenylalanine,
    Protein,
    Threonine,
    Tryptophan,
    Tyrosine,
    Valine,
}

/// Static description of a nutrient column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NutrientInfo {
    /// Exact column name in the export header
    pub column: &'static str,
    /// Stable snake_case key used when serializing
    pub key: &'static str,
    /// Human readable name used in error messages
    pub label: &'static str,
    pub unit: NutrientUnit,
}

const fn info(
    column: &'static str,
    key: &'static str,
    label: &'static str,
    unit: NutrientUnit,
) -> NutrientInfo {
    NutrientInfo {
        column,
        key,
        label,
        unit,
    }
}

impl Nutrient {
    pub const COUNT: usize = 61;

    /// All nutrients in export column order
    pub const ALL: [Nutrient; Nutrient::COUNT] = [
        Nutrient::Energy,
        Nutrient::Caffeine,
        Nutrient::Water,
        Nutrient::B1,
        Nutrient::B2,
        Nutrient::B3,
        Nutrient::B5,
        Nutrient::B6,
        Nutrient::B12,
        Nutrient::Biotin,
        Nutrient::Choline,
        Nutrient::Folate,
        Nutrient::VitaminA,
        Nutrient::VitaminC,
        Nutrient::VitaminD,
        Nutrient::VitaminE,
        Nutrient::VitaminK,
        Nutrient::Calcium,
        Nutrient::Chromium,
        Nutrient::Copper,
        Nutrient::Fluoride,
        Nutrient::Iodine,
        Nutrient::Iron,
        Nutrient::Magnesium,
        Nutrient::Manganese,
        Nutrient::Phosphorus,
        Nutrient::Potassium,
        Nutrient::Selenium,
        Nutrient::Sodium,
        Nutrient::Zinc,
        Nutrient::Carbs,
        Nutrient::Fiber,
        Nutrient::Fructose,
        Nutrient::Galactose,
        Nutrient::Glucose,
        Nutrient::Lactose,
        Nutrient::Maltose,
        Nutrient::Starch,
        Nutrient::Sucrose,
        Nutrient::Sugars,
        Nutrient::NetCarbs,
        Nutrient::Fat,
        Nutrient::Cholesterol,
        Nutrient::Monounsaturated,
        Nutrient::Polyunsaturated,
        Nutrient::Saturated,
        Nutrient::TransFats,
        Nutrient::Omega3,
        Nutrient::Omega6,
        Nutrient::Cystine,
        Nutrient::Histidine,
        Nutrient::Isoleucine,
        Nutrient::Leucine,
        Nutrient::Lysine,
        Nutrient::Methionine,
        Nutrient::Phenylalanine,
        Nutrient::Protein,
        Nutrient::Threonine,
        Nutrient::Tryptophan,
        Nutrient::Tyrosine,
        Nutrient::Valine,
    ];

    pub const fn info(&self) -> NutrientInfo {
        match self {
            Nutrient::Energy => info("Energy (kcal)", "energy_kcal", "energy", NutrientUnit::Kilocalorie),
            Nutrient::Caffeine => info("Caffeine (mg)", "caffeine_mg", "caffeine", NutrientUnit::Milligram),
            Nutrient::Water => info("Water (g)", "water_g", "water", NutrientUnit::Gram),
            Nutrient::B1 => info("B1 (Thiamine) (mg)", "vitamin_b1_mg", "vitamin B1", NutrientUnit::Milligram),
            Nutrient::B2 => info("B2 (Riboflavin) (mg)", "vitamin_b2_mg", "vitamin B2", NutrientUnit::Milligram),
            Nutrient::B3 => info("B3 (Niacin) (mg)", "vitamin_b3_mg", "vitamin B3", NutrientUnit::Milligram),
            Nutrient::B5 => info("B5 (Pantothenic Acid) (mg)", "vitamin_b5_mg", "vitamin B5", NutrientUnit::Milligram),
            Nutrient::B6 => info("B6 (Pyridoxine) (mg)", "vitamin_b6_mg", "vitamin B6", NutrientUnit::Milligram),
            Nutrient::B12 => info("B12 (Cobalamin) (µg)", "vitamin_b12_ug", "vitamin B12", NutrientUnit::Microgram),
            Nutrient::Biotin => info("Biotin (µg)", "biotin_ug", "biotin", NutrientUnit::Microgram),
            Nutrient::Choline => info("Choline (mg)", "choline_mg", "choline", NutrientUnit::Milligram),
            Nutrient::Folate => info("Folate (µg)", "folate_ug", "folate", NutrientUnit::Microgram),
            Nutrient::VitaminA => info("Vitamin A (IU)", "vitamin_a_iu", "vitamin A", NutrientUnit::InternationalUnit),
            Nutrient::VitaminC => info("Vitamin C (mg)", "vitamin_c_mg", "vitamin C", NutrientUnit::Milligram),
            Nutrient::VitaminD => info("Vitamin D (IU)", "vitamin_d_iu", "vitamin D", NutrientUnit::InternationalUnit),
            Nutrient::VitaminE => info("Vitamin E (mg)", "vitamin_e_mg", "vitamin E", NutrientUnit::Milligram),
            Nutrient::VitaminK => info("Vitamin K (µg)", "vitamin_k_ug", "vitamin K", NutrientUnit::Microgram),
            Nutrient::Calcium => info("Calcium (mg)", "calcium_mg", "calcium", NutrientUnit::Milligram),
            Nutrient::Chromium => info("Chromium (µg)", "chromium_ug", "chromium", NutrientUnit::Microgram),
            Nutrient::Copper => info("Copper (mg)", "copper_mg", "copper", NutrientUnit::Milligram),
            Nutrient::Fluoride => info("Fluoride (µg)", "fluoride_ug", "fluoride", NutrientUnit::Microgram),
            Nutrient::Iodine => info("Iodine (µg)", "iodine_ug", "iodine", NutrientUnit::Microgram),
            Nutrient::Iron => info("Iron (mg)", "iron_mg", "iron", NutrientUnit::Milligram),
            Nutrient::Magnesium => info("Magnesium (mg)", "magnesium_mg", "magnesium", NutrientUnit::Milligram),
            Nutrient::Manganese => info("Manganese (mg)", "manganese_mg", "manganese", NutrientUnit::Milligram),
            Nutrient::Phosphorus => info("Phosphorus (mg)", "phosphorus_mg", "phosphorus", NutrientUnit::Milligram),
            Nutrient::Potassium => info("Potassium (mg)", "potassium_mg", "potassium", NutrientUnit::Milligram),
            Nutrient::Selenium => info("Selenium (µg)", "selenium_ug", "selenium", NutrientUnit::Microgram),
            Nutrient::Sodium => info("Sodium (mg)", "sodium_mg", "sodium", NutrientUnit::Milligram),
            Nutrient::Zinc => info("Zinc (mg)", "zinc_mg", "zinc", NutrientUnit::Milligram),
            Nutrient::Carbs => info("Carbs (g)", "carbs_g", "carbohydrates", NutrientUnit::Gram),
            Nutrient::Fiber => info("Fiber (g)", "fiber_g", "fiber", NutrientUnit::Gram),
            Nutrient::Fructose => info("Fructose (g)", "fructose_g", "fructose", NutrientUnit::Gram),
            Nutrient::Galactose => info("Galactose (g)", "galactose_g", "galactose", NutrientUnit::Gram),
            Nutrient::Glucose => info("Glucose (g)", "glucose_g", "glucose", NutrientUnit::Gram),
            Nutrient::Lactose => info("Lactose (g)", "lactose_g", "lactose", NutrientUnit::Gram),
            Nutrient::Maltose => info("Maltose (g)", "maltose_g", "maltose", NutrientUnit::Gram),
            Nutrient::Starch => info("Starch (g)", "starch_g", "starch", NutrientUnit::Gram),
            Nutrient::Sucrose => info("Sucrose (g)", "sucrose_g", "sucrose", NutrientUnit::Gram),
            Nutrient::Sugars => info("Sugars (g)", "sugars_g", "sugars", NutrientUnit::Gram),
            Nutrient::NetCarbs => info("Net Carbs (g)", "net_carbs_g", "net carbs", NutrientUnit::Gram),
            Nutrient::Fat => info("Fat (g)", "fat_g", "fat", NutrientUnit::Gram),
            Nutrient::Cholesterol => info("Cholesterol (mg)", "cholesterol_mg", "cholesterol", NutrientUnit::Milligram),
            Nutrient::Monounsaturated => info("Monounsaturated (g)", "monounsaturated_g", "monounsaturated fat", NutrientUnit::Gram),
            Nutrient::Polyunsaturated => info("Polyunsaturated (g)", "polyunsaturated_g", "polyunsaturated fat", NutrientUnit::Gram),
            Nutrient::Saturated => info("Saturated (g)", "saturated_g", "saturated fat", NutrientUnit::Gram),
            Nutrient::TransFats => info("Trans-Fats (g)", "trans_fats_g", "trans fat", NutrientUnit::Gram),
            Nutrient::Omega3 => info("Omega-3 (g)", "omega3_g", "omega-3", NutrientUnit::Gram),
            Nutrient::Omega6 => info("Omega-6 (g)", "omega6_g", "omega-6", NutrientUnit::Gram),
            Nutrient::Cystine => info("Cystine (g)", "cystine_g", "cystine", NutrientUnit::Gram),
            Nutrient::Histidine => info("Histidine (g)", "histidine_g", "histidine", NutrientUnit::Gram),
            Nutrient::Isoleucine => info("Isoleucine (g)", "isoleucine_g", "isoleucine", NutrientUnit::Gram),
            Nutrient::Leucine => info("Leucine (g)", "leucine_g", "leucine", NutrientUnit::Gram),
            Nutrient::Lysine => info("Lysine (g)", "lysine_g", "lysine", NutrientUnit::Gram),
            Nutrient::Methionine => info("Methionine (g)", "methionine_g", "methionine", NutrientUnit::Gram),
            Nutrient::Phenylalanine => info("Phenylalanine (g)", "phenylalanine_g", "phenylalanine", NutrientUnit::Gram),
            Nutrient::Protein => info("Protein (g)", "protein_g", "protein", NutrientUnit::Gram),
            Nutrient::Threonine => info("Threonine (g)", "threonine_g", "threonine", NutrientUnit::Gram),
            Nutrient::Tryptophan => info("Tryptophan (g)", "tryptophan_g", "tryptophan", NutrientUnit::Gram),
            Nutrient::Tyrosine => info("Tyrosine (g)", "tyrosine_g", "tyrosine", NutrientUnit::Gram),
            Nutrient::Valine => info("Valine (g)", "valine_g", "valine", NutrientUnit::Gram),
        }
    }

    pub const fn column(&self) -> &'static str {
        self.info().column
    }

    pub const fn key(&self) -> &'static str {
        self.info().key
    }

    pub const fn label(&self) -> &'static str {
        self.info().label
    }

    pub const fn unit(&self) -> NutrientUnit {
        self.info().unit
    }

    /// Look up the nutrient read from `column` (exact, case-sensitive)
    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.column() == column)
    }

    const fn index(&self) -> usize {
        *self as usize
    }
}

/// Nutrient amounts of one serving, each in the unit its [`Nutrient`] declares
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutrients {
    amounts: [f64; Nutrient::COUNT],
}

impl Default for Nutrients {
    fn default() -> Self {
        Self::zero()
    }
}

impl Nutrients {
    /// All amounts zero
    pub const fn zero() -> Self {
        Self {
            amounts: [0.0; Nutrient::COUNT],
        }
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        self.amounts[nutrient.index()]
    }

    pub fn set(&mut self, nutrient: Nutrient, amount: f64) {
        self.amounts[nutrient.index()] = amount;
    }

    /// (nutrient, amount) pairs in export column order
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL.into_iter().map(move |n| (n, self.get(n)))
    }

    /// Scale every amount by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        let mut scaled = *self;
        scaled.amounts.iter_mut().for_each(|a| *a *= multiplier);
        scaled
    }
}

impl Index<Nutrient> for Nutrients {
    type Output = f64;

    fn index(&self, nutrient: Nutrient) -> &f64 {
        &self.amounts[nutrient.index()]
    }
}

impl IndexMut<Nutrient> for Nutrients {
    fn index_mut(&mut self, nutrient: Nutrient) -> &mut f64 {
        &mut self.amounts[nutrient.index()]
    }
}

impl Add for Nutrients {
    type Output = Nutrients;

    fn add(self, other: Nutrients) -> Nutrients {
        let mut total = self;
        for (a, b) in total.amounts.iter_mut().zip(other.amounts.iter()) {
            *a += b;
        }
        total
    }
}

impl std::iter::Sum for Nutrients {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrients::zero(), |acc, n| acc + n)
    }
}

impl Serialize for Nutrients {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Nutrient::COUNT))?;
        for (nutrient, amount) in self.iter() {
            map.serialize_entry(nutrient.key(), &amount)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_declaration_order() {
        for (i, nutrient) in Nutrient::ALL.iter().enumerate() {
            assert_eq!(nutrient.index(), i, "{nutrient:?}");
        }
    }

    #[test]
    fn test_columns_and_keys_are_unique() {
        let mut columns: Vec<_> = Nutrient::ALL.iter().map(|n| n.column()).collect();
        let mut keys: Vec<_> = Nutrient::ALL.iter().map(|n| n.key()).collect();
        columns.sort();
        columns.dedup();
        keys.sort();
        keys.dedup();
        assert_eq!(columns.len(), Nutrient::COUNT);
        assert_eq!(keys.len(), Nutrient::COUNT);
    }

    #[test]
    fn test_column_suffix_matches_unit() {
        for nutrient in Nutrient::ALL {
            let suffix = format!("({})", nutrient.unit().symbol());
            assert!(nutrient.column().ends_with(&suffix), "{}", nutrient.column());
        }
    }

    #[test]
    fn test_from_column() {
        assert_eq!(Nutrient::from_column("Iron (mg)"), Some(Nutrient::Iron));
        assert_eq!(
            Nutrient::from_column("B12 (Cobalamin) (\u{b5}g)"),
            Some(Nutrient::B12)
        );
        assert_eq!(Nutrient::from_column("iron (mg)"), None);
        assert_eq!(Nutrient::from_column("Iron"), None);
    }

    #[test]
    fn test_units_follow_columns() {
        assert_eq!(Nutrient::Energy.unit(), NutrientUnit::Kilocalorie);
        assert_eq!(Nutrient::B12.unit(), NutrientUnit::Microgram);
        assert_eq!(Nutrient::VitaminA.unit(), NutrientUnit::InternationalUnit);
        assert_eq!(Nutrient::Cholesterol.unit(), NutrientUnit::Milligram);
        assert_eq!(Nutrient::B1.label(), "vitamin B1");
    }

    #[test]
    fn test_nutrients_index_and_sum() {
        let mut a = Nutrients::zero();
        a[Nutrient::Protein] = 10.0;
        a.set(Nutrient::Energy, 100.0);

        let mut b = Nutrients::default();
        b[Nutrient::Protein] = 5.0;

        let total: Nutrients = vec![a, b].into_iter().sum();
        assert_eq!(total.get(Nutrient::Protein), 15.0);
        assert_eq!(total[Nutrient::Energy], 100.0);
        assert_eq!(total.scale(2.0)[Nutrient::Protein], 30.0);
        assert_eq!(total.get(Nutrient::Fat), 0.0);
    }

    #[test]
    fn test_serializes_as_keyed_map() {
        let mut n = Nutrients::zero();
        n[Nutrient::Iron] = 2.5;

        let value = serde_json::to_value(n).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), Nutrient::COUNT);
        assert_eq!(map["iron_mg"], 2.5);
        assert_eq!(map["energy_kcal"], 0.0);
    }
}
