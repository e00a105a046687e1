//! Serving model
//!
//! One logged food entry from the servings export, with its full nutrient breakdown.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

use super::{ExportKind, Nutrient, Nutrients};
use crate::coerce;
use crate::decode::RecordFamily;
use crate::error::ImportResult;
use crate::units::{grams_per_unit, ml_per_unit};

/// A logged serving
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServingRecord {
    pub recorded_time: DateTime<Tz>,
    pub group: String,
    pub food_name: String,
    pub quantity_value: f64,
    pub quantity_units: String,
    pub nutrients: Nutrients,
    pub category: String,
}

pub type ServingRecords = Vec<ServingRecord>;

impl ServingRecord {
    /// Amount of `nutrient` in this serving
    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        self.nutrients[nutrient]
    }

    /// Quantity in grams, when the quantity unit is a weight unit
    pub fn quantity_grams(&self) -> Option<f64> {
        grams_per_unit(&self.quantity_units).map(|factor| self.quantity_value * factor)
    }

    /// Quantity in milliliters, when the quantity unit is a volume unit
    pub fn quantity_ml(&self) -> Option<f64> {
        ml_per_unit(&self.quantity_units).map(|factor| self.quantity_value * factor)
    }
}

/// Serving fields recognized in the servings export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingField {
    Group,
    FoodName,
    Amount,
    Category,
    Nutrient(Nutrient),
}

/// Non-nutrient columns of the servings export
const SERVING_COLUMNS: [(&str, ServingField); 4] = [
    ("Group", ServingField::Group),
    ("Food Name", ServingField::FoodName),
    ("Amount", ServingField::Amount),
    ("Category", ServingField::Category),
];

/// Serving under construction
#[derive(Debug, Clone, Default)]
pub struct ServingDraft {
    pub group: String,
    pub food_name: String,
    pub quantity_value: f64,
    pub quantity_units: String,
    pub nutrients: Nutrients,
    pub category: String,
}

/// The servings export ("Food & Recipe Entries")
#[derive(Debug, Clone, Copy)]
pub struct ServingsExport;

impl RecordFamily for ServingsExport {
    type Field = ServingField;
    type Draft = ServingDraft;
    type Record = ServingRecord;

    const KIND: ExportKind = ExportKind::Servings;

    fn field(column: &str) -> Option<ServingField> {
        SERVING_COLUMNS
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, field)| *field)
            .or_else(|| Nutrient::from_column(column).map(ServingField::Nutrient))
    }

    fn vocabulary() -> Vec<&'static str> {
        SERVING_COLUMNS
            .iter()
            .map(|(name, _)| *name)
            .chain(Nutrient::ALL.iter().map(|n| n.column()))
            .collect()
    }

    fn apply(draft: &mut ServingDraft, field: ServingField, cell: &str) -> ImportResult<()> {
        match field {
            ServingField::Group => draft.group = cell.to_string(),
            ServingField::FoodName => draft.food_name = cell.to_string(),
            ServingField::Category => draft.category = cell.to_string(),
            ServingField::Amount => {
                let (value, units) = coerce::quantity_with_unit("quantity", cell)?;
                draft.quantity_value = value;
                draft.quantity_units = units;
            }
            ServingField::Nutrient(nutrient) => {
                draft.nutrients.set(nutrient, coerce::number(nutrient.label(), cell)?);
            }
        }
        Ok(())
    }

    fn finish(draft: ServingDraft, recorded_time: DateTime<Tz>) -> ServingRecord {
        ServingRecord {
            recorded_time,
            group: draft.group,
            food_name: draft.food_name,
            quantity_value: draft.quantity_value,
            quantity_units: draft.quantity_units,
            nutrients: draft.nutrients,
            category: draft.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImportError;
    use chrono::TimeZone;

    fn serving(units: &str, value: f64) -> ServingRecord {
        let draft = ServingDraft {
            quantity_value: value,
            quantity_units: units.to_string(),
            ..Default::default()
        };
        ServingsExport::finish(draft, Tz::UTC.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_field_lookup() {
        assert_eq!(ServingsExport::field("Food Name"), Some(ServingField::FoodName));
        assert_eq!(
            ServingsExport::field("Protein (g)"),
            Some(ServingField::Nutrient(Nutrient::Protein))
        );
        assert_eq!(ServingsExport::field("Notes"), None);
        assert_eq!(ServingsExport::field("Day"), None);
    }

    #[test]
    fn test_apply_text_is_verbatim() {
        let mut draft = ServingDraft::default();
        ServingsExport::apply(&mut draft, ServingField::FoodName, "  Eggs, Large ").unwrap();
        ServingsExport::apply(&mut draft, ServingField::Category, "breakfast").unwrap();

        assert_eq!(draft.food_name, "  Eggs, Large ");
        assert_eq!(draft.category, "breakfast");
    }

    #[test]
    fn test_apply_amount() {
        let mut draft = ServingDraft::default();
        ServingsExport::apply(&mut draft, ServingField::Amount, "123.4 g").unwrap();

        assert_eq!(draft.quantity_value, 123.4);
        assert_eq!(draft.quantity_units, "g");
    }

    #[test]
    fn test_apply_nutrient_error_names_nutrient() {
        let mut draft = ServingDraft::default();
        let err = ServingsExport::apply(&mut draft, ServingField::Nutrient(Nutrient::B1), "abc")
            .unwrap_err();

        match err {
            ImportError::Coercion { field, value, .. } => {
                assert_eq!(field, "vitamin B1");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_quantity_conversions() {
        let grams = serving("oz", 2.0);
        assert!((grams.quantity_grams().unwrap() - 56.699).abs() < 1e-9);
        assert_eq!(grams.quantity_ml(), None);

        let cup = serving("cup", 0.5);
        assert_eq!(cup.quantity_grams(), None);
        assert!((cup.quantity_ml().unwrap() - 118.294).abs() < 1e-9);

        assert_eq!(serving("large", 1.0).quantity_grams(), None);
    }
}
