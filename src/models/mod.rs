//! Record models
//!
//! One record family per Cronometer export.

mod biometric;
mod exercise;
mod nutrient;
mod serving;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use biometric::{BiometricDraft, BiometricField, BiometricRecord, BiometricRecords, BiometricsExport};
pub use exercise::{ExerciseDraft, ExerciseField, ExerciseRecord, ExerciseRecords, ExercisesExport};
pub use nutrient::{Nutrient, NutrientInfo, Nutrients};
pub use serving::{ServingDraft, ServingField, ServingRecord, ServingRecords, ServingsExport};

/// Which Cronometer export a file came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    Servings,
    Exercises,
    Biometrics,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Servings => "servings",
            ExportKind::Exercises => "exercises",
            ExportKind::Biometrics => "biometrics",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "servings" | "serving" | "food" | "nutrition" => Some(ExportKind::Servings),
            "exercises" | "exercise" => Some(ExportKind::Exercises),
            "biometrics" | "biometric" => Some(ExportKind::Biometrics),
            _ => None,
        }
    }

    /// Every column this export recognizes, in export order
    pub fn header_vocabulary(&self) -> Vec<&'static str> {
        use crate::decode::{RecordFamily, DAY_COLUMN, TIME_COLUMN};

        let fields = match self {
            ExportKind::Servings => ServingsExport::vocabulary(),
            ExportKind::Exercises => ExercisesExport::vocabulary(),
            ExportKind::Biometrics => BiometricsExport::vocabulary(),
        };

        let mut columns = vec![DAY_COLUMN, TIME_COLUMN];
        columns.extend(fields);
        columns
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_kind_from_str() {
        assert_eq!(ExportKind::from_str("Servings"), Some(ExportKind::Servings));
        assert_eq!(ExportKind::from_str("exercise"), Some(ExportKind::Exercises));
        assert_eq!(ExportKind::from_str("biometrics"), Some(ExportKind::Biometrics));
        assert_eq!(ExportKind::from_str("notes"), None);
    }

    #[test]
    fn test_header_vocabulary() {
        let exercises = ExportKind::Exercises.header_vocabulary();
        assert_eq!(
            exercises,
            vec!["Day", "Time", "Exercise", "Minutes", "Calories Burned"]
        );

        let servings = ExportKind::Servings.header_vocabulary();
        assert_eq!(servings.len(), 2 + 4 + Nutrient::COUNT);
        assert!(servings.contains(&"Food Name"));
        assert!(servings.contains(&"Vitamin K (µg)"));
    }

    #[test]
    fn test_vocabularies_bind_every_column() {
        use crate::decode::{bind_column, Binding};

        for column in ExportKind::Servings.header_vocabulary() {
            assert!(bind_column::<ServingsExport>(column).is_some(), "{column}");
        }
        for column in ExportKind::Biometrics.header_vocabulary() {
            assert!(bind_column::<BiometricsExport>(column).is_some(), "{column}");
        }
        assert_eq!(
            bind_column::<ExercisesExport>("Minutes"),
            Some(Binding::Field(ExerciseField::Minutes))
        );
    }
}
