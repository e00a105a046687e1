//! Exercise model
//!
//! One logged activity from the exercise export.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

use super::ExportKind;
use crate::coerce;
use crate::decode::RecordFamily;
use crate::error::ImportResult;

/// A logged exercise
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseRecord {
    pub recorded_time: DateTime<Tz>,
    pub exercise: String,
    pub minutes: f64,
    pub calories_burned: f64,
}

pub type ExerciseRecords = Vec<ExerciseRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseField {
    Exercise,
    Minutes,
    CaloriesBurned,
}

impl ExerciseField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseField::Exercise => "exercise",
            ExerciseField::Minutes => "minutes",
            ExerciseField::CaloriesBurned => "calories burned",
        }
    }
}

const EXERCISE_COLUMNS: [(&str, ExerciseField); 3] = [
    ("Exercise", ExerciseField::Exercise),
    ("Minutes", ExerciseField::Minutes),
    ("Calories Burned", ExerciseField::CaloriesBurned),
];

#[derive(Debug, Clone, Default)]
pub struct ExerciseDraft {
    pub exercise: String,
    pub minutes: f64,
    pub calories_burned: f64,
}

/// The exercise export
#[derive(Debug, Clone, Copy)]
pub struct ExercisesExport;

impl RecordFamily for ExercisesExport {
    type Field = ExerciseField;
    type Draft = ExerciseDraft;
    type Record = ExerciseRecord;

    const KIND: ExportKind = ExportKind::Exercises;

    fn field(column: &str) -> Option<ExerciseField> {
        EXERCISE_COLUMNS
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, field)| *field)
    }

    fn vocabulary() -> Vec<&'static str> {
        EXERCISE_COLUMNS.iter().map(|(name, _)| *name).collect()
    }

    fn apply(draft: &mut ExerciseDraft, field: ExerciseField, cell: &str) -> ImportResult<()> {
        match field {
            ExerciseField::Exercise => draft.exercise = cell.to_string(),
            ExerciseField::Minutes => draft.minutes = coerce::number(field.as_str(), cell)?,
            ExerciseField::CaloriesBurned => {
                draft.calories_burned = coerce::number(field.as_str(), cell)?
            }
        }
        Ok(())
    }

    fn finish(draft: ExerciseDraft, recorded_time: DateTime<Tz>) -> ExerciseRecord {
        ExerciseRecord {
            recorded_time,
            exercise: draft.exercise,
            minutes: draft.minutes,
            calories_burned: draft.calories_burned,
        }
    }
}
