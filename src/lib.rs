//! Universal Health Manager (UHM) Cronometer Importer
//!
//! Turns Cronometer CSV exports (servings, exercises, biometrics) into typed
//! record collections.

pub mod coerce;
pub mod config;
pub mod decode;
pub mod error;
pub mod header;
pub mod models;
pub mod parse;
pub mod quoting;
pub mod timestamp;
pub mod units;

pub use config::ImportOptions;
pub use error::{ImportError, ImportResult};
pub use models::{
    BiometricRecord, BiometricRecords, ExerciseRecord, ExerciseRecords, ExportKind, Nutrient,
    Nutrients, ServingRecord, ServingRecords,
};
pub use parse::{parse_biometrics_export, parse_exercise_export, parse_export, parse_servings_export};
pub use timestamp::{DATE_TIME_FORMAT, DEFAULT_TIME};
pub use units::NutrientUnit;
