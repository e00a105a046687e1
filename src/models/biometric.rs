//! Biometric model
//!
//! One reading from the biometrics export. The metric set is open-ended, so the
//! unit travels with each record.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;
use tracing::warn;

use super::ExportKind;
use crate::coerce;
use crate::decode::RecordFamily;
use crate::error::ImportResult;

/// A biometric reading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiometricRecord {
    pub recorded_time: DateTime<Tz>,
    pub metric: String,
    pub unit: String,
    pub amount: f64,
}

pub type BiometricRecords = Vec<BiometricRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiometricField {
    Metric,
    Unit,
    Amount,
}

const BIOMETRIC_COLUMNS: [(&str, BiometricField); 3] = [
    ("Metric", BiometricField::Metric),
    ("Unit", BiometricField::Unit),
    ("Amount", BiometricField::Amount),
];

#[derive(Debug, Clone, Default)]
pub struct BiometricDraft {
    pub metric: String,
    pub unit: String,
    pub amount: f64,
    /// Raw text of a composite reading that was zeroed
    pub composite_amount: Option<String>,
}

/// The biometrics export
#[derive(Debug, Clone, Copy)]
pub struct BiometricsExport;

impl RecordFamily for BiometricsExport {
    type Field = BiometricField;
    type Draft = BiometricDraft;
    type Record = BiometricRecord;

    const KIND: ExportKind = ExportKind::Biometrics;

    fn field(column: &str) -> Option<BiometricField> {
        BIOMETRIC_COLUMNS
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, field)| *field)
    }

    fn vocabulary() -> Vec<&'static str> {
        BIOMETRIC_COLUMNS.iter().map(|(name, _)| *name).collect()
    }

    fn apply(draft: &mut BiometricDraft, field: BiometricField, cell: &str) -> ImportResult<()> {
        match field {
            BiometricField::Metric => draft.metric = cell.to_string(),
            BiometricField::Unit => draft.unit = cell.to_string(),
            // Composite readings such as blood pressure ("120/80") are not
            // supported and stay at zero.
            BiometricField::Amount if cell.contains('/') => {
                draft.amount = 0.0;
                draft.composite_amount = Some(cell.to_string());
            }
            BiometricField::Amount => {
                draft.amount = coerce::number("amount", cell)?;
                draft.composite_amount = None;
            }
        }
        Ok(())
    }

    fn finish(draft: BiometricDraft, recorded_time: DateTime<Tz>) -> BiometricRecord {
        // Logged here so the metric is known whatever the column order
        if let Some(value) = &draft.composite_amount {
            warn!(value = %value, metric = %draft.metric, "zeroing composite biometric reading");
        }
        BiometricRecord {
            recorded_time,
            metric: draft.metric,
            unit: draft.unit,
            amount: draft.amount,
        }
    }
}
