//! Column binding and row decoding
//!
//! Each record family declares a closed vocabulary of column names. The header
//! row is bound against it once per parse. Every data row is then scanned into
//! a [`RowBuffer`] and finalized, so column order never matters.

use chrono::DateTime;
use chrono_tz::Tz;
use csv::StringRecord;
use tracing::{debug, trace};

use crate::error::ImportResult;
use crate::header::HeaderIndex;
use crate::models::ExportKind;
use crate::timestamp;

/// Column holding the date of a row
pub const DAY_COLUMN: &str = "Day";
/// Column holding the time of day of a row
pub const TIME_COLUMN: &str = "Time";

/// What a recognized column feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding<F> {
    Day,
    Time,
    Field(F),
}

/// A record family: one export format and the record type it produces
pub trait RecordFamily {
    /// Field selector, one per recognized non-date column
    type Field: Copy + std::fmt::Debug;
    /// Record under construction, everything except the timestamp
    type Draft: Default;
    type Record;

    const KIND: ExportKind;

    /// Field fed by `column`, if the family recognizes it
    fn field(column: &str) -> Option<Self::Field>;

    /// Every recognized column name, excluding Day and Time
    fn vocabulary() -> Vec<&'static str>;

    /// Coerce `cell` and store it in the draft
    fn apply(draft: &mut Self::Draft, field: Self::Field, cell: &str) -> ImportResult<()>;

    /// Attach the assembled timestamp
    fn finish(draft: Self::Draft, recorded_time: DateTime<Tz>) -> Self::Record;
}

/// Resolve a column name against a family's vocabulary
pub fn bind_column<F: RecordFamily>(column: &str) -> Option<Binding<F::Field>> {
    match column {
        DAY_COLUMN => Some(Binding::Day),
        TIME_COLUMN => Some(Binding::Time),
        other => F::field(other).map(Binding::Field),
    }
}

/// Header row bound to one family, by column position
#[derive(Debug, Clone)]
pub struct BoundHeader<F> {
    slots: Vec<Option<Binding<F>>>,
}

impl<F: Copy + std::fmt::Debug> BoundHeader<F> {
    pub fn bind<R>(index: &HeaderIndex) -> Self
    where
        R: RecordFamily<Field = F>,
    {
        let slots = index
            .iter()
            .map(|(position, name)| {
                let binding = bind_column::<R>(name);
                if binding.is_none() {
                    trace!(kind = %R::KIND, position, column = name, "ignoring column");
                }
                binding
            })
            .collect::<Vec<_>>();

        let header = Self { slots };
        debug!(
            kind = %R::KIND,
            bound = header.bound(),
            columns = index.len(),
            "bound export header"
        );
        header
    }

    /// Binding for the column at `position`
    pub fn binding(&self, position: usize) -> Option<Binding<F>> {
        self.slots.get(position).copied().flatten()
    }

    /// Number of recognized columns
    pub fn bound(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// Loosely typed state of one row while its cells are scanned
#[derive(Debug, Default)]
pub struct RowBuffer<D> {
    day: String,
    time: String,
    draft: D,
}

impl<D: Default> RowBuffer<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble the timestamp and hand the draft to the family
    pub fn finish<R>(self, zone: Tz) -> ImportResult<R::Record>
    where
        R: RecordFamily<Draft = D>,
    {
        let time = timestamp::time_or_default(&self.time);
        let recorded_time = timestamp::assemble(&self.day, time, zone)?;
        Ok(R::finish(self.draft, recorded_time))
    }
}

/// Decode one data row into a record of family `R`
///
/// Later cells bound to the same field overwrite earlier ones.
pub fn decode_row<R: RecordFamily>(
    header: &BoundHeader<R::Field>,
    row: &StringRecord,
    zone: Tz,
) -> ImportResult<R::Record> {
    let mut buffer = RowBuffer::<R::Draft>::new();

    for (position, cell) in row.iter().enumerate() {
        match header.binding(position) {
            Some(Binding::Day) => buffer.day = cell.to_string(),
            Some(Binding::Time) => buffer.time = cell.to_string(),
            Some(Binding::Field(field)) => R::apply(&mut buffer.draft, field, cell)?,
            None => {}
        }
    }

    buffer.finish::<R>(zone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImportError;
    use crate::models::{BiometricField, BiometricsExport, ExercisesExport};
    use chrono::TimeZone;

    fn header(names: &[&str]) -> HeaderIndex {
        HeaderIndex::from_record(&StringRecord::from(names.to_vec()))
    }

    #[test]
    fn test_bind_column() {
        assert_eq!(bind_column::<BiometricsExport>("Day"), Some(Binding::Day));
        assert_eq!(bind_column::<BiometricsExport>("Time"), Some(Binding::Time));
        assert_eq!(
            bind_column::<BiometricsExport>("Unit"),
            Some(Binding::Field(BiometricField::Unit))
        );
        assert_eq!(bind_column::<BiometricsExport>("Notes"), None);
        assert_eq!(bind_column::<BiometricsExport>("unit"), None);
    }

    #[test]
    fn test_bound_header_skips_unknown_columns() {
        let index = header(&["Notes", "Day", "Metric", "Extra"]);
        let bound = BoundHeader::bind::<BiometricsExport>(&index);

        assert_eq!(bound.bound(), 2);
        assert_eq!(bound.binding(0), None);
        assert_eq!(bound.binding(1), Some(Binding::Day));
        assert_eq!(bound.binding(9), None);
    }

    #[test]
    fn test_time_before_day() {
        let index = header(&["Time", "Exercise", "Day", "Minutes"]);
        let bound = BoundHeader::bind::<ExercisesExport>(&index);
        let row = StringRecord::from(vec!["06:15", "Walking", "2023-05-01", "30"]);

        let record = decode_row::<ExercisesExport>(&bound, &row, Tz::UTC).unwrap();
        assert_eq!(
            record.recorded_time,
            Tz::UTC.with_ymd_and_hms(2023, 5, 1, 6, 15, 0).unwrap()
        );
        assert_eq!(record.minutes, 30.0);
    }

    #[test]
    fn test_duplicate_column_last_wins() {
        let index = header(&["Day", "Exercise", "Exercise"]);
        let bound = BoundHeader::bind::<ExercisesExport>(&index);
        let row = StringRecord::from(vec!["2023-05-01", "Walking", "Running"]);

        let record = decode_row::<ExercisesExport>(&bound, &row, Tz::UTC).unwrap();
        assert_eq!(record.exercise, "Running");
    }

    #[test]
    fn test_missing_day_fails_timestamp() {
        let index = header(&["Exercise"]);
        let bound = BoundHeader::bind::<ExercisesExport>(&index);
        let row = StringRecord::from(vec!["Walking"]);

        let err = decode_row::<ExercisesExport>(&bound, &row, Tz::UTC).unwrap_err();
        assert!(matches!(err, ImportError::Timestamp { value, .. } if value == " 00:00"));
    }
}
