//! Export parsing entry points
//!
//! One blocking pass over the input: header first, then every data row.
//! Any failure aborts the whole call and no records are returned.

use std::io::Read;

use chrono_tz::Tz;
use csv::ReaderBuilder;
use tracing::debug;

use crate::decode::{decode_row, BoundHeader, RecordFamily};
use crate::error::{ImportError, ImportResult};
use crate::header::HeaderIndex;
use crate::models::{
    BiometricRecords, BiometricsExport, ExerciseRecords, ExercisesExport, ServingRecords,
    ServingsExport,
};
use crate::quoting::StrictQuotes;

/// Parse a whole export of family `F`, interpreting dates in `zone`
pub fn parse_export<F, R>(reader: R, zone: Tz) -> ImportResult<Vec<F::Record>>
where
    F: RecordFamily,
    R: Read,
{
    let mut rows = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(StrictQuotes::new(reader));

    let index = HeaderIndex::from_record(rows.headers().map_err(ImportError::from_read)?);
    let header = BoundHeader::bind::<F>(&index);

    let mut records = Vec::new();
    for result in rows.records() {
        let row = result.map_err(ImportError::from_read)?;
        // Records read from a Reader always carry their starting position
        let line = row.position().map_or(0, |p| p.line());
        let record = decode_row::<F>(&header, &row, zone).map_err(|e| e.in_row(F::KIND, line))?;
        records.push(record);
    }

    debug!(kind = %F::KIND, zone = zone.name(), records = records.len(), "parsed export");
    Ok(records)
}

/// Parse a servings ("Food & Recipe Entries") export
pub fn parse_servings_export<R: Read>(reader: R, zone: Tz) -> ImportResult<ServingRecords> {
    parse_export::<ServingsExport, _>(reader, zone)
}

/// Parse an exercise export
pub fn parse_exercise_export<R: Read>(reader: R, zone: Tz) -> ImportResult<ExerciseRecords> {
    parse_export::<ExercisesExport, _>(reader, zone)
}

/// Parse a biometrics export
pub fn parse_biometrics_export<R: Read>(reader: R, zone: Tz) -> ImportResult<BiometricRecords> {
    parse_export::<BiometricsExport, _>(reader, zone)
}
