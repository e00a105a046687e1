//! Import error types

use std::num::ParseFloatError;

use thiserror::Error;

use crate::models::ExportKind;

/// Import error types
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed quoting on line {line}: {reason}")]
    Quoting { line: u64, reason: &'static str },

    #[error("invalid amount format {value:?}, expected 'value unit'")]
    AmountFormat { value: String },

    #[error("parsing {field} value {value:?}: {source}")]
    Coercion {
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("invalid date/time format {value:?} in zone {zone}: {reason}")]
    Timestamp {
        value: String,
        zone: String,
        reason: String,
    },

    #[error("{kind} export line {line}: {source}")]
    Row {
        kind: ExportKind,
        line: u64,
        #[source]
        source: Box<ImportError>,
    },

    #[error("unknown time zone {value:?}: {reason}")]
    Zone { value: String, reason: String },
}

impl ImportError {
    /// The underlying cause, with any row wrapper removed
    pub fn root(&self) -> &ImportError {
        match self {
            ImportError::Row { source, .. } => source.root(),
            other => other,
        }
    }

    /// Input line the failure was attributed to, if any
    pub fn line(&self) -> Option<u64> {
        match self {
            ImportError::Row { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Map a CSV read failure, surfacing quoting violations as [`ImportError::Quoting`]
    pub(crate) fn from_read(err: csv::Error) -> Self {
        if let csv::ErrorKind::Io(io) = err.kind() {
            if let Some(q) = crate::quoting::quote_error(io) {
                return ImportError::Quoting {
                    line: q.line,
                    reason: q.reason,
                };
            }
        }
        ImportError::Csv(err)
    }

    pub(crate) fn in_row(self, kind: ExportKind, line: u64) -> Self {
        ImportError::Row {
            kind,
            line,
            source: Box::new(self),
        }
    }
}

/// Result type for import operations
pub type ImportResult<T> = Result<T, ImportError>;
