//! Cronometer export inspector
//!
//! Usage: uhm-cronometer <servings|exercises|biometrics> <path>
//!
//! Parses one export and prints a JSON summary to stdout. The time zone comes
//! from `UHM_IMPORT_TZ` (default UTC).

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use uhm_cronometer::{
    parse_biometrics_export, parse_exercise_export, parse_servings_export, ExportKind,
    ImportOptions,
};

/// Summary printed for one export
#[derive(Debug, Serialize)]
struct ExportSummary {
    kind: ExportKind,
    path: String,
    zone: String,
    records: usize,
    first: Option<DateTime<Tz>>,
    last: Option<DateTime<Tz>>,
}

fn summarize<'a, I>(kind: ExportKind, path: &Path, zone: Tz, times: I) -> ExportSummary
where
    I: ExactSizeIterator<Item = &'a DateTime<Tz>>,
{
    let records = times.len();
    let (first, last) = times.fold((None, None), |(first, _), t| {
        (first.or(Some(*t)), Some(*t))
    });

    ExportSummary {
        kind,
        path: path.display().to_string(),
        zone: zone.name().to_string(),
        records,
        first,
        last,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("uhm_cronometer=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let (kind, path) = match (args.get(1), args.get(2)) {
        (Some(kind), Some(path)) => {
            let kind = ExportKind::from_str(kind)
                .ok_or_else(|| format!("unknown export kind: {}", kind))?;
            (kind, PathBuf::from(path))
        }
        _ => {
            eprintln!("Usage: uhm-cronometer <servings|exercises|biometrics> <path>");
            std::process::exit(2);
        }
    };

    let options = ImportOptions::from_env()?;
    let reader = BufReader::new(File::open(&path)?);
    tracing::info!(%kind, path = %path.display(), zone = options.zone.name(), "importing export");

    let summary = match kind {
        ExportKind::Servings => {
            let records = parse_servings_export(reader, options.zone)?;
            summarize(kind, &path, options.zone, records.iter().map(|r| &r.recorded_time))
        }
        ExportKind::Exercises => {
            let records = parse_exercise_export(reader, options.zone)?;
            summarize(kind, &path, options.zone, records.iter().map(|r| &r.recorded_time))
        }
        ExportKind::Biometrics => {
            let records = parse_biometrics_export(reader, options.zone)?;
            summarize(kind, &path, options.zone, records.iter().map(|r| &r.recorded_time))
        }
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
