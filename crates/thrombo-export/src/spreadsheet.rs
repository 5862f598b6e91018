//! Append-only CSV log, one row per completed assessment.
//!
//! The column order is fixed and versioned. A file whose header does not
//! match [`COLUMNS`] is never appended to.

use std::fs::OpenOptions;
use std::path::Path;

use thrombo_core::{ObservationField, PatientObservation};
use thrombo_scoring::{Assessment, ModuleOutcome};

use crate::error::ExportError;
use crate::report::{ReportHeader, format_coefficient};

/// Bump together with any change to [`COLUMNS`].
pub const SCHEMA_VERSION: u32 = 1;

pub const COLUMNS: [&str; 32] = [
    "Schema version",
    "Examination date",
    "Name or record",
    "Examination",
    "Gender",
    "Age",
    "Weight",
    "Height",
    "Creatinine",
    "Creatinine clearance",
    "MPV",
    "PLCR",
    "Spontaneous aggregation",
    "Induced aggregation 1 µM ADP",
    "Induced aggregation 5 µM ADP",
    "Induced aggregation 15 µL ARA",
    "Platelet count",
    "CYP2C19 genotype",
    "ABCB1 genotype",
    "Regimen",
    "Aggregation state",
    "ABCB1 clopidogrel clearance",
    "Clopidogrel (CYP2C19)",
    "Clopidogrel (ABCB1)",
    "Ticagrelor",
    "Aspirin",
    "Cockcroft-Gault clearance",
    "CKD-EPI filtration rate",
    "GI bleeding score",
    "Drug cancellation",
    "Prognosis coefficient",
    "Prognosis assessment",
];

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn advice(outcome: &ModuleOutcome) -> String {
    outcome.scored().map(|r| r.advice()).unwrap_or_default()
}

/// Flatten one assessment into a row in [`COLUMNS`] order. Absent values
/// are empty cells.
pub fn flatten_row(
    header: &ReportHeader,
    observation: &PatientObservation,
    assessment: &Assessment,
) -> Vec<String> {
    let mut row = vec![
        SCHEMA_VERSION.to_string(),
        header.formatted_date(),
        header.name_or_record.clone(),
        header.examination.label().to_string(),
        optional(observation.gender.map(|g| g.label())),
    ];

    for field in ObservationField::ALL {
        row.push(optional(observation.get(field)));
    }

    row.extend([
        optional(observation.cyp2c19.map(|g| g.label())),
        optional(observation.abcb1.map(|g| g.label())),
        observation.regimen.label().to_string(),
        optional(assessment.adp_summary.scored().map(|r| r.state.as_str())),
        optional(assessment.abcb1.as_ref().map(|i| i.assessment.as_str())),
        advice(&assessment.clopidogrel_cyp2c19),
        advice(&assessment.clopidogrel_abcb1),
        advice(&assessment.ticagrelor),
        advice(&assessment.aspirin),
        optional(assessment.renal.creatinine_clearance),
        optional(assessment.renal.filtration_rate),
        assessment.gi_bleeding_score.to_string(),
        assessment.drug_cancellation.to_string(),
        format_coefficient(assessment.prognosis.value),
        assessment.prognosis.state.clone(),
    ]);

    row
}

/// Append `row` to the log at `path`, writing the header first when the
/// file is new or empty.
///
/// Callers sharing one log must not append concurrently.
pub fn append_row(path: &Path, row: &[String]) -> Result<(), ExportError> {
    let is_new = match std::fs::metadata(path) {
        Ok(metadata) => metadata.len() == 0,
        Err(_) => true,
    };

    if !is_new {
        check_header(path)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if is_new {
        writer.write_record(COLUMNS)?;
    }
    writer.write_record(row)?;
    writer.flush()?;

    tracing::info!(path = %path.display(), new_file = is_new, "spreadsheet row appended");
    Ok(())
}

fn check_header(path: &Path) -> Result<(), ExportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    let mut header = csv::StringRecord::new();
    let matches = reader.read_record(&mut header)? && header.iter().eq(COLUMNS.iter().copied());

    if matches {
        Ok(())
    } else {
        Err(ExportError::SchemaMismatch {
            path: path.to_path_buf(),
        })
    }
}
