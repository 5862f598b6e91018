use std::path::Path;

use eyre::{Result, WrapErr};
use jiff::civil::Date;
use serde::Deserialize;

use thrombo_core::PatientObservation;
use thrombo_export::{Examination, ReportHeader};

/// One patient's intake form as saved by the entry UI.
#[derive(Debug, Deserialize)]
pub struct Intake {
    pub header: IntakeHeader,
    #[serde(default)]
    pub observation: PatientObservation,
}

#[derive(Debug, Deserialize)]
pub struct IntakeHeader {
    /// Defaults to today.
    #[serde(default)]
    pub date: Option<Date>,
    pub name_or_record: String,
    #[serde(default)]
    pub examination: Examination,
}

impl IntakeHeader {
    pub fn into_report_header(self) -> ReportHeader {
        ReportHeader {
            date: self.date.unwrap_or_else(|| jiff::Zoned::now().date()),
            name_or_record: self.name_or_record,
            examination: self.examination,
        }
    }
}

pub fn read_intake(path: &Path) -> Result<Intake> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read intake at {}", path.display()))?;
    let intake: Intake = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("invalid intake file {}", path.display()))?;
    Ok(intake)
}
