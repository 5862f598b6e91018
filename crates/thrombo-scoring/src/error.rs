use thiserror::Error;

/// Errors raised by the engine. Every variant is a defect in a rule table or
/// a caller precondition, never a patient-data condition.
#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("no rule in table '{table}' matches value {value}")]
    NoMatchingRule { table: &'static str, value: f64 },

    #[error("table '{table}' has no entry for {key}")]
    MissingEntry { table: &'static str, key: String },

    #[error("unknown therapy module: {0}")]
    UnknownModule(String),
}
