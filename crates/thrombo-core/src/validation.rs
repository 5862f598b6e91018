use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::error::CoreError;
use crate::observation::{ObservationField, PatientObservation};

/// Accepted range for one numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    /// Whether `min` itself is accepted. `max` is always inclusive.
    pub min_inclusive: bool,
}

impl FieldRange {
    const fn above(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_inclusive: false,
        }
    }

    const fn at_least(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_inclusive: true,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value > self.max {
            return false;
        }
        if self.min_inclusive {
            value >= self.min
        } else {
            value > self.min
        }
    }
}

impl std::fmt::Display for FieldRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let open = if self.min_inclusive { '[' } else { '(' };
        write!(f, "{open}{}, {}]", self.min, self.max)
    }
}

impl ObservationField {
    /// Range a form layer must enforce before handing values to the engine.
    pub fn range(&self) -> FieldRange {
        match self {
            Self::Age => FieldRange::above(0.0, 120.0),
            Self::Weight => FieldRange::above(0.0, 300.0),
            Self::Height => FieldRange::above(0.0, 250.0),
            Self::Creatinine => FieldRange::above(0.0, 1000.0),
            Self::CreatinineClearance => FieldRange::above(0.0, 200.0),
            Self::Mpv => FieldRange::above(0.0, 20.0),
            Self::Plcr
            | Self::SpontaneousAggregation
            | Self::InducedAggregation1Adp
            | Self::InducedAggregation5Adp
            | Self::InducedAggregation15Ara => FieldRange::at_least(0.0, 100.0),
            Self::PlateletCount => FieldRange::above(0.0, 1000.0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: ObservationField,
    pub value: f64,
    pub expected_range: FieldRange,
    pub message: String,
}

impl PatientObservation {
    /// Check every present numeric field against its accepted range.
    ///
    /// Absent fields are never reported.
    pub fn validate(&self) -> Vec<ValidationError> {
        ObservationField::ALL
            .into_iter()
            .filter_map(|field| {
                let value = self.get(field)?;
                let range = field.range();
                (!range.contains(value)).then(|| ValidationError {
                    field,
                    value,
                    expected_range: range,
                    message: format!("{}: {value} is outside range {range}", field.name()),
                })
            })
            .collect()
    }

    /// Return the observation only when [`validate`](Self::validate) finds nothing.
    pub fn validated(self) -> Result<Self, CoreError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(CoreError::InvalidObservation(errors))
        }
    }
}
