//! One-year prognosis coefficient for acute coronary syndrome patients.

use std::ops::Bound::{Excluded, Included, Unbounded};

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use thrombo_core::{Gender, ObservationField, PatientObservation};

use crate::error::ScoringError;
use crate::result::ScoreResult;
use crate::threshold::{RuleTable, ThresholdRule};

pub const INTERCEPT: f64 = -2.478;
pub const GENDER_WEIGHT: f64 = 0.477;

/// Linear weights of the numeric covariates. Absent inputs contribute 0.
pub const WEIGHTS: [(ObservationField, f64); 11] = [
    (ObservationField::Age, 0.05),
    (ObservationField::Weight, -0.044),
    (ObservationField::Height, -0.014),
    (ObservationField::Creatinine, 0.05),
    (ObservationField::CreatinineClearance, 0.063),
    (ObservationField::Mpv, -0.448),
    (ObservationField::Plcr, 0.029),
    (ObservationField::SpontaneousAggregation, 0.054),
    (ObservationField::InducedAggregation1Adp, 0.012),
    (ObservationField::InducedAggregation5Adp, -0.006),
    (ObservationField::InducedAggregation15Ara, 0.027),
];

fn gender_code(gender: Option<Gender>) -> f64 {
    match gender {
        Some(Gender::Male) => 1.0,
        Some(Gender::Female) => 2.0,
        None => 0.0,
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// The prognosis coefficient, rounded to three decimals.
pub fn prognosis_coefficient(observation: &PatientObservation) -> f64 {
    let covariates: f64 = WEIGHTS
        .iter()
        .filter_map(|&(field, weight)| Some(weight * observation.get(field)?))
        .sum();
    let linear = INTERCEPT + GENDER_WEIGHT * gender_code(observation.gender) + covariates;
    round3(linear)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PrognosisBand {
    Favorable,
    Unfavorable,
    HighRisk,
}

impl PrognosisBand {
    pub fn assessment(&self) -> &'static str {
        match self {
            Self::Favorable => "Favorable",
            Self::Unfavorable => "Unfavorable",
            Self::HighRisk => "Risk of recurrent vascular events",
        }
    }

    pub fn outlook(&self) -> &'static str {
        match self {
            Self::Favorable => "No adverse events expected within a year",
            Self::Unfavorable => "Medical visits possible within the next year",
            Self::HighRisk => "High risk of recurrent infarction and death",
        }
    }
}

// Classified after rounding, so (1.56, 2.087] is exactly 1.561..=2.087.
pub static PROGNOSIS_BANDS: RuleTable<PrognosisBand> = RuleTable {
    name: "prognosis",
    rules: &[
        ThresholdRule::new(
            Unbounded,
            Included(1.56),
            "≤ 1.56",
            PrognosisBand::Favorable,
        ),
        ThresholdRule::new(
            Excluded(1.56),
            Included(2.087),
            "1.561-2.087",
            PrognosisBand::Unfavorable,
        ),
        ThresholdRule::new(
            Excluded(2.087),
            Unbounded,
            "> 2.087",
            PrognosisBand::HighRisk,
        ),
    ],
};

pub fn prognosis_band(coefficient: f64) -> Result<PrognosisBand, ScoringError> {
    Ok(PROGNOSIS_BANDS.classify(coefficient)?.outcome)
}

/// Score the prognosis module. Always produces a result.
pub fn assess_prognosis(observation: &PatientObservation) -> Result<ScoreResult, ScoringError> {
    let coefficient = prognosis_coefficient(observation);
    let rule = PROGNOSIS_BANDS.classify(coefficient)?;
    debug!(coefficient, band = ?rule.outcome, "prognosis classified");

    Ok(ScoreResult {
        value: coefficient,
        criterion: rule.criterion.to_string(),
        state: rule.outcome.assessment().to_string(),
        recommendation: rule.outcome.outlook().to_string(),
        rationale: None,
        extra_fields: Vec::new(),
    })
}
