use std::ops::Bound::{Excluded, Included, Unbounded};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use thrombo_core::{ObservationField, PatientObservation};

use crate::threshold::{RuleTable, ThresholdRule};

/// How strongly an antiplatelet drug suppresses induced aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AggregationState {
    SignificantlySuppressed,
    ModeratelySuppressed,
    Preserved,
}

impl AggregationState {
    pub const ALL: [AggregationState; 3] = [
        Self::SignificantlySuppressed,
        Self::ModeratelySuppressed,
        Self::Preserved,
    ];

    /// Position in per-state lookup tables.
    pub fn index(&self) -> usize {
        match self {
            Self::SignificantlySuppressed => 0,
            Self::ModeratelySuppressed => 1,
            Self::Preserved => 2,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::SignificantlySuppressed => "Platelet aggregation significantly suppressed",
            Self::ModeratelySuppressed => "Platelet aggregation moderately suppressed",
            Self::Preserved => "Platelet aggregation preserved",
        }
    }
}

/// Aggregation inducer used by a test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Reagent {
    /// 5 µM adenosine diphosphate, for P2Y12 inhibitors.
    Adp5,
    /// 15 µL arachidonic acid, for aspirin.
    Ara15,
}

impl Reagent {
    pub fn field(&self) -> ObservationField {
        match self {
            Self::Adp5 => ObservationField::InducedAggregation5Adp,
            Self::Ara15 => ObservationField::InducedAggregation15Ara,
        }
    }

    pub fn bands(&self) -> &'static RuleTable<AggregationState> {
        match self {
            Self::Adp5 => &ADP_BANDS,
            Self::Ara15 => &ARA_BANDS,
        }
    }

    pub fn measurement(&self, observation: &PatientObservation) -> Option<f64> {
        observation.get(self.field())
    }
}

// Outer bands are unbounded so out-of-range percentages still classify.
pub static ADP_BANDS: RuleTable<AggregationState> = RuleTable {
    name: "adp_aggregation",
    rules: &[
        ThresholdRule::new(
            Unbounded,
            Included(10.0),
            "T ≤ 10 %",
            AggregationState::SignificantlySuppressed,
        ),
        ThresholdRule::new(
            Excluded(10.0),
            Excluded(25.0),
            "10 < T < 25 %",
            AggregationState::ModeratelySuppressed,
        ),
        ThresholdRule::new(
            Included(25.0),
            Unbounded,
            "T ≥ 25 %",
            AggregationState::Preserved,
        ),
    ],
};

pub static ARA_BANDS: RuleTable<AggregationState> = RuleTable {
    name: "ara_aggregation",
    rules: &[
        ThresholdRule::new(
            Unbounded,
            Included(2.0),
            "T ≤ 2 %",
            AggregationState::SignificantlySuppressed,
        ),
        ThresholdRule::new(
            Excluded(2.0),
            Excluded(8.0),
            "2 < T < 8 %",
            AggregationState::ModeratelySuppressed,
        ),
        ThresholdRule::new(
            Included(8.0),
            Unbounded,
            "T ≥ 8 %",
            AggregationState::Preserved,
        ),
    ],
};
