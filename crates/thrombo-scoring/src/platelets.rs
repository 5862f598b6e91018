//! Platelet-count driven hold/continue decision for the current regimen.

use std::fmt;
use std::ops::Bound::{Excluded, Included, Unbounded};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use thrombo_core::{Drug, DrugRegimen};

use crate::threshold::{RuleTable, ThresholdRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PlateletTier {
    Critical,
    Severe,
    Moderate,
    Adequate,
}

impl PlateletTier {
    /// Drugs to withdraw at this tier if the patient is taking them, in the
    /// order they are named in the advice.
    pub fn withdrawn(&self) -> &'static [Drug] {
        match self {
            Self::Critical => &[Drug::Ticagrelor, Drug::Clopidogrel, Drug::Aspirin],
            Self::Severe => &[Drug::Clopidogrel, Drug::Ticagrelor],
            Self::Moderate => &[Drug::Ticagrelor],
            Self::Adequate => &[],
        }
    }
}

/// Counts in ×10⁹/L.
pub static PLATELET_TIERS: RuleTable<PlateletTier> = RuleTable {
    name: "platelet_count",
    rules: &[
        ThresholdRule::new(Unbounded, Included(10.0), "≤ 10", PlateletTier::Critical),
        ThresholdRule::new(
            Excluded(10.0),
            Included(30.0),
            "10 < n ≤ 30",
            PlateletTier::Severe,
        ),
        ThresholdRule::new(
            Excluded(30.0),
            Included(50.0),
            "30 < n ≤ 50",
            PlateletTier::Moderate,
        ),
        ThresholdRule::new(Excluded(50.0), Unbounded, "> 50", PlateletTier::Adequate),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "decision", rename_all = "snake_case")]
#[ts(export)]
pub enum CancellationAdvice {
    Continue,
    Discontinue { drugs: Vec<Drug> },
    Undetermined,
}

impl fmt::Display for CancellationAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continue => f.write_str("May continue"),
            Self::Undetermined => f.write_str("Undetermined"),
            Self::Discontinue { drugs } => {
                let names: Vec<_> = drugs.iter().map(Drug::label).collect();
                write!(f, "Recommend discontinuing {}", names.join(" and "))
            }
        }
    }
}

/// Which drugs of `regimen` to hold at `platelet_count`.
///
/// An absent or non-numeric count is undetermined rather than an error.
pub fn drug_cancellation(platelet_count: Option<f64>, regimen: DrugRegimen) -> CancellationAdvice {
    let Some(count) = platelet_count else {
        return CancellationAdvice::Undetermined;
    };
    let Ok(rule) = PLATELET_TIERS.classify(count) else {
        return CancellationAdvice::Undetermined;
    };

    let withdrawn = rule.outcome.withdrawn();
    let drugs: Vec<Drug> = withdrawn
        .iter()
        .copied()
        .filter(|drug| regimen.contains(*drug))
        .collect();

    if drugs.is_empty() {
        CancellationAdvice::Continue
    } else {
        CancellationAdvice::Discontinue { drugs }
    }
}
