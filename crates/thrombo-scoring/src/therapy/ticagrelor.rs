use thrombo_core::PatientObservation;

use super::{Advice, AdviceByState, TherapyModule, score};
use crate::aggregation::Reagent;
use crate::error::ScoringError;
use crate::result::{ModuleOutcome, ScoreResult};

pub static TICAGRELOR_ADVICE: AdviceByState = [
    Advice::new(
        "Consider reducing the ticagrelor dose",
        "High risk of hemorrhagic complications",
    ),
    Advice::new("Continue ticagrelor", "Therapy effective"),
    Advice::new(
        "Switch to another antiplatelet agent",
        "Therapy ineffective",
    ),
];

/// Ticagrelor therapy correction (5 µM ADP test). No genotype dependency.
pub struct Ticagrelor;

impl Ticagrelor {
    pub fn assess(&self, adp_aggregation: f64) -> Result<ScoreResult, ScoringError> {
        let advice = &TICAGRELOR_ADVICE;
        score(self.reagent(), adp_aggregation, advice, Vec::new())
    }
}

impl TherapyModule for Ticagrelor {
    fn id(&self) -> &str {
        "ticagrelor"
    }

    fn name(&self) -> &str {
        "Ticagrelor therapy correction"
    }

    fn reagent(&self) -> Reagent {
        Reagent::Adp5
    }

    fn evaluate(&self, observation: &PatientObservation) -> Result<ModuleOutcome, ScoringError> {
        self.reagent()
            .measurement(observation)
            .map(|value| self.assess(value))
            .transpose()
            .map(ModuleOutcome::from)
    }
}
