use thrombo_core::PatientObservation;

use super::{Advice, AdviceByState, TherapyModule, score};
use crate::aggregation::Reagent;
use crate::error::ScoringError;
use crate::result::{ModuleOutcome, ScoreResult};

pub static ASPIRIN_ADVICE: AdviceByState = [
    Advice::new("Continue aspirin", "High bleeding risk"),
    Advice::new("Continue aspirin", "Risk of hemorrhagic complications"),
    Advice::new(
        "Assess patient compliance and switch to aspirin from another manufacturer",
        "Recheck aggregation in 5 days",
    ),
];

/// Aspirin therapy correction (15 µL arachidonic acid test).
pub struct Aspirin;

impl Aspirin {
    pub fn assess(&self, ara_aggregation: f64) -> Result<ScoreResult, ScoringError> {
        score(self.reagent(), ara_aggregation, &ASPIRIN_ADVICE, Vec::new())
    }
}

impl TherapyModule for Aspirin {
    fn id(&self) -> &str {
        "aspirin"
    }

    fn name(&self) -> &str {
        "Aspirin therapy correction"
    }

    fn reagent(&self) -> Reagent {
        Reagent::Ara15
    }

    fn evaluate(&self, observation: &PatientObservation) -> Result<ModuleOutcome, ScoringError> {
        self.reagent()
            .measurement(observation)
            .map(|value| self.assess(value))
            .transpose()
            .map(ModuleOutcome::from)
    }
}
