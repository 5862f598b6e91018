use thrombo_core::{Abcb1, PatientObservation, Transport};

use super::{Advice, AdviceByState, TherapyModule, score};
use crate::aggregation::Reagent;
use crate::error::ScoringError;
use crate::result::{ModuleOutcome, ScoreResult};

const CONTINUE_BLEEDING_RISK: Advice =
    Advice::new("Continue clopidogrel", "Risk of hemorrhagic complications");
const CONTINUE_EFFECTIVE: Advice = Advice::new("Continue clopidogrel", "Therapy effective");

/// Clopidogrel correction by P-glycoprotein transport phenotype.
pub static TRANSPORT_TABLE: [(Transport, &str, AdviceByState); 3] = [
    (
        Transport::Fast,
        "Accelerated clearance",
        [
            CONTINUE_BLEEDING_RISK,
            CONTINUE_EFFECTIVE,
            Advice::action(
                "Increase clopidogrel dose or switch to another antiplatelet agent",
            ),
        ],
    ),
    (
        Transport::MildlyFast,
        "Slightly accelerated clearance",
        [
            CONTINUE_BLEEDING_RISK,
            CONTINUE_EFFECTIVE,
            Advice::new(
                "Recheck aggregation in 5 days",
                "Consider a dose increase",
            ),
        ],
    ),
    (
        Transport::Normal,
        "Normal clearance",
        [
            CONTINUE_BLEEDING_RISK,
            CONTINUE_EFFECTIVE,
            Advice::new(
                "Assess patient compliance",
                "Recheck aggregation in 5 days",
            ),
        ],
    ),
];

/// Clopidogrel therapy correction by ABCB1 genotype (5 µM ADP test).
pub struct ClopidogrelAbcb1;

impl ClopidogrelAbcb1 {
    /// Extra fields: genotype label, transport assessment.
    pub fn assess(
        &self,
        adp_aggregation: f64,
        genotype: Abcb1,
    ) -> Result<ScoreResult, ScoringError> {
        let transport = genotype.transport();
        let (_, assessment, advice) = TRANSPORT_TABLE
            .iter()
            .find(|(t, _, _)| *t == transport)
            .ok_or_else(|| ScoringError::MissingEntry {
                table: "clopidogrel_abcb1",
                key: format!("{transport:?}"),
            })?;

        score(
            self.reagent(),
            adp_aggregation,
            advice,
            vec![genotype.label().to_string(), assessment.to_string()],
        )
    }
}

impl TherapyModule for ClopidogrelAbcb1 {
    fn id(&self) -> &str {
        "clopidogrel_abcb1"
    }

    fn name(&self) -> &str {
        "Clopidogrel therapy correction by P-glycoprotein transport activity"
    }

    fn reagent(&self) -> Reagent {
        Reagent::Adp5
    }

    fn evaluate(&self, observation: &PatientObservation) -> Result<ModuleOutcome, ScoringError> {
        match (self.reagent().measurement(observation), observation.abcb1) {
            (Some(value), Some(genotype)) => {
                self.assess(value, genotype).map(ModuleOutcome::Scored)
            }
            _ => Ok(ModuleOutcome::Unavailable),
        }
    }
}
