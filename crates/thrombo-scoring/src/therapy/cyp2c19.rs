use thrombo_core::{Cyp2c19, Metabolizer, PatientObservation};

use super::{Advice, AdviceByState, TherapyModule, score};
use crate::aggregation::Reagent;
use crate::error::ScoringError;
use crate::result::{ModuleOutcome, ScoreResult};

const CONTINUE_BLEEDING_RISK: Advice =
    Advice::new("Continue clopidogrel", "Risk of hemorrhagic complications");
const CONTINUE_EFFECTIVE: Advice = Advice::new("Continue clopidogrel", "Therapy effective");
const CHECK_COMPLIANCE: Advice =
    Advice::new("Assess patient compliance", "Recheck aggregation in 5 days");

/// Clopidogrel correction by CYP2C19 metabolizer phenotype.
pub static METABOLISM_TABLE: [(Metabolizer, &str, AdviceByState); 3] = [
    (
        Metabolizer::Normal,
        "Normal metabolism",
        [CONTINUE_BLEEDING_RISK, CONTINUE_EFFECTIVE, CHECK_COMPLIANCE],
    ),
    (
        Metabolizer::Slow,
        "Slow metabolism",
        [
            CONTINUE_BLEEDING_RISK,
            CONTINUE_EFFECTIVE,
            Advice::new(
                "Switch to prasugrel or ticagrelor",
                "Recheck aggregation in 5 days",
            ),
        ],
    ),
    (
        Metabolizer::Fast,
        "Fast metabolism",
        [
            Advice::new(
                "Reduce clopidogrel dose",
                "High risk of hemorrhagic complications",
            ),
            CONTINUE_EFFECTIVE,
            CHECK_COMPLIANCE,
        ],
    ),
];

/// Clopidogrel therapy correction by CYP2C19 genotype (5 µM ADP test).
pub struct ClopidogrelCyp2c19;

impl ClopidogrelCyp2c19 {
    /// Extra fields: genotype label, metabolism assessment.
    pub fn assess(
        &self,
        adp_aggregation: f64,
        genotype: Cyp2c19,
    ) -> Result<ScoreResult, ScoringError> {
        let metabolizer = genotype.metabolizer();
        let (_, assessment, advice) = METABOLISM_TABLE
            .iter()
            .find(|(m, _, _)| *m == metabolizer)
            .ok_or_else(|| ScoringError::MissingEntry {
                table: "clopidogrel_cyp2c19",
                key: format!("{metabolizer:?}"),
            })?;

        score(
            self.reagent(),
            adp_aggregation,
            advice,
            vec![genotype.label().to_string(), assessment.to_string()],
        )
    }
}

impl TherapyModule for ClopidogrelCyp2c19 {
    fn id(&self) -> &str {
        "clopidogrel_cyp2c19"
    }

    fn name(&self) -> &str {
        "Clopidogrel therapy correction by CYP2C19 genotype"
    }

    fn reagent(&self) -> Reagent {
        Reagent::Adp5
    }

    fn evaluate(&self, observation: &PatientObservation) -> Result<ModuleOutcome, ScoringError> {
        match (self.reagent().measurement(observation), observation.cyp2c19) {
            (Some(value), Some(genotype)) => {
                self.assess(value, genotype).map(ModuleOutcome::Scored)
            }
            _ => Ok(ModuleOutcome::Unavailable),
        }
    }
}
