use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use thrombo_core::PatientObservation;

use crate::error::ScoringError;
use crate::gi_bleeding::gi_bleeding_score;
use crate::interpretation::{
    GenotypeInterpretation, adp_summary, interpret_abcb1, interpret_cyp2c19,
};
use crate::platelets::{CancellationAdvice, drug_cancellation};
use crate::prognosis::assess_prognosis;
use crate::renal::RenalFunction;
use crate::result::{ModuleOutcome, ScoreResult};
use crate::therapy::TherapyModule;
use crate::therapy::abcb1::ClopidogrelAbcb1;
use crate::therapy::aspirin::Aspirin;
use crate::therapy::cyp2c19::ClopidogrelCyp2c19;
use crate::therapy::ticagrelor::Ticagrelor;

/// Every engine output for one observation, in report order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub prognosis: ScoreResult,
    pub adp_summary: ModuleOutcome,
    pub cyp2c19: Option<GenotypeInterpretation>,
    pub abcb1: Option<GenotypeInterpretation>,
    pub clopidogrel_cyp2c19: ModuleOutcome,
    pub clopidogrel_abcb1: ModuleOutcome,
    pub ticagrelor: ModuleOutcome,
    pub aspirin: ModuleOutcome,
    pub renal: RenalFunction,
    pub gi_bleeding_score: u8,
    pub drug_cancellation: CancellationAdvice,
}

/// Run every scoring component once over `observation`.
pub fn assess(observation: &PatientObservation) -> Result<Assessment, ScoringError> {
    let assessment = Assessment {
        prognosis: assess_prognosis(observation)?,
        adp_summary: adp_summary(observation)?,
        cyp2c19: observation.cyp2c19.map(interpret_cyp2c19).transpose()?,
        abcb1: observation.abcb1.map(interpret_abcb1).transpose()?,
        clopidogrel_cyp2c19: ClopidogrelCyp2c19.evaluate(observation)?,
        clopidogrel_abcb1: ClopidogrelAbcb1.evaluate(observation)?,
        ticagrelor: Ticagrelor.evaluate(observation)?,
        aspirin: Aspirin.evaluate(observation)?,
        renal: RenalFunction::from_observation(observation),
        gi_bleeding_score: gi_bleeding_score(&observation.gi_risk),
        drug_cancellation: drug_cancellation(observation.platelet_count, observation.regimen),
    };

    debug!(
        prognosis = assessment.prognosis.value,
        gi_bleeding_score = assessment.gi_bleeding_score,
        drug_cancellation = %assessment.drug_cancellation,
        "assessment complete"
    );

    Ok(assessment)
}
