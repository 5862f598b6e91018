//! Summary interpretations for the main results table: what the ADP test
//! and each genotype mean on their own, before therapy correction.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use thrombo_core::{Abcb1, Cyp2c19, Metabolizer, PatientObservation, Transport};

use crate::aggregation::{AggregationState, Reagent};
use crate::error::ScoringError;
use crate::result::{ModuleOutcome, ScoreResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GenotypeInterpretation {
    pub genotype: String,
    pub assessment: String,
    pub prognosis: String,
}

const ADP_PROGNOSIS: [&str; 3] = ["Bleeding risk", "Therapy effective", "Therapy ineffective"];

const METABOLIZER_SUMMARY: [(Metabolizer, &str, &str); 3] = [
    (
        Metabolizer::Normal,
        "Normal clopidogrel metabolism",
        "Clopidogrel therapy effective",
    ),
    (
        Metabolizer::Slow,
        "Slow clopidogrel metabolism",
        "Possible clopidogrel resistance",
    ),
    (
        Metabolizer::Fast,
        "Fast clopidogrel metabolism",
        "Possible excessive inhibition, bleeding risk",
    ),
];

const TRANSPORT_SUMMARY: [(Transport, &str, &str); 3] = [
    (
        Transport::Fast,
        "Accelerated clopidogrel clearance",
        "Clopidogrel resistance likely",
    ),
    (
        Transport::MildlyFast,
        "Slightly accelerated clopidogrel clearance",
        "Clinically insignificant effect on therapy",
    ),
    (
        Transport::Normal,
        "Normal clopidogrel clearance",
        "No effect on clopidogrel therapy",
    ),
];

fn lookup<K: PartialEq + std::fmt::Debug>(
    table: &'static str,
    rows: &[(K, &'static str, &'static str)],
    key: K,
) -> Result<(&'static str, &'static str), ScoringError> {
    rows.iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, assessment, prognosis)| (*assessment, *prognosis))
        .ok_or_else(|| ScoringError::MissingEntry {
            table,
            key: format!("{key:?}"),
        })
}

pub fn interpret_cyp2c19(genotype: Cyp2c19) -> Result<GenotypeInterpretation, ScoringError> {
    let (assessment, prognosis) = lookup(
        "cyp2c19_summary",
        &METABOLIZER_SUMMARY,
        genotype.metabolizer(),
    )?;
    Ok(GenotypeInterpretation {
        genotype: genotype.label().to_string(),
        assessment: assessment.to_string(),
        prognosis: prognosis.to_string(),
    })
}

pub fn interpret_abcb1(genotype: Abcb1) -> Result<GenotypeInterpretation, ScoringError> {
    let (assessment, prognosis) =
        lookup("abcb1_summary", &TRANSPORT_SUMMARY, genotype.transport())?;
    Ok(GenotypeInterpretation {
        genotype: genotype.label().to_string(),
        assessment: assessment.to_string(),
        prognosis: prognosis.to_string(),
    })
}

/// The ADP row of the main table: state plus a one-line prognosis.
pub fn adp_summary(observation: &PatientObservation) -> Result<ModuleOutcome, ScoringError> {
    let Some(value) = Reagent::Adp5.measurement(observation) else {
        return Ok(ModuleOutcome::Unavailable);
    };
    let rule = Reagent::Adp5.bands().classify(value)?;
    let state: AggregationState = rule.outcome;

    Ok(ModuleOutcome::Scored(ScoreResult {
        value,
        criterion: rule.criterion.to_string(),
        state: state.description().to_string(),
        recommendation: ADP_PROGNOSIS[state.index()].to_string(),
        rationale: None,
        extra_fields: Vec::new(),
    }))
}
