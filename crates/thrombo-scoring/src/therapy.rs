//! Therapy-correction modules.
//!
//! Each module classifies an induced-aggregation percentage into an
//! [`AggregationState`] and looks the advice up in a per-drug table, keyed
//! by genotype phenotype where the drug's response depends on it.

pub mod abcb1;
pub mod aspirin;
pub mod cyp2c19;
pub mod ticagrelor;

use thrombo_core::PatientObservation;

use crate::aggregation::{AggregationState, Reagent};
use crate::error::ScoringError;
use crate::result::{ModuleOutcome, ScoreResult};

/// A canned recommendation with an optional reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    pub action: &'static str,
    pub rationale: Option<&'static str>,
}

impl Advice {
    pub const fn new(action: &'static str, rationale: &'static str) -> Self {
        Self {
            action,
            rationale: Some(rationale),
        }
    }

    pub const fn action(action: &'static str) -> Self {
        Self {
            action,
            rationale: None,
        }
    }
}

/// Advice per [`AggregationState`], indexed by [`AggregationState::index`].
pub type AdviceByState = [Advice; 3];

/// Trait implemented by each therapy-correction module.
pub trait TherapyModule: Send + Sync {
    /// Stable identifier (e.g. "clopidogrel_cyp2c19").
    fn id(&self) -> &str;

    /// Human-readable title used as the report section heading.
    fn name(&self) -> &str;

    /// Which aggregation test drives this module.
    fn reagent(&self) -> Reagent;

    /// Score the module, or report it unavailable when an input is missing.
    fn evaluate(&self, observation: &PatientObservation) -> Result<ModuleOutcome, ScoringError>;
}

/// Classify `value` with the reagent's bands and attach the advice for the
/// matching state.
pub(crate) fn score(
    reagent: Reagent,
    value: f64,
    advice: &AdviceByState,
    extra_fields: Vec<String>,
) -> Result<ScoreResult, ScoringError> {
    let rule = reagent.bands().classify(value)?;
    let state: AggregationState = rule.outcome;
    let Advice { action, rationale } = advice[state.index()];

    tracing::debug!(?reagent, value, ?state, "aggregation classified");

    Ok(ScoreResult {
        value,
        criterion: rule.criterion.to_string(),
        state: state.description().to_string(),
        recommendation: action.to_string(),
        rationale: rationale.map(str::to_string),
        extra_fields,
    })
}

/// Return all registered therapy modules, in report order.
pub fn all_modules() -> Vec<Box<dyn TherapyModule>> {
    vec![
        Box::new(cyp2c19::ClopidogrelCyp2c19),
        Box::new(abcb1::ClopidogrelAbcb1),
        Box::new(ticagrelor::Ticagrelor),
        Box::new(aspirin::Aspirin),
    ]
}

/// Look up a therapy module by ID.
pub fn get_module(id: &str) -> Result<Box<dyn TherapyModule>, ScoringError> {
    all_modules()
        .into_iter()
        .find(|m| m.id() == id)
        .ok_or_else(|| ScoringError::UnknownModule(id.to_string()))
}
