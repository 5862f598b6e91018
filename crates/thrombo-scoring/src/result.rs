use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Value cell shown when a module could not be scored.
pub const VALUE_PLACEHOLDER: &str = "______";

/// Text cell shown when a module could not be scored.
pub const TEXT_PLACEHOLDER: &str = "-";

/// The outcome of scoring one module for one patient. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    /// The classified input (aggregation %, coefficient).
    pub value: f64,
    pub criterion: String,
    pub state: String,
    pub recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rationale: Option<String>,
    /// Module-specific columns, e.g. genotype and phenotype assessment.
    #[serde(default)]
    pub extra_fields: Vec<String>,
}

impl ScoreResult {
    /// Recommendation followed by its rationale, as printed in reports.
    pub fn advice(&self) -> String {
        match &self.rationale {
            Some(rationale) => format!("{}. {}", self.recommendation, rationale),
            None => self.recommendation.clone(),
        }
    }
}

/// A module either scores, or lacks the inputs it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum ModuleOutcome {
    Scored(ScoreResult),
    Unavailable,
}

impl ModuleOutcome {
    pub fn scored(&self) -> Option<&ScoreResult> {
        match self {
            Self::Scored(result) => Some(result),
            Self::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Scored(_))
    }
}

impl From<Option<ScoreResult>> for ModuleOutcome {
    fn from(result: Option<ScoreResult>) -> Self {
        result.map_or(Self::Unavailable, Self::Scored)
    }
}
