use thrombo_core::{GiRiskFactor, GiRiskFactors};

/// Unweighted tally of GI-bleeding risk factors, 0 through 9.
///
/// The raw score is reported as is; there are no risk bands.
pub fn gi_bleeding_score(factors: &GiRiskFactors) -> u8 {
    GiRiskFactor::ALL
        .iter()
        .map(|factor| u8::from(factors.is_present(*factor)))
        .sum()
}
