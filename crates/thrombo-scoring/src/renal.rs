//! Renal function estimates shown alongside the recommendations.
//!
//! Both formulas are advisory: any arithmetic failure (zero creatinine,
//! a domain error, a missing input) yields `None` instead of an error.

use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use thrombo_core::{Gender, PatientObservation};

/// µmol/L per mg/dL of creatinine.
pub const CREATININE_UMOL_PER_MG_DL: f64 = 88.4;

struct CkdEpiConstants {
    kappa: f64,
    alpha: f64,
    gender_factor: f64,
}

fn ckd_epi_constants(gender: Gender) -> CkdEpiConstants {
    match gender {
        Gender::Female => CkdEpiConstants {
            kappa: 0.7,
            alpha: -0.241,
            gender_factor: 1.012,
        },
        Gender::Male => CkdEpiConstants {
            kappa: 0.9,
            alpha: -0.302,
            gender_factor: 1.0,
        },
    }
}

fn finite_rounded(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.round() as i64)
}

/// Cockcroft-Gault creatinine clearance in mL/min, rounded.
pub fn cockcroft_gault(
    age: f64,
    weight: f64,
    gender: Gender,
    creatinine_umol_per_l: f64,
) -> Option<i64> {
    let creatinine_mg_dl = creatinine_umol_per_l / CREATININE_UMOL_PER_MG_DL;
    let mut clearance = (140.0 - age) * weight / (72.0 * creatinine_mg_dl);
    if gender == Gender::Female {
        clearance *= 0.85;
    }
    finite_rounded(clearance)
}

/// CKD-EPI (2021) glomerular filtration rate in mL/min/1.73 m², rounded.
pub fn ckd_epi(age: f64, gender: Gender, creatinine_umol_per_l: f64) -> Option<i64> {
    // min/max below would swallow a NaN creatinine
    if !age.is_finite() || !creatinine_umol_per_l.is_finite() {
        return None;
    }
    let CkdEpiConstants {
        kappa,
        alpha,
        gender_factor,
    } = ckd_epi_constants(gender);
    let scr_k = creatinine_umol_per_l / CREATININE_UMOL_PER_MG_DL / kappa;
    let gfr = 142.0
        * scr_k.min(1.0).powf(alpha)
        * scr_k.max(1.0).powf(-1.2)
        * 0.9938_f64.powf(age)
        * gender_factor;
    finite_rounded(gfr)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RenalFunction {
    /// Cockcroft-Gault, mL/min.
    pub creatinine_clearance: Option<i64>,
    /// CKD-EPI, mL/min/1.73 m².
    pub filtration_rate: Option<i64>,
}

impl RenalFunction {
    pub fn from_observation(observation: &PatientObservation) -> Self {
        let (Some(gender), Some(age), Some(creatinine)) =
            (observation.gender, observation.age, observation.creatinine)
        else {
            return Self::default();
        };

        let creatinine_clearance = observation
            .weight
            .and_then(|weight| cockcroft_gault(age, weight, gender, creatinine));
        let filtration_rate = ckd_epi(age, gender, creatinine);

        if creatinine_clearance.is_none() || filtration_rate.is_none() {
            warn!(age, creatinine, "renal function estimate unavailable");
        }

        Self {
            creatinine_clearance,
            filtration_rate,
        }
    }
}
