//! thrombo-core
//!
//! Shared vocabulary of the antiplatelet decision-support system: the
//! patient observation, genotype and regimen enumerations, and the input
//! ranges a form layer must enforce. No scoring logic lives here.

pub mod error;
pub mod genotype;
pub mod observation;
pub mod regimen;
pub mod validation;

pub use genotype::{Abcb1, Cyp2c19, Metabolizer, Transport};
pub use observation::{Gender, GiRiskFactor, GiRiskFactors, ObservationField, PatientObservation};
pub use regimen::{Drug, DrugRegimen};
