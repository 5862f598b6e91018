//! thrombo-scoring
//!
//! The clinical scoring and rules-classification engine. Pure, synchronous
//! and stateless: every function maps an observation (or a few numbers) to
//! freshly built results. No configuration, no I/O.
//!
//! Rule sets are data ([`threshold::RuleTable`]) so each boundary can be
//! audited and tested on its own.

pub mod aggregation;
pub mod assessment;
pub mod error;
pub mod gi_bleeding;
pub mod interpretation;
pub mod platelets;
pub mod prognosis;
pub mod renal;
pub mod result;
pub mod therapy;
pub mod threshold;

pub use assessment::{Assessment, assess};
pub use error::ScoringError;
pub use result::{ModuleOutcome, ScoreResult};
pub use therapy::{TherapyModule, all_modules, get_module};
