use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Drug {
    Aspirin,
    Clopidogrel,
    Ticagrelor,
}

impl Drug {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Aspirin => "ASA",
            Self::Clopidogrel => "clopidogrel",
            Self::Ticagrelor => "ticagrelor",
        }
    }
}

impl fmt::Display for Drug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The antiplatelet regimen the patient is currently taking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DrugRegimen {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "asa")]
    Aspirin,
    #[serde(rename = "clopidogrel")]
    Clopidogrel,
    #[serde(rename = "asa+clopidogrel")]
    AspirinClopidogrel,
    #[serde(rename = "asa+ticagrelor")]
    AspirinTicagrelor,
}

impl DrugRegimen {
    pub const ALL: [DrugRegimen; 5] = [
        Self::None,
        Self::Aspirin,
        Self::Clopidogrel,
        Self::AspirinClopidogrel,
        Self::AspirinTicagrelor,
    ];

    pub fn drugs(&self) -> &'static [Drug] {
        match self {
            Self::None => &[],
            Self::Aspirin => &[Drug::Aspirin],
            Self::Clopidogrel => &[Drug::Clopidogrel],
            Self::AspirinClopidogrel => &[Drug::Aspirin, Drug::Clopidogrel],
            Self::AspirinTicagrelor => &[Drug::Aspirin, Drug::Ticagrelor],
        }
    }

    pub fn contains(&self, drug: Drug) -> bool {
        self.drugs().contains(&drug)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Aspirin => "ASA",
            Self::Clopidogrel => "clopidogrel",
            Self::AspirinClopidogrel => "ASA+clopidogrel",
            Self::AspirinTicagrelor => "ASA+ticagrelor",
        }
    }
}

impl fmt::Display for DrugRegimen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
