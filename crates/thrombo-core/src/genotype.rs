use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// CYP2C19 allele relevant to clopidogrel bioactivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Cyp2c19 {
    #[serde(rename = "*1", alias = "CYP2C19*1")]
    Star1,
    #[serde(rename = "*2", alias = "CYP2C19*2")]
    Star2,
    #[serde(rename = "*3", alias = "CYP2C19*3")]
    Star3,
    #[serde(rename = "*17", alias = "CYP2C19*17")]
    Star17,
}

impl Cyp2c19 {
    pub const ALL: [Cyp2c19; 4] = [Self::Star1, Self::Star2, Self::Star3, Self::Star17];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Star1 => "CYP2C19*1",
            Self::Star2 => "CYP2C19*2",
            Self::Star3 => "CYP2C19*3",
            Self::Star17 => "CYP2C19*17",
        }
    }

    /// *2 and *3 are loss-of-function alleles; *17 is gain-of-function.
    pub fn metabolizer(&self) -> Metabolizer {
        match self {
            Self::Star1 => Metabolizer::Normal,
            Self::Star2 | Self::Star3 => Metabolizer::Slow,
            Self::Star17 => Metabolizer::Fast,
        }
    }
}

/// Clopidogrel metabolizer phenotype derived from the CYP2C19 genotype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Metabolizer {
    Normal,
    Slow,
    Fast,
}

/// ABCB1 (P-glycoprotein) genotype affecting clopidogrel absorption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum Abcb1 {
    Tt,
    Tc,
    Cc,
}

impl Abcb1 {
    pub const ALL: [Abcb1; 3] = [Self::Tt, Self::Tc, Self::Cc];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Tt => "TT",
            Self::Tc => "TC",
            Self::Cc => "CC",
        }
    }

    pub fn transport(&self) -> Transport {
        match self {
            Self::Tt => Transport::Fast,
            Self::Tc => Transport::MildlyFast,
            Self::Cc => Transport::Normal,
        }
    }
}

/// Rate at which P-glycoprotein clears clopidogrel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Transport {
    Fast,
    MildlyFast,
    Normal,
}
