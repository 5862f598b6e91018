use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::genotype::{Abcb1, Cyp2c19};
use crate::regimen::DrugRegimen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Numeric inputs of a patient observation, in spreadsheet column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ObservationField {
    Age,
    Weight,
    Height,
    Creatinine,
    CreatinineClearance,
    Mpv,
    Plcr,
    SpontaneousAggregation,
    InducedAggregation1Adp,
    InducedAggregation5Adp,
    InducedAggregation15Ara,
    PlateletCount,
}

impl ObservationField {
    pub const ALL: [ObservationField; 12] = [
        Self::Age,
        Self::Weight,
        Self::Height,
        Self::Creatinine,
        Self::CreatinineClearance,
        Self::Mpv,
        Self::Plcr,
        Self::SpontaneousAggregation,
        Self::InducedAggregation1Adp,
        Self::InducedAggregation5Adp,
        Self::InducedAggregation15Ara,
        Self::PlateletCount,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Age => "Age, years",
            Self::Weight => "Weight, kg",
            Self::Height => "Height, cm",
            Self::Creatinine => "Creatinine, µmol/L",
            Self::CreatinineClearance => "Creatinine clearance, mL/min",
            Self::Mpv => "Mean platelet volume (MPV), fL",
            Self::Plcr => "Platelet large cell ratio (PLCR), %",
            Self::SpontaneousAggregation => "Spontaneous aggregation",
            Self::InducedAggregation1Adp => "Induced aggregation 1 µM ADP, %",
            Self::InducedAggregation5Adp => "Induced aggregation 5 µM ADP, %",
            Self::InducedAggregation15Ara => "Induced aggregation 15 µL arachidonic acid, %",
            Self::PlateletCount => "Platelet count, ×10⁹/L",
        }
    }
}

/// Binary risk factors for gastrointestinal bleeding on antiplatelet therapy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GiRiskFactor {
    UlcerHistory,
    GiBleedingHistory,
    NsaidUse,
    CorticosteroidUse,
    AgeOver65,
    Dyspepsia,
    Reflux,
    HelicobacterPylori,
    ChronicAlcoholUse,
}

impl GiRiskFactor {
    pub const ALL: [GiRiskFactor; 9] = [
        Self::UlcerHistory,
        Self::GiBleedingHistory,
        Self::NsaidUse,
        Self::CorticosteroidUse,
        Self::AgeOver65,
        Self::Dyspepsia,
        Self::Reflux,
        Self::HelicobacterPylori,
        Self::ChronicAlcoholUse,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::UlcerHistory => "History of peptic ulcer",
            Self::GiBleedingHistory => "History of GI bleeding",
            Self::NsaidUse => "NSAID use",
            Self::CorticosteroidUse => "Corticosteroid use",
            Self::AgeOver65 => "Age ≥ 65 years",
            Self::Dyspepsia => "Dyspepsia",
            Self::Reflux => "Gastroesophageal reflux",
            Self::HelicobacterPylori => "H. pylori infection",
            Self::ChronicAlcoholUse => "Chronic alcohol use",
        }
    }
}

/// Yes/no answers of the GI-bleeding questionnaire. Unanswered means "no".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct GiRiskFactors {
    pub ulcer_history: bool,
    pub gi_bleeding_history: bool,
    pub nsaid_use: bool,
    pub corticosteroid_use: bool,
    pub age_over_65: bool,
    pub dyspepsia: bool,
    pub reflux: bool,
    pub helicobacter_pylori: bool,
    pub chronic_alcohol_use: bool,
}

impl GiRiskFactors {
    pub fn is_present(&self, factor: GiRiskFactor) -> bool {
        match factor {
            GiRiskFactor::UlcerHistory => self.ulcer_history,
            GiRiskFactor::GiBleedingHistory => self.gi_bleeding_history,
            GiRiskFactor::NsaidUse => self.nsaid_use,
            GiRiskFactor::CorticosteroidUse => self.corticosteroid_use,
            GiRiskFactor::AgeOver65 => self.age_over_65,
            GiRiskFactor::Dyspepsia => self.dyspepsia,
            GiRiskFactor::Reflux => self.reflux,
            GiRiskFactor::HelicobacterPylori => self.helicobacter_pylori,
            GiRiskFactor::ChronicAlcoholUse => self.chronic_alcohol_use,
        }
    }

    pub fn set(&mut self, factor: GiRiskFactor, present: bool) {
        let slot = match factor {
            GiRiskFactor::UlcerHistory => &mut self.ulcer_history,
            GiRiskFactor::GiBleedingHistory => &mut self.gi_bleeding_history,
            GiRiskFactor::NsaidUse => &mut self.nsaid_use,
            GiRiskFactor::CorticosteroidUse => &mut self.corticosteroid_use,
            GiRiskFactor::AgeOver65 => &mut self.age_over_65,
            GiRiskFactor::Dyspepsia => &mut self.dyspepsia,
            GiRiskFactor::Reflux => &mut self.reflux,
            GiRiskFactor::HelicobacterPylori => &mut self.helicobacter_pylori,
            GiRiskFactor::ChronicAlcoholUse => &mut self.chronic_alcohol_use,
        };
        *slot = present;
    }

    /// Factors answered "yes", in questionnaire order.
    pub fn present(&self) -> impl Iterator<Item = GiRiskFactor> + '_ {
        GiRiskFactor::ALL
            .into_iter()
            .filter(move |factor| self.is_present(*factor))
    }
}

/// Everything measured or recorded about one patient for one assessment.
///
/// Every field is optional. How an absent value is treated is decided by
/// each scoring component, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct PatientObservation {
    pub gender: Option<Gender>,
    pub age: Option<f64>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    /// Serum creatinine in µmol/L.
    pub creatinine: Option<f64>,
    pub creatinine_clearance: Option<f64>,
    pub mpv: Option<f64>,
    pub plcr: Option<f64>,
    pub spontaneous_aggregation: Option<f64>,
    pub induced_aggregation_1_adp: Option<f64>,
    pub induced_aggregation_5_adp: Option<f64>,
    pub induced_aggregation_15_ara: Option<f64>,
    /// Platelet count in ×10⁹/L.
    pub platelet_count: Option<f64>,
    pub cyp2c19: Option<Cyp2c19>,
    pub abcb1: Option<Abcb1>,
    pub regimen: DrugRegimen,
    pub gi_risk: GiRiskFactors,
}

impl PatientObservation {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get(&self, field: ObservationField) -> Option<f64> {
        match field {
            ObservationField::Age => self.age,
            ObservationField::Weight => self.weight,
            ObservationField::Height => self.height,
            ObservationField::Creatinine => self.creatinine,
            ObservationField::CreatinineClearance => self.creatinine_clearance,
            ObservationField::Mpv => self.mpv,
            ObservationField::Plcr => self.plcr,
            ObservationField::SpontaneousAggregation => self.spontaneous_aggregation,
            ObservationField::InducedAggregation1Adp => self.induced_aggregation_1_adp,
            ObservationField::InducedAggregation5Adp => self.induced_aggregation_5_adp,
            ObservationField::InducedAggregation15Ara => self.induced_aggregation_15_ara,
            ObservationField::PlateletCount => self.platelet_count,
        }
    }
}
