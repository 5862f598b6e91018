//! Report layout: the header block and the result tables, as plain
//! strings ready for any renderer.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use thrombo_core::{GiRiskFactor, ObservationField, PatientObservation};
use thrombo_scoring::aggregation::Reagent;
use thrombo_scoring::result::{TEXT_PLACEHOLDER, VALUE_PLACEHOLDER};
use thrombo_scoring::therapy::abcb1::ClopidogrelAbcb1;
use thrombo_scoring::therapy::aspirin::Aspirin;
use thrombo_scoring::therapy::cyp2c19::ClopidogrelCyp2c19;
use thrombo_scoring::therapy::ticagrelor::Ticagrelor;
use thrombo_scoring::{Assessment, ModuleOutcome, TherapyModule};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Examination {
    #[default]
    Outpatient,
    Inpatient,
}

impl Examination {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Outpatient => "Outpatient",
            Self::Inpatient => "Inpatient",
        }
    }
}

/// Who and when. Age and regimen come from the observation itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportHeader {
    pub date: Date,
    pub name_or_record: String,
    #[serde(default)]
    pub examination: Examination,
}

impl ReportHeader {
    /// Examination date as printed in reports and the log.
    pub fn formatted_date(&self) -> String {
        self.date.strftime("%d.%m.%Y").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDetail {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    fn new(title: &str, headers: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// `______` in the first cell, `-` in the rest.
    fn placeholder_row(self) -> Self {
        let rest = std::iter::repeat_n(TEXT_PLACEHOLDER, self.headers.len() - 1);
        self.row(std::iter::once(VALUE_PLACEHOLDER).chain(rest))
    }

    /// A labelled row whose measurement is missing.
    fn missing_parameter_row(self, parameter: &str) -> Self {
        let rest = std::iter::repeat_n(TEXT_PLACEHOLDER, self.headers.len() - 2);
        let cells = [parameter, VALUE_PLACEHOLDER].into_iter().chain(rest);
        self.row(cells)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: String,
    pub details: Vec<ReportDetail>,
    pub tables: Vec<ReportTable>,
}

const ADP_HEADER: &str = "Induced aggregation 5 µM ADP, % T-curve";
const ARA_HEADER: &str = "Induced aggregation 15 µL arachidonic acid, % T-curve";

const MAIN_HEADERS: [&str; 5] = [
    "Parameter",
    "Patient result",
    "Criterion",
    "Assessment",
    "Prognosis",
];

fn reagent_header(reagent: Reagent) -> &'static str {
    match reagent {
        Reagent::Adp5 => ADP_HEADER,
        Reagent::Ara15 => ARA_HEADER,
    }
}

/// Prognosis coefficient with three decimals, as in reports and the log.
pub fn format_coefficient(value: f64) -> String {
    format!("{value:.3}")
}

fn format_percent(value: f64) -> String {
    format!("{value}%")
}

fn optional_value<T: ToString>(value: Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => VALUE_PLACEHOLDER.to_string(),
    }
}

/// Lay out every table in report order.
pub fn build_report(
    title: &str,
    header: &ReportHeader,
    observation: &PatientObservation,
    assessment: &Assessment,
) -> Report {
    let details = vec![
        detail("Examination date", header.formatted_date()),
        detail("Patient", header.name_or_record.clone()),
        detail("Examination", header.examination.label().to_string()),
        detail("Age", optional_value(observation.age)),
        detail("Regimen", observation.regimen.label().to_string()),
    ];

    let tables = vec![
        main_table(assessment),
        genotype_correction_table(
            &ClopidogrelCyp2c19,
            ["CYP2C19 genotype", "Metabolism"],
            &assessment.clopidogrel_cyp2c19,
        ),
        genotype_correction_table(
            &ClopidogrelAbcb1,
            ["ABCB1 genotype", "Transport"],
            &assessment.clopidogrel_abcb1,
        ),
        correction_table(&Ticagrelor, &assessment.ticagrelor),
        correction_table(&Aspirin, &assessment.aspirin),
        renal_table(assessment),
        safety_table(observation, assessment),
    ];

    Report {
        title: title.to_string(),
        details,
        tables,
    }
}

fn detail(label: &str, value: String) -> ReportDetail {
    ReportDetail {
        label: label.to_string(),
        value,
    }
}

fn main_table(assessment: &Assessment) -> ReportTable {
    let prognosis = &assessment.prognosis;
    let table = ReportTable::new("Main results", &MAIN_HEADERS).row([
        "Prognosis coefficient".to_string(),
        format_coefficient(prognosis.value),
        prognosis.criterion.clone(),
        prognosis.state.clone(),
        prognosis.recommendation.clone(),
    ]);

    let table = match &assessment.adp_summary {
        ModuleOutcome::Scored(adp) => table.row([
            ADP_HEADER.to_string(),
            format_percent(adp.value),
            adp.criterion.clone(),
            adp.state.clone(),
            adp.recommendation.clone(),
        ]),
        ModuleOutcome::Unavailable => table.missing_parameter_row(ADP_HEADER),
    };

    // Genotype rows repeat the genotype as their criterion.
    [
        ("CYP2C19 genotype", &assessment.cyp2c19),
        ("ABCB1 genotype", &assessment.abcb1),
    ]
    .into_iter()
    .fold(table, |table, (name, interpretation)| match interpretation {
        Some(i) => table.row([
            name,
            i.genotype.as_str(),
            i.genotype.as_str(),
            i.assessment.as_str(),
            i.prognosis.as_str(),
        ]),
        None => table.missing_parameter_row(name),
    })
}

fn genotype_correction_table(
    module: &dyn TherapyModule,
    genotype_headers: [&str; 2],
    outcome: &ModuleOutcome,
) -> ReportTable {
    let headers = [
        reagent_header(module.reagent()),
        "Criterion",
        "Aggregation state",
        genotype_headers[0],
        genotype_headers[1],
        "Recommendation",
    ];
    let table = ReportTable::new(module.name(), &headers);
    match outcome {
        ModuleOutcome::Scored(result) => {
            let mut cells = vec![
                format_percent(result.value),
                result.criterion.clone(),
                result.state.clone(),
            ];
            cells.extend(result.extra_fields.iter().cloned());
            cells.push(result.advice());
            table.row(cells)
        }
        ModuleOutcome::Unavailable => table.placeholder_row(),
    }
}

fn correction_table(module: &dyn TherapyModule, outcome: &ModuleOutcome) -> ReportTable {
    let headers = [
        reagent_header(module.reagent()),
        "Criterion",
        "Aggregation state",
        "Recommendation",
    ];
    let table = ReportTable::new(module.name(), &headers);
    match outcome {
        ModuleOutcome::Scored(result) => table.row([
            format_percent(result.value),
            result.criterion.clone(),
            result.state.clone(),
            result.advice(),
        ]),
        ModuleOutcome::Unavailable => table.placeholder_row(),
    }
}

fn renal_table(assessment: &Assessment) -> ReportTable {
    ReportTable::new("Renal function", &["Parameter", "Value"])
        .row([
            "Creatinine clearance (Cockcroft-Gault), mL/min".to_string(),
            optional_value(assessment.renal.creatinine_clearance),
        ])
        .row([
            "Glomerular filtration rate (CKD-EPI), mL/min/1.73 m²".to_string(),
            optional_value(assessment.renal.filtration_rate),
        ])
}

fn safety_table(observation: &PatientObservation, assessment: &Assessment) -> ReportTable {
    let present: Vec<&str> = observation
        .gi_risk
        .present()
        .map(|f: GiRiskFactor| f.name())
        .collect();
    let risk_factors = if present.is_empty() {
        TEXT_PLACEHOLDER.to_string()
    } else {
        present.join("; ")
    };

    let headers = ["Parameter", "Value", "Conclusion"];
    ReportTable::new("Platelet safety and GI bleeding risk", &headers)
        .row([
            ObservationField::PlateletCount.name().to_string(),
            optional_value(observation.platelet_count),
            assessment.drug_cancellation.to_string(),
        ])
        .row([
            "GI bleeding risk score".to_string(),
            assessment.gi_bleeding_score.to_string(),
            risk_factors,
        ])
}
