use jiff::civil::date;
use thrombo_core::{Abcb1, Cyp2c19, DrugRegimen, Gender, GiRiskFactors, PatientObservation};
use thrombo_export::docx::generate_docx;
use thrombo_export::render::{render_html, render_template};
use thrombo_export::styles::DocumentStyles;
use thrombo_export::{Examination, Report, ReportHeader, build_report};
use thrombo_scoring::assess;

fn header() -> ReportHeader {
    ReportHeader {
        date: date(2026, 3, 14),
        name_or_record: "Record 1187".to_string(),
        examination: Examination::Inpatient,
    }
}

fn observation() -> PatientObservation {
    PatientObservation {
        gender: Some(Gender::Male),
        age: Some(55.0),
        weight: Some(80.0),
        height: Some(175.0),
        creatinine: Some(90.0),
        creatinine_clearance: Some(85.0),
        mpv: Some(10.5),
        plcr: Some(25.0),
        spontaneous_aggregation: Some(12.0),
        induced_aggregation_1_adp: Some(30.0),
        induced_aggregation_5_adp: Some(15.0),
        induced_aggregation_15_ara: Some(5.0),
        platelet_count: Some(40.0),
        cyp2c19: Some(Cyp2c19::Star1),
        abcb1: Some(Abcb1::Tc),
        regimen: DrugRegimen::AspirinTicagrelor,
        gi_risk: GiRiskFactors {
            ulcer_history: true,
            ..Default::default()
        },
    }
}

fn report_for(observation: &PatientObservation) -> Report {
    let assessment = assess(observation).unwrap();
    let title = "Antiplatelet therapy assessment";
    build_report(title, &header(), observation, &assessment)
}

#[test]
fn tables_follow_report_order() {
    let report = report_for(&observation());
    let titles: Vec<_> = report.tables.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Main results",
            "Clopidogrel therapy correction by CYP2C19 genotype",
            "Clopidogrel therapy correction by P-glycoprotein transport activity",
            "Ticagrelor therapy correction",
            "Aspirin therapy correction",
            "Renal function",
            "Platelet safety and GI bleeding risk",
        ]
    );
    for table in &report.tables {
        for row in &table.rows {
            assert_eq!(row.len(), table.headers.len(), "{}", table.title);
        }
    }
}

#[test]
fn header_details() {
    let report = report_for(&observation());
    let details: Vec<_> = report
        .details
        .iter()
        .map(|d| (d.label.as_str(), d.value.as_str()))
        .collect();
    assert_eq!(
        details,
        vec![
            ("Examination date", "14.03.2026"),
            ("Patient", "Record 1187"),
            ("Examination", "Inpatient"),
            ("Age", "55"),
            ("Regimen", "ASA+ticagrelor"),
        ]
    );
}

#[test]
fn populated_rows() {
    let report = report_for(&observation());

    let main = &report.tables[0];
    assert_eq!(main.rows[1][1], "15%");
    assert_eq!(main.rows[1][2], "10 < T < 25 %");
    assert_eq!(main.rows[2][1], "CYP2C19*1");
    assert_eq!(main.rows[2][2], "CYP2C19*1");
    assert_eq!(main.rows[3][2], "TC");

    let cyp = &report.tables[1];
    assert_eq!(
        cyp.rows[0],
        vec![
            "15%",
            "10 < T < 25 %",
            "Platelet aggregation moderately suppressed",
            "CYP2C19*1",
            "Normal metabolism",
            "Continue clopidogrel. Therapy effective",
        ]
    );

    assert_eq!(report.tables[3].rows[0][0], "15%");
    assert_eq!(report.tables[3].headers[0], report.tables[1].headers[0]);
    assert_eq!(report.tables[4].rows[0][0], "5%");
    assert!(report.tables[4].headers[0].contains("arachidonic acid"));

    let renal = &report.tables[5];
    assert_eq!(renal.rows[0][1], "93");
    assert_eq!(renal.rows[1][1], "87");

    let safety = &report.tables[6];
    assert_eq!(safety.rows[0][2], "Recommend discontinuing ticagrelor");
    assert_eq!(safety.rows[1][1], "1");
}

#[test]
fn prognosis_coefficient_prints_three_decimals() {
    let observation = PatientObservation {
        gender: Some(Gender::Female),
        induced_aggregation_1_adp: Some(2.0),
        ..Default::default()
    };
    let report = report_for(&observation);
    assert_eq!(report.tables[0].rows[0][1], "-1.500");
}

#[test]
fn unavailable_modules_render_placeholder_rows() {
    let report = report_for(&PatientObservation::default());

    assert_eq!(report.tables[0].rows[1][1], "______");
    assert_eq!(report.tables[0].rows[2][1], "______");
    assert_eq!(
        report.tables[1].rows[0],
        vec!["______", "-", "-", "-", "-", "-"]
    );
    assert_eq!(report.tables[3].rows[0], vec!["______", "-", "-", "-"]);
    assert_eq!(report.tables[5].rows[0][1], "______");
    assert_eq!(report.tables[6].rows[0][1], "______");
    assert_eq!(report.tables[6].rows[0][2], "Undetermined");
    assert_eq!(report.tables[6].rows[1][2], "-");
}

#[test]
fn html_contains_every_table() {
    let report = report_for(&observation());
    let html = render_html(&report, &DocumentStyles::default()).unwrap();

    assert!(html.contains("<h1>Antiplatelet therapy assessment</h1>"));
    assert!(html.contains("14.03.2026"));
    assert_eq!(html.matches("<table>").count(), 7);
    // Autoescaped
    assert!(html.contains("10 &lt; T &lt; 25 %"));
    assert!(html.contains("Times New Roman"));
}

#[test]
fn custom_template() {
    let report = report_for(&observation());
    let rendered = render_template(
        "summary.txt",
        "{{ report.title }}: {{ report.tables | length }} tables",
        &report,
        &DocumentStyles::default(),
    )
    .unwrap();
    assert_eq!(rendered, "Antiplatelet therapy assessment: 7 tables");
}

#[test]
fn broken_template_is_a_parse_error() {
    let report = report_for(&observation());
    let styles = DocumentStyles::default();
    let result = render_template("bad.html", "{% for x in %}", &report, &styles);
    let err = result.unwrap_err().to_string();
    assert!(err.starts_with("template parse error"));
}

#[test]
fn docx_is_a_zip_package() {
    let report = report_for(&observation());
    let bytes = generate_docx(&report, &DocumentStyles::default()).unwrap();
    assert!(bytes.len() > 1000);
    assert_eq!(&bytes[..2], b"PK");
}
