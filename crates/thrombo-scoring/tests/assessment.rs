use thrombo_core::{Abcb1, Cyp2c19, DrugRegimen, Gender, GiRiskFactors, PatientObservation};
use thrombo_scoring::platelets::CancellationAdvice;
use thrombo_scoring::{ModuleOutcome, assess};

fn complete_observation() -> PatientObservation {
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
        induced_aggregation_5_adp: Some(40.0),
        induced_aggregation_15_ara: Some(18.0),
        platelet_count: Some(220.0),
        cyp2c19: Some(Cyp2c19::Star2),
        abcb1: Some(Abcb1::Tt),
        regimen: DrugRegimen::AspirinClopidogrel,
        gi_risk: GiRiskFactors {
            nsaid_use: true,
            dyspepsia: true,
            ..Default::default()
        },
    }
}

#[test]
fn complete_observation_scores_every_module() {
    let assessment = assess(&complete_observation()).unwrap();

    assert!((assessment.prognosis.value - 1.909).abs() < 1e-9);
    assert_eq!(
        assessment.adp_summary.scored().unwrap().recommendation,
        "Therapy ineffective"
    );
    assert_eq!(
        assessment.cyp2c19.as_ref().unwrap().assessment,
        "Slow clopidogrel metabolism"
    );
    assert_eq!(
        assessment.abcb1.as_ref().unwrap().prognosis,
        "Clopidogrel resistance likely"
    );
    let cyp = assessment.clopidogrel_cyp2c19.scored().unwrap();
    assert_eq!(cyp.recommendation, "Switch to prasugrel or ticagrelor");
    assert!(assessment.clopidogrel_abcb1.is_available());
    assert!(assessment.ticagrelor.is_available());
    assert_eq!(assessment.aspirin.scored().unwrap().criterion, "T ≥ 8 %");
    assert_eq!(assessment.renal.creatinine_clearance, Some(93));
    assert_eq!(assessment.renal.filtration_rate, Some(87));
    assert_eq!(assessment.gi_bleeding_score, 2);
    assert_eq!(assessment.drug_cancellation, CancellationAdvice::Continue);
}

#[test]
fn empty_observation_degrades_per_module() {
    let assessment = assess(&PatientObservation::default()).unwrap();

    // Prognosis treats absent inputs as zero; classifiers report unavailable.
    assert_eq!(assessment.prognosis.state, "Favorable");
    assert_eq!(assessment.adp_summary, ModuleOutcome::Unavailable);
    assert_eq!(assessment.cyp2c19, None);
    assert_eq!(assessment.clopidogrel_cyp2c19, ModuleOutcome::Unavailable);
    assert_eq!(assessment.clopidogrel_abcb1, ModuleOutcome::Unavailable);
    assert_eq!(assessment.ticagrelor, ModuleOutcome::Unavailable);
    assert_eq!(assessment.aspirin, ModuleOutcome::Unavailable);
    assert_eq!(assessment.renal.creatinine_clearance, None);
    assert_eq!(assessment.gi_bleeding_score, 0);
    assert_eq!(
        assessment.drug_cancellation,
        CancellationAdvice::Undetermined
    );
}

#[test]
fn assessment_is_idempotent() {
    let obs = complete_observation();
    assert_eq!(assess(&obs).unwrap(), assess(&obs).unwrap());
}

#[test]
fn assessment_serializes_to_json() {
    let assessment = assess(&complete_observation()).unwrap();
    let json = serde_json::to_value(&assessment).unwrap();
    assert_eq!(json["clopidogrel_cyp2c19"]["status"], "scored");
    assert_eq!(json["drug_cancellation"]["decision"], "continue");
    assert_eq!(json["gi_bleeding_score"], 2);
}
