use thrombo_core::{Gender, PatientObservation};
use thrombo_scoring::prognosis::{
    PrognosisBand, assess_prognosis, prognosis_band, prognosis_coefficient,
};

fn reference_patient() -> PatientObservation {
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
        ..Default::default()
    }
}

#[test]
fn reference_patient_coefficient() {
    let coefficient = prognosis_coefficient(&reference_patient());
    assert!((coefficient - 1.909).abs() < 1e-9, "got {coefficient}");
}

#[test]
fn reference_patient_is_unfavorable() {
    let result = assess_prognosis(&reference_patient()).unwrap();
    assert_eq!(result.criterion, "1.561-2.087");
    assert_eq!(result.state, "Unfavorable");
    assert_eq!(
        result.recommendation,
        "Medical visits possible within the next year"
    );
}

#[test]
fn absent_inputs_contribute_zero() {
    let baseline = prognosis_coefficient(&PatientObservation::default());
    assert!((baseline - -2.478).abs() < 1e-9);

    let female = PatientObservation {
        gender: Some(Gender::Female),
        ..Default::default()
    };
    assert!((prognosis_coefficient(&female) - -1.524).abs() < 1e-9);
}

#[test]
fn coefficient_is_rounded_to_three_decimals() {
    let obs = PatientObservation {
        induced_aggregation_5_adp: Some(0.1),
        ..Default::default()
    };
    // -2.478 - 0.0006 rounds to -2.479.
    assert_eq!(prognosis_coefficient(&obs), -2.479);
}

#[test]
fn band_edges() {
    assert_eq!(prognosis_band(1.5).unwrap(), PrognosisBand::Favorable);
    assert_eq!(prognosis_band(1.56).unwrap(), PrognosisBand::Favorable);
    assert_eq!(prognosis_band(1.561).unwrap(), PrognosisBand::Unfavorable);
    assert_eq!(prognosis_band(2.085).unwrap(), PrognosisBand::Unfavorable);
    assert_eq!(prognosis_band(2.087).unwrap(), PrognosisBand::Unfavorable);
    assert_eq!(prognosis_band(2.088).unwrap(), PrognosisBand::HighRisk);
}

#[test]
fn empty_observation_is_favorable() {
    let result = assess_prognosis(&PatientObservation::default()).unwrap();
    assert_eq!(result.criterion, "≤ 1.56");
    assert_eq!(result.state, "Favorable");
    assert!(result.extra_fields.is_empty());
}

#[test]
fn repeated_calls_are_identical() {
    let obs = reference_patient();
    assert_eq!(
        assess_prognosis(&obs).unwrap(),
        assess_prognosis(&obs).unwrap()
    );
}
