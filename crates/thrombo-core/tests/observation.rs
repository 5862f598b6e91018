use thrombo_core::error::CoreError;
use thrombo_core::{
    Abcb1, Cyp2c19, Drug, DrugRegimen, Gender, GiRiskFactor, GiRiskFactors, Metabolizer,
    ObservationField, PatientObservation, Transport,
};

#[test]
fn empty_json_yields_empty_observation() {
    let obs = PatientObservation::from_json("{}").unwrap();
    assert_eq!(obs, PatientObservation::default());
    assert_eq!(obs.regimen, DrugRegimen::None);
    assert!(obs.gi_risk.present().next().is_none());
}

#[test]
fn parses_wire_names() {
    let obs = PatientObservation::from_json(
        r#"{
            "gender": "female",
            "age": 67,
            "induced_aggregation_5_adp": 31.5,
            "cyp2c19": "CYP2C19*17",
            "abcb1": "TC",
            "regimen": "asa+ticagrelor",
            "gi_risk": { "nsaid_use": true, "reflux": true }
        }"#,
    )
    .unwrap();

    assert_eq!(obs.gender, Some(Gender::Female));
    assert_eq!(obs.age, Some(67.0));
    assert_eq!(
        obs.get(ObservationField::InducedAggregation5Adp),
        Some(31.5)
    );
    assert_eq!(obs.cyp2c19, Some(Cyp2c19::Star17));
    assert_eq!(obs.abcb1, Some(Abcb1::Tc));
    assert_eq!(obs.regimen, DrugRegimen::AspirinTicagrelor);
    assert_eq!(
        obs.gi_risk.present().collect::<Vec<_>>(),
        vec![GiRiskFactor::NsaidUse, GiRiskFactor::Reflux]
    );
}

#[test]
fn short_genotype_names_are_accepted() {
    let obs = PatientObservation::from_json(r#"{ "cyp2c19": "*2" }"#);
    assert_eq!(obs.unwrap().cyp2c19, Some(Cyp2c19::Star2));
}

#[test]
fn unknown_regimen_is_a_serialization_error() {
    let result = PatientObservation::from_json(r#"{ "regimen": "warfarin" }"#);
    assert!(matches!(result, Err(CoreError::Serialization(_))));
}

#[test]
fn genotype_phenotypes() {
    assert_eq!(Cyp2c19::Star1.metabolizer(), Metabolizer::Normal);
    assert_eq!(Cyp2c19::Star2.metabolizer(), Metabolizer::Slow);
    assert_eq!(Cyp2c19::Star3.metabolizer(), Metabolizer::Slow);
    assert_eq!(Cyp2c19::Star17.metabolizer(), Metabolizer::Fast);
    assert_eq!(Abcb1::Tt.transport(), Transport::Fast);
    assert_eq!(Abcb1::Tc.transport(), Transport::MildlyFast);
    assert_eq!(Abcb1::Cc.transport(), Transport::Normal);
}

#[test]
fn regimen_membership() {
    assert!(DrugRegimen::AspirinClopidogrel.contains(Drug::Clopidogrel));
    assert!(DrugRegimen::AspirinClopidogrel.contains(Drug::Aspirin));
    assert!(!DrugRegimen::AspirinClopidogrel.contains(Drug::Ticagrelor));
    assert!(DrugRegimen::None.drugs().is_empty());
    assert_eq!(DrugRegimen::AspirinTicagrelor.to_string(), "ASA+ticagrelor");
}

#[test]
fn gi_factor_setters_round_trip() {
    let mut factors = GiRiskFactors::default();
    for factor in GiRiskFactor::ALL {
        assert!(!factors.is_present(factor));
        factors.set(factor, true);
        assert!(factors.is_present(factor));
    }
    assert_eq!(factors.present().count(), 9);
}

#[test]
fn absent_fields_are_valid() {
    assert!(PatientObservation::default().validate().is_empty());
}

#[test]
fn in_range_values_pass_validation() {
    let obs = PatientObservation {
        age: Some(55.0),
        weight: Some(80.0),
        plcr: Some(0.0),
        induced_aggregation_15_ara: Some(100.0),
        platelet_count: Some(250.0),
        ..Default::default()
    };
    assert!(obs.validated().is_ok());
}

#[test]
fn out_of_range_values_are_all_reported() {
    let obs = PatientObservation {
        age: Some(0.0),
        weight: Some(301.0),
        induced_aggregation_15_ara: Some(-10.0),
        platelet_count: Some(f64::NAN),
        ..Default::default()
    };

    let errors = obs.validate();
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![
            ObservationField::Age,
            ObservationField::Weight,
            ObservationField::InducedAggregation15Ara,
            ObservationField::PlateletCount,
        ]
    );
    assert!(errors[0].message.contains("outside range (0, 120]"));
    assert!(errors[2].message.contains("[0, 100]"));
}

#[test]
fn validated_wraps_errors() {
    let obs = PatientObservation {
        mpv: Some(25.0),
        ..Default::default()
    };
    let err = obs.validated().unwrap_err();
    match &err {
        CoreError::InvalidObservation(errors) => assert_eq!(errors.len(), 1),
        other => panic!("unexpected error: {other}"),
    }
    let message = err.to_string();
    assert!(message.starts_with("invalid observation: Mean platelet"));
}
