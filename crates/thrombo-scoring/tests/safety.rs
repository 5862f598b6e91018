use proptest::prelude::*;
use thrombo_core::{Drug, DrugRegimen, GiRiskFactor, GiRiskFactors};
use thrombo_scoring::gi_bleeding::gi_bleeding_score;
use thrombo_scoring::platelets::{CancellationAdvice, drug_cancellation};

fn factors_from_bits(bits: u16) -> GiRiskFactors {
    let mut factors = GiRiskFactors::default();
    for (i, factor) in GiRiskFactor::ALL.into_iter().enumerate() {
        factors.set(factor, bits & (1 << i) != 0);
    }
    factors
}

#[test]
fn gi_score_is_popcount_for_every_combination() {
    for bits in 0u16..512 {
        let factors = factors_from_bits(bits);
        assert_eq!(
            u32::from(gi_bleeding_score(&factors)),
            bits.count_ones(),
            "bits {bits:09b}"
        );
    }
}

#[test]
fn gi_score_bounds() {
    assert_eq!(gi_bleeding_score(&GiRiskFactors::default()), 0);
    assert_eq!(gi_bleeding_score(&factors_from_bits(0x1ff)), 9);
}

proptest! {
    #[test]
    fn gi_score_is_monotonic(bits in 0u16..512, flip in 0usize..9) {
        let before = factors_from_bits(bits);
        let mut after = before;
        after.set(GiRiskFactor::ALL[flip], true);
        prop_assert!(gi_bleeding_score(&after) >= gi_bleeding_score(&before));
    }
}

fn advice(count: f64, regimen: DrugRegimen) -> String {
    drug_cancellation(Some(count), regimen).to_string()
}

#[test]
fn critically_low_count_withdraws_the_whole_regimen() {
    assert_eq!(
        advice(5.0, DrugRegimen::Aspirin),
        "Recommend discontinuing ASA"
    );
    assert_eq!(
        advice(10.0, DrugRegimen::AspirinTicagrelor),
        "Recommend discontinuing ticagrelor and ASA"
    );
    assert_eq!(
        advice(8.0, DrugRegimen::AspirinClopidogrel),
        "Recommend discontinuing clopidogrel and ASA"
    );
    assert_eq!(
        drug_cancellation(Some(1.0), DrugRegimen::Clopidogrel),
        CancellationAdvice::Discontinue {
            drugs: vec![Drug::Clopidogrel]
        }
    );
}

#[test]
fn low_count_withdraws_p2y12_inhibitors() {
    assert_eq!(
        advice(20.0, DrugRegimen::AspirinClopidogrel),
        "Recommend discontinuing clopidogrel"
    );
    assert_eq!(
        advice(30.0, DrugRegimen::AspirinTicagrelor),
        "Recommend discontinuing ticagrelor"
    );
    assert_eq!(advice(20.0, DrugRegimen::Aspirin), "May continue");
}

#[test]
fn moderate_count_withdraws_ticagrelor_only() {
    assert_eq!(
        advice(40.0, DrugRegimen::AspirinTicagrelor),
        "Recommend discontinuing ticagrelor"
    );
    assert_eq!(
        drug_cancellation(Some(50.0), DrugRegimen::Clopidogrel),
        CancellationAdvice::Continue
    );
}

#[test]
fn adequate_count_continues() {
    for regimen in DrugRegimen::ALL {
        assert_eq!(advice(60.0, regimen), "May continue");
    }
}

#[test]
fn no_regimen_always_continues() {
    for count in [1.0, 20.0, 40.0, 300.0] {
        assert_eq!(advice(count, DrugRegimen::None), "May continue");
    }
}

#[test]
fn missing_or_nan_count_is_undetermined() {
    assert_eq!(
        drug_cancellation(None, DrugRegimen::Aspirin),
        CancellationAdvice::Undetermined
    );
    assert_eq!(advice(f64::NAN, DrugRegimen::Aspirin), "Undetermined");
}
