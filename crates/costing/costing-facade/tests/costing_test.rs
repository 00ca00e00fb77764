//! Unit-level tests for the patient cost estimator through the facade

use costing_facade::{
    severity_factor, CostEstimator, PatientCostEstimator, PatientRecord, RiskLevel,
};

fn estimate(age: i64, diagnosis: &str, days: i64, admissions: i64) -> costing_facade::CostPrediction {
    PatientCostEstimator::new().estimate(&PatientRecord::new(age, "F", diagnosis, days, admissions))
}

#[test]
fn test_cancer_reference_case() {
    let prediction = estimate(70, "Cancer", 10, 3);

    assert_eq!(prediction.estimated_cost, 5160.0);
    assert!((prediction.confidence.min - 4386.0).abs() < 1e-9);
    assert!((prediction.confidence.max - 5934.0).abs() < 1e-9);
    assert_eq!(prediction.predicted_length_of_stay, 11);
    assert_eq!(prediction.risk_score, 1.0);
    assert_eq!(prediction.risk_level, RiskLevel::High);
}

#[test]
fn test_band_always_contains_estimate() {
    let diagnoses = ["Hypertension", "Diabetes", "Heart Disease", "Cancer", "Asthma", "General", "Flu"];
    for age in [0, 10, 17, 18, 45, 65, 66, 99] {
        for diagnosis in diagnoses {
            for days in [0, 1, 7, 30] {
                for admissions in [0, 1, 2, 3, 8] {
                    let p = estimate(age, diagnosis, days, admissions);
                    assert!(
                        p.confidence.contains(p.estimated_cost, 1e-9),
                        "band {:?} misses {}",
                        p.confidence,
                        p.estimated_cost
                    );
                }
            }
        }
    }
}

#[test]
fn test_risk_partition() {
    for age in 0..=100 {
        for admissions in 0..6 {
            let p = estimate(age, "Diabetes", 3, admissions);
            let expected = if p.risk_score > 0.6 {
                RiskLevel::High
            } else if p.risk_score > 0.3 {
                RiskLevel::Medium
            } else {
                RiskLevel::Low
            };
            assert_eq!(p.risk_level, expected, "score {}", p.risk_score);
        }
    }
}

#[test]
fn test_length_of_stay_rules() {
    assert_eq!(estimate(40, "General", 5, 0).predicted_length_of_stay, 5);
    assert_eq!(estimate(40, "General", 5, 1).predicted_length_of_stay, 5);
    assert_eq!(estimate(40, "General", 5, 2).predicted_length_of_stay, 6);
    assert_eq!(estimate(40, "General", 0, 0).predicted_length_of_stay, 1);
    assert_eq!(estimate(40, "General", -4, 0).predicted_length_of_stay, 1);
}

#[test]
fn test_unknown_diagnosis_is_neutral() {
    assert_eq!(severity_factor("Migraine"), 1.0);
    assert_eq!(
        estimate(40, "Migraine", 5, 0).estimated_cost,
        estimate(40, "General", 5, 0).estimated_cost
    );
}

#[test]
fn test_risk_score_can_go_negative() {
    let p = estimate(5, "Asthma", 2, 0);
    assert!(p.risk_score < 0.0);
    assert_eq!(p.risk_level, RiskLevel::Low);
}
