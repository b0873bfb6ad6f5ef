//! Property tests for the metrics engine
//!
//! Every calculator and lookup must be deterministic and total over f64.

use bodymetrics::metrics::{
    classify_bmi, classify_body_fat, compute_bmi, compute_body_fat, diet_recommendation,
    BmiCategory, BodyFatCategory, DietPlan, Gender,
};
use quickcheck_macros::quickcheck;

fn gender_from(flag: bool) -> Gender {
    if flag {
        Gender::Female
    } else {
        Gender::Male
    }
}

#[quickcheck]
fn bmi_is_deterministic(weight: f64, height: f64) -> bool {
    compute_bmi(weight, height).to_bits() == compute_bmi(weight, height).to_bits()
}

#[quickcheck]
fn body_fat_is_deterministic(
    waist: f64,
    neck: f64,
    height: f64,
    female: bool,
    hip: Option<f64>,
) -> bool {
    let gender = gender_from(female);
    let first = compute_body_fat(waist, neck, height, gender, hip);
    let second = compute_body_fat(waist, neck, height, gender, hip);
    first.to_bits() == second.to_bits()
}

#[quickcheck]
fn classifiers_are_total_and_deterministic(value: f64) -> bool {
    let bmi = classify_bmi(value);
    let fat = classify_body_fat(value);
    let plan = diet_recommendation(value);

    BmiCategory::all().contains(&bmi)
        && BodyFatCategory::all().contains(&fat)
        && bmi == classify_bmi(value)
        && fat == classify_body_fat(value)
        && plan == diet_recommendation(value)
}

#[quickcheck]
fn bmi_category_is_monotonic(a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return true;
    }
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let rank = |c: BmiCategory| BmiCategory::all().iter().position(|x| *x == c);
    rank(classify_bmi(low)) <= rank(classify_bmi(high))
}

#[quickcheck]
fn male_body_fat_ignores_hip(waist: u8, neck: u8, height: u8, hip: u8) -> bool {
    let (waist, neck, height) = (waist as f64 + 1.0, neck as f64 + 1.0, height as f64 + 1.0);
    let without = compute_body_fat(waist, neck, height, Gender::Male, None);
    let with = compute_body_fat(waist, neck, height, Gender::Male, Some(hip as f64 + 1.0));
    without.to_bits() == with.to_bits()
}

#[quickcheck]
fn female_missing_hip_matches_hip_equal_to_neck(waist: u8, neck: u8, height: u8) -> bool {
    let (waist, neck, height) = (waist as f64 + 1.0, neck as f64 + 1.0, height as f64 + 1.0);
    let missing = compute_body_fat(waist, neck, height, Gender::Female, None);
    let equal = compute_body_fat(waist, neck, height, Gender::Female, Some(neck));
    missing.to_bits() == equal.to_bits()
}

#[test]
fn test_reference_bmi() {
    assert!((compute_bmi(70.0, 170.0) - 24.22).abs() < 0.01);
}

#[test]
fn test_reference_bmi_categories() {
    let values = [18.4, 18.5, 24.9, 29.9, 34.9, 40.0];
    let labels: Vec<&str> = values.iter().map(|v| classify_bmi(*v).label()).collect();
    assert_eq!(
        labels,
        ["Underweight", "Normal", "Overweight", "Obese", "Very Obese", "Very Obese"]
    );
}

#[test]
fn test_reference_body_fat_categories() {
    let values = [4.9, 13.9, 19.9, 23.9, 30.9, 35.0];
    let labels: Vec<&str> = values
        .iter()
        .map(|v| classify_body_fat(*v).label())
        .collect();
    assert_eq!(
        labels,
        ["Essential fat", "Athletes", "Fitness", "Average", "Obese", "Very Obese"]
    );
}

#[test]
fn test_recommendation_boundaries() {
    assert_eq!(diet_recommendation(18.5), DietPlan::Balanced);
    assert_eq!(diet_recommendation(24.9), DietPlan::ModerateDeficit);
    assert_eq!(diet_recommendation(34.9), DietPlan::LowCarbHighFat);
    assert_eq!(classify_bmi(34.9), BmiCategory::VeryObese);
    assert_eq!(diet_recommendation(35.0), DietPlan::SupervisedLowCarb);
}
