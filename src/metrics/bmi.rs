//! Body Mass Index.

/// Calculates BMI from weight and height.
///
/// Formula:
/// ```text
/// BMI = weight_kg / (height_cm / 100)²
/// ```
///
/// The result is not rounded. Inputs are expected to be positive; a zero
/// height gives an infinite or NaN result rather than an error.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}
