//! Body fat percentage using the U.S. Navy circumference method.

use super::subject::Gender;

/// Navy formula coefficients for men.
mod male {
    pub const BASE: f64 = 1.0324;
    pub const CIRCUMFERENCE: f64 = 0.19077;
    pub const HEIGHT: f64 = 0.15456;
}

/// Navy formula coefficients for women.
mod female {
    pub const BASE: f64 = 1.29579;
    pub const CIRCUMFERENCE: f64 = 0.35004;
    pub const HEIGHT: f64 = 0.22100;
}

/// Calculates body fat percentage from circumference measurements.
///
/// Formulas (measurements in cm):
/// ```text
/// men:   BF% = 495 / (1.0324  - 0.19077 × log10(waist - neck)         + 0.15456 × log10(height)) - 450
/// women: BF% = 495 / (1.29579 - 0.35004 × log10(waist + hip - neck)   + 0.22100 × log10(height)) - 450
/// ```
///
/// When `hip_cm` is `None` for a woman, the `hip - neck` term is taken as 0,
/// so only the waist enters the logarithm. `hip_cm` is ignored for men.
///
/// The logarithm argument must be positive (`waist > neck` for men). This
/// is not checked here: a violated precondition yields NaN. See
/// [`Subject::check_formula_domain`](super::Subject::check_formula_domain).
pub fn compute_body_fat(
    waist_cm: f64,
    neck_cm: f64,
    height_cm: f64,
    gender: Gender,
    hip_cm: Option<f64>,
) -> f64 {
    let denominator = match gender {
        Gender::Male => {
            male::BASE - male::CIRCUMFERENCE * (waist_cm - neck_cm).log10()
                + male::HEIGHT * height_cm.log10()
        }
        Gender::Female => {
            let hip_adj = hip_cm.map(|hip| hip - neck_cm).unwrap_or(0.0);
            female::BASE - female::CIRCUMFERENCE * (waist_cm + hip_adj).log10()
                + female::HEIGHT * height_cm.log10()
        }
    };

    495.0 / denominator - 450.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_male_reference_value() {
        // waist - neck = 40
        // 1.0324 - 0.19077 × 1.60206 + 0.15456 × 2.23045 = 1.071513
        // 495 / 1.071513 - 450 = 11.9635
        let bf = compute_body_fat(80.0, 40.0, 170.0, Gender::Male, None);
        assert!(approx_eq(bf, 11.963510721986609, 1e-9));
    }

    #[test]
    fn test_male_ignores_hip() {
        let without = compute_body_fat(90.0, 38.0, 180.0, Gender::Male, None);
        assert!(approx_eq(without, 19.811988411785478, 1e-9));
    }

    #[test]
    fn test_female_with_hip() {
        // waist + hip - neck = 135
        let bf = compute_body_fat(80.0, 40.0, 170.0, Gender::Female, Some(95.0));
        assert!(approx_eq(bf, 24.584704666054847, 1e-9));
    }

    /// Missing hip for a woman silently drops the hip term. Kept as-is;
    /// callers that want to insist on a hip measurement must check first.
    #[test]
    fn test_female_missing_hip_defaults_to_zero_adjustment() {
        let missing = compute_body_fat(80.0, 40.0, 170.0, Gender::Female, None);
        let hip_equals_neck = compute_body_fat(80.0, 40.0, 170.0, Gender::Female, Some(40.0));
        assert_eq!(missing.to_bits(), hip_equals_neck.to_bits());
        assert!(approx_eq(missing, -9.044240179959218, 1e-9));
    }

    #[test]
    fn test_male_waist_not_above_neck_is_degenerate() {
        // log10(0) = -inf drives the denominator to +inf
        assert_eq!(compute_body_fat(40.0, 40.0, 170.0, Gender::Male, None), -450.0);
        assert!(compute_body_fat(30.0, 40.0, 170.0, Gender::Male, None).is_nan());
    }
}
