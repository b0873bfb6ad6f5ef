//! Diet guidance keyed on BMI.
//!
//! The bands mirror the BMI categories except for the fourth bound, which is
//! 35 here and 34.9 in [`classify_bmi`](super::classify_bmi). A BMI in
//! [34.9, 35) is therefore "Very Obese" but still gets the low-carb plan.

use std::fmt;

/// Diet plan suggested for a BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DietPlan {
    WeightGain,
    Balanced,
    ModerateDeficit,
    LowCarbHighFat,
    SupervisedLowCarb,
}

impl DietPlan {
    pub fn text(&self) -> &'static str {
        match self {
            DietPlan::WeightGain => {
                "Increase your calorie intake with a high-protein diet: about 30% protein, \
                 45% carbohydrates and 25% fat, spread over frequent meals."
            }
            DietPlan::Balanced => {
                "Maintain a balanced diet: about 25% protein, 50% carbohydrates and 25% fat, \
                 with plenty of vegetables and whole grains."
            }
            DietPlan::ModerateDeficit => {
                "Keep a balanced diet with a modest calorie deficit: about 30% protein, \
                 40% carbohydrates and 30% fat."
            }
            DietPlan::LowCarbHighFat => {
                "Consider a low-carbohydrate, high-fat diet: about 30% protein, \
                 20% carbohydrates and 50% fat, combined with regular exercise."
            }
            DietPlan::SupervisedLowCarb => {
                "Follow a strict low-carbohydrate, high-fat diet: about 25% protein, \
                 5-10% carbohydrates and 65-70% fat. Consult a healthcare professional \
                 before making major dietary changes."
            }
        }
    }
}

impl fmt::Display for DietPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

const DIET_BANDS: [(f64, DietPlan); 4] = [
    (18.5, DietPlan::WeightGain),
    (24.9, DietPlan::Balanced),
    (29.9, DietPlan::ModerateDeficit),
    (35.0, DietPlan::LowCarbHighFat),
];

/// Diet plan for a BMI value, using the 35 upper bound for the low-carb band
pub fn diet_recommendation(bmi: f64) -> DietPlan {
    DIET_BANDS
        .iter()
        .find(|(bound, _)| bmi < *bound)
        .map(|(_, plan)| *plan)
        .unwrap_or(DietPlan::SupervisedLowCarb)
}
