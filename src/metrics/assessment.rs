//! Derived results for one subject

use serde::Serialize;

use super::bmi::compute_bmi;
use super::body_fat::compute_body_fat;
use super::classify::{classify_bmi, classify_body_fat, BmiCategory, BodyFatCategory};
use super::recommend::{diet_recommendation, DietPlan};
use super::subject::Subject;

/// Everything computed from a [`Subject`]
///
/// Built fresh by [`Assessment::of`]; it is a snapshot, not a cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub bmi: f64,
    pub body_fat_percentage: f64,
    pub bmi_category: BmiCategory,
    pub body_fat_category: BodyFatCategory,
    #[serde(serialize_with = "serialize_plan_text")]
    pub diet_recommendation: DietPlan,
}

impl Assessment {
    pub fn of(subject: &Subject) -> Self {
        let bmi = compute_bmi(subject.weight_kg(), subject.height_cm());
        let body_fat_percentage = compute_body_fat(
            subject.waist_cm(),
            subject.neck_cm(),
            subject.height_cm(),
            subject.gender(),
            subject.hip_cm(),
        );

        Assessment {
            bmi,
            body_fat_percentage,
            bmi_category: classify_bmi(bmi),
            body_fat_category: classify_body_fat(body_fat_percentage),
            diet_recommendation: diet_recommendation(bmi),
        }
    }
}

fn serialize_plan_text<S: serde::Serializer>(
    plan: &DietPlan,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(plan.text())
}
