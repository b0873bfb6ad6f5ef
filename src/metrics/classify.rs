//! Category lookups for BMI and body fat percentage.
//!
//! Each table is scanned low to high; a value falls into the first band
//! whose exclusive upper bound it is below. Anything left over, NaN
//! included, lands in the last band.

use serde::Serialize;
use std::fmt;

/// BMI bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
    VeryObese,
}

impl BmiCategory {
    pub fn all() -> &'static [BmiCategory] {
        &[
            BmiCategory::Underweight,
            BmiCategory::Normal,
            BmiCategory::Overweight,
            BmiCategory::Obese,
            BmiCategory::VeryObese,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
            BmiCategory::VeryObese => "Very Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body fat percentage bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    EssentialFat,
    Athletes,
    Fitness,
    Average,
    Obese,
    VeryObese,
}

impl BodyFatCategory {
    pub fn all() -> &'static [BodyFatCategory] {
        &[
            BodyFatCategory::EssentialFat,
            BodyFatCategory::Athletes,
            BodyFatCategory::Fitness,
            BodyFatCategory::Average,
            BodyFatCategory::Obese,
            BodyFatCategory::VeryObese,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            BodyFatCategory::EssentialFat => "Essential fat",
            BodyFatCategory::Athletes => "Athletes",
            BodyFatCategory::Fitness => "Fitness",
            BodyFatCategory::Average => "Average",
            BodyFatCategory::Obese => "Obese",
            BodyFatCategory::VeryObese => "Very Obese",
        }
    }
}

impl fmt::Display for BodyFatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Upper bounds (exclusive) for each BMI band except the last.
const BMI_BANDS: [(f64, BmiCategory); 4] = [
    (18.5, BmiCategory::Underweight),
    (24.9, BmiCategory::Normal),
    (29.9, BmiCategory::Overweight),
    (34.9, BmiCategory::Obese),
];

/// Upper bounds (exclusive) for each body fat band except the last.
const BODY_FAT_BANDS: [(f64, BodyFatCategory); 5] = [
    (5.0, BodyFatCategory::EssentialFat),
    (14.0, BodyFatCategory::Athletes),
    (20.0, BodyFatCategory::Fitness),
    (24.0, BodyFatCategory::Average),
    (31.0, BodyFatCategory::Obese),
];

/// BMI category for `bmi`; values outside every band, NaN included, are Very Obese
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    BMI_BANDS
        .iter()
        .find(|(bound, _)| bmi < *bound)
        .map(|(_, category)| *category)
        .unwrap_or(BmiCategory::VeryObese)
}

/// Body-fat category for a percentage, first band whose upper bound exceeds it
pub fn classify_body_fat(body_fat_pct: f64) -> BodyFatCategory {
    BODY_FAT_BANDS
        .iter()
        .find(|(bound, _)| body_fat_pct < *bound)
        .map(|(_, category)| *category)
        .unwrap_or(BodyFatCategory::VeryObese)
}
