//! Measurements for a single assessment

use std::fmt;
use std::str::FromStr;

use crate::errors::{BodyMetricsError, Result};

/// Biological sex used to select the body-fat formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `m`/`f` and the full words, case-insensitive
impl FromStr for Gender {
    type Err = BodyMetricsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            _ => Err(BodyMetricsError::InvalidInput {
                expected: "M or F".to_string(),
                input: s.to_string(),
            }),
        }
    }
}

/// One subject's measurements
///
/// Construct through [`Subject::new`], which rejects non-positive values and
/// a hip measurement on a male subject. Fields are read-only afterwards; a
/// new `Subject` is built for every assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    height_cm: f64,
    weight_kg: f64,
    waist_cm: f64,
    neck_cm: f64,
    hip_cm: Option<f64>,
    gender: Gender,
    age: u32,
}

impl Subject {
    /// Validate and build a subject.
    ///
    /// A female subject without a hip measurement is accepted; the body-fat
    /// formula then treats the hip term as zero.
    pub fn new(
        height_cm: f64,
        weight_kg: f64,
        waist_cm: f64,
        neck_cm: f64,
        gender: Gender,
        hip_cm: Option<f64>,
        age: u32,
    ) -> Result<Self> {
        ensure_positive("height", height_cm)?;
        ensure_positive("weight", weight_kg)?;
        ensure_positive("waist", waist_cm)?;
        ensure_positive("neck", neck_cm)?;

        match (gender, hip_cm) {
            (Gender::Male, Some(_)) => return Err(BodyMetricsError::InvalidHip),
            (Gender::Female, Some(hip)) => ensure_positive("hip", hip)?,
            _ => {}
        }

        if age == 0 {
            return Err(BodyMetricsError::InvalidMeasurement {
                field: "age",
                value: 0.0,
            });
        }

        Ok(Subject {
            height_cm,
            weight_kg,
            waist_cm,
            neck_cm,
            hip_cm,
            gender,
            age,
        })
    }

    /// Check that the body-fat formula has a positive logarithm argument.
    ///
    /// The calculator itself does not check this and returns NaN instead.
    pub fn check_formula_domain(&self) -> Result<()> {
        match self.gender {
            Gender::Male if self.waist_cm <= self.neck_cm => {
                Err(BodyMetricsError::FormulaDomain(format!(
                    "waist ({} cm) must be larger than neck ({} cm)",
                    self.waist_cm, self.neck_cm
                )))
            }
            Gender::Female if self.waist_cm + self.hip_adjustment() <= 0.0 => {
                Err(BodyMetricsError::FormulaDomain(format!(
                    "waist + hip - neck must be positive, got {}",
                    self.waist_cm + self.hip_adjustment()
                )))
            }
            _ => Ok(()),
        }
    }

    fn hip_adjustment(&self) -> f64 {
        self.hip_cm.map(|hip| hip - self.neck_cm).unwrap_or(0.0)
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn waist_cm(&self) -> f64 {
        self.waist_cm
    }

    pub fn neck_cm(&self) -> f64 {
        self.neck_cm
    }

    pub fn hip_cm(&self) -> Option<f64> {
        self.hip_cm
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Collected for future age-adjusted formulas; unused today.
    pub fn age(&self) -> u32 {
        self.age
    }
}

fn ensure_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BodyMetricsError::InvalidMeasurement { field, value })
    }
}
