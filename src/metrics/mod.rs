//! Body-composition engine
//!
//! Pure calculators and lookup tables. Nothing in here performs I/O or keeps
//! state between calls; input validation lives in [`Subject::new`] and the
//! interactive session.

pub mod assessment;
pub mod bmi;
pub mod body_fat;
pub mod classify;
pub mod recommend;
pub mod subject;

pub use assessment::Assessment;
pub use bmi::compute_bmi;
pub use body_fat::compute_body_fat;
pub use classify::{classify_bmi, classify_body_fat, BmiCategory, BodyFatCategory};
pub use recommend::{diet_recommendation, DietPlan};
pub use subject::{Gender, Subject};
