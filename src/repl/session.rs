//! Session state for the interactive loop
//!
//! Keeps a bounded, in-memory record of the assessments run so far so the
//! `/history` command can list them. Nothing is persisted.

use std::collections::VecDeque;

use crate::metrics::{Assessment, BmiCategory, BodyFatCategory, Gender, Subject};

/// Default number of runs kept in memory
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Summary of one completed assessment
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    /// 1-based position of the run within the session
    pub run: usize,
    pub gender: Gender,
    pub bmi: f64,
    pub body_fat_percentage: f64,
    pub bmi_category: BmiCategory,
    pub body_fat_category: BodyFatCategory,
}

/// Session manager maintaining loop state
///
/// Tracks:
/// - Run history (bounded to `max_history`)
/// - Total runs completed
pub struct SessionManager {
    /// Run history (FIFO queue)
    history: VecDeque<RunRecord>,

    max_history: usize,

    /// Total runs completed, including evicted ones
    run_count: usize,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_HISTORY)
    }

    pub fn with_capacity(max_history: usize) -> Self {
        let max_history = max_history.max(1);
        SessionManager {
            history: VecDeque::with_capacity(max_history),
            max_history,
            run_count: 0,
        }
    }

    /// Record a completed assessment
    pub fn record_run(&mut self, subject: &Subject, assessment: &Assessment) -> &RunRecord {
        self.run_count += 1;

        if self.history.len() >= self.max_history {
            self.history.pop_front();
        }
        self.history.push_back(RunRecord {
            run: self.run_count,
            gender: subject.gender(),
            bmi: assessment.bmi,
            body_fat_percentage: assessment.body_fat_percentage,
            bmi_category: assessment.bmi_category,
            body_fat_category: assessment.body_fat_category,
        });

        log::debug!("Recorded run {}", self.run_count);
        &self.history[self.history.len() - 1]
    }

    /// Get run history (newest first)
    pub fn get_history(&self, limit: usize) -> Vec<&RunRecord> {
        self.history.iter().rev().take(limit).collect()
    }

    /// Get total run count
    pub fn run_count(&self) -> usize {
        self.run_count
    }

    /// Get history size
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Subject, Assessment) {
        let subject = Subject::new(170.0, 70.0, 80.0, 40.0, Gender::Male, None, 35).unwrap();
        let assessment = Assessment::of(&subject);
        (subject, assessment)
    }

    #[test]
    fn test_session_creation() {
        let session = SessionManager::new();
        assert_eq!(session.run_count(), 0);
        assert_eq!(session.history_len(), 0);
    }

    #[test]
    fn test_record_run() {
        let mut session = SessionManager::new();
        let (subject, assessment) = sample();

        let record = session.record_run(&subject, &assessment).clone();

        assert_eq!(record.run, 1);
        assert_eq!(record.bmi_category, BmiCategory::Normal);
        assert_eq!(session.run_count(), 1);
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn test_history_bounded() {
        let mut session = SessionManager::with_capacity(3);
        let (subject, assessment) = sample();

        for _ in 0..5 {
            session.record_run(&subject, &assessment);
        }

        assert_eq!(session.history_len(), 3);
        assert_eq!(session.run_count(), 5);
    }

    #[test]
    fn test_get_history_newest_first() {
        let mut session = SessionManager::new();
        let (subject, assessment) = sample();

        for _ in 0..4 {
            session.record_run(&subject, &assessment);
        }

        let history = session.get_history(2);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].run, 4);
        assert_eq!(history[1].run, 3);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut session = SessionManager::with_capacity(0);
        let (subject, assessment) = sample();
        session.record_run(&subject, &assessment);
        assert_eq!(session.history_len(), 1);
    }
}
