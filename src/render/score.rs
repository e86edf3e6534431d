//! Score Presentation
//!
//! The service reports the score; this module decides what to show.
//! Anything that is not a number in [0, 100] is shown as 0.

use serde::Serialize;

use crate::constants::score::{AVERAGE_THRESHOLD, GOOD_THRESHOLD, MAX, MAX_TIPS_SHOWN, MIN};
use crate::types::{AnalysisResult, RawScore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreGrade {
    Good,
    Average,
    Poor,
}

impl ScoreGrade {
    pub fn from_score(score: u8) -> Self {
        if score >= GOOD_THRESHOLD {
            ScoreGrade::Good
        } else if score >= AVERAGE_THRESHOLD {
            ScoreGrade::Average
        } else {
            ScoreGrade::Poor
        }
    }
}

/// Displayable score: rounded, range-checked, 0 when unusable
pub fn normalize_score(raw: &RawScore) -> u8 {
    match raw.as_f64().map(f64::round) {
        Some(v) if v >= MIN as f64 && v <= MAX as f64 => v as u8,
        _ => 0,
    }
}

/// What the score view shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub score: u8,
    pub grade: ScoreGrade,
    /// At most three tips, in reported order
    pub tips: Vec<String>,
}

impl ScoreReport {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let score = normalize_score(&result.score);
        Self {
            score,
            grade: ScoreGrade::from_score(score),
            tips: result.tips.iter().take(MAX_TIPS_SHOWN).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn raw(value: Value) -> RawScore {
        RawScore(value)
    }

    #[test]
    fn test_valid_scores() {
        assert_eq!(normalize_score(&raw(json!(72))), 72);
        assert_eq!(normalize_score(&raw(json!(0))), 0);
        assert_eq!(normalize_score(&raw(json!(100))), 100);
        assert_eq!(normalize_score(&raw(json!(72.6))), 73);
    }

    #[test]
    fn test_unusable_scores_become_zero() {
        assert_eq!(normalize_score(&raw(Value::Null)), 0);
        assert_eq!(normalize_score(&raw(json!("85"))), 0);
        assert_eq!(normalize_score(&raw(json!(true))), 0);
        assert_eq!(normalize_score(&raw(json!(101))), 0);
        assert_eq!(normalize_score(&raw(json!(-5))), 0);
        assert_eq!(normalize_score(&raw(json!(1e9))), 0);
    }

    #[test]
    fn test_grades() {
        assert_eq!(ScoreGrade::from_score(80), ScoreGrade::Good);
        assert_eq!(ScoreGrade::from_score(79), ScoreGrade::Average);
        assert_eq!(ScoreGrade::from_score(50), ScoreGrade::Average);
        assert_eq!(ScoreGrade::from_score(49), ScoreGrade::Poor);
        assert_eq!(ScoreGrade::from_score(0), ScoreGrade::Poor);
    }

    #[test]
    fn test_report_limits_tips() {
        let result = AnalysisResult {
            score: RawScore::from_int(91),
            tips: (1..=5).map(|i| format!("tip {i}")).collect(),
            ..Default::default()
        };
        let report = ScoreReport::from_result(&result);
        assert_eq!(report.score, 91);
        assert_eq!(report.grade, ScoreGrade::Good);
        assert_eq!(report.tips, vec!["tip 1", "tip 2", "tip 3"]);
    }

    #[test]
    fn test_report_for_missing_score() {
        let report = ScoreReport::from_result(&AnalysisResult::default());
        assert_eq!(report.score, 0);
        assert_eq!(report.grade, ScoreGrade::Poor);
        assert!(report.tips.is_empty());
    }
}
