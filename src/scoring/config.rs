use serde::{Deserialize, Serialize};

pub const DEFAULT_CORRECT_POINTS: i64 = 10;
pub const DEFAULT_DIFFICULT_BONUS: i64 = 5;
pub const DEFAULT_EASY_MISS_PENALTY: i64 = 5;
pub const DEFAULT_PUNCTUATION_FULL: i64 = 2;
pub const DEFAULT_PUNCTUATION_PARTIAL: i64 = 1;
pub const DEFAULT_PUNCTUATION_NONE: i64 = -2;
pub const DEFAULT_PASS_THRESHOLD: i64 = 70;

/// Point weights for both games.
///
/// Every field is optional; a missing field falls back to the built-in
/// weight. The defaults reproduce the classic rules: +10 for correct usage,
/// +5 more for a difficult word, -5 for missing an easy word, and +2/+1/-2
/// depending on how many punctuation checks pass.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   correct_points: 10
///   difficult_bonus: 5
///   easy_miss_penalty: 5
///   punctuation_full: 2
///   punctuation_partial: 1
///   punctuation_none: -2
///   pass_threshold: 70
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Points for a sentence the evaluator judged correct
    #[serde(default)]
    pub correct_points: Option<i64>,

    /// Extra points for correct usage of a difficult word
    #[serde(default)]
    pub difficult_bonus: Option<i64>,

    /// Points taken away for misusing an easy word (given as a positive number)
    #[serde(default)]
    pub easy_miss_penalty: Option<i64>,

    /// Adjustment when both punctuation checks pass
    #[serde(default)]
    pub punctuation_full: Option<i64>,

    /// Adjustment when exactly one punctuation check passes
    #[serde(default)]
    pub punctuation_partial: Option<i64>,

    /// Adjustment when no punctuation check passes (usually negative)
    #[serde(default)]
    pub punctuation_none: Option<i64>,

    /// Summary average at or above which a writing round counts as a pass
    #[serde(default)]
    pub pass_threshold: Option<i64>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            correct_points: Some(DEFAULT_CORRECT_POINTS),
            difficult_bonus: Some(DEFAULT_DIFFICULT_BONUS),
            easy_miss_penalty: Some(DEFAULT_EASY_MISS_PENALTY),
            punctuation_full: Some(DEFAULT_PUNCTUATION_FULL),
            punctuation_partial: Some(DEFAULT_PUNCTUATION_PARTIAL),
            punctuation_none: Some(DEFAULT_PUNCTUATION_NONE),
            pass_threshold: Some(DEFAULT_PASS_THRESHOLD),
        }
    }
}

impl ScoringConfig {
    pub fn correct_points(&self) -> i64 {
        self.correct_points.unwrap_or(DEFAULT_CORRECT_POINTS)
    }

    pub fn difficult_bonus(&self) -> i64 {
        self.difficult_bonus.unwrap_or(DEFAULT_DIFFICULT_BONUS)
    }

    pub fn easy_miss_penalty(&self) -> i64 {
        self.easy_miss_penalty.unwrap_or(DEFAULT_EASY_MISS_PENALTY)
    }

    /// Adjustment for a punctuation score of 0, 1 or 2.
    pub fn punctuation_adjustment(&self, punctuation_score: u8) -> i64 {
        match punctuation_score {
            2.. => self.punctuation_full.unwrap_or(DEFAULT_PUNCTUATION_FULL),
            1 => self.punctuation_partial.unwrap_or(DEFAULT_PUNCTUATION_PARTIAL),
            0 => self.punctuation_none.unwrap_or(DEFAULT_PUNCTUATION_NONE),
        }
    }

    pub fn pass_threshold(&self) -> i64 {
        self.pass_threshold.unwrap_or(DEFAULT_PASS_THRESHOLD)
    }
}
