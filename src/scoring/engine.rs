use serde::Serialize;

use super::config::ScoringConfig;
use super::punctuation::PunctuationAssessment;
use crate::api::types::UsageVerdict;
use crate::words::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactorContribution {
    pub label: String,       // e.g. "Usage", "Difficulty", "Punctuation"
    pub description: String, // e.g. "correct usage +10", "1/2 checks passed +1"
    pub before: i64,         // Points before this factor
    pub after: i64,          // Points after this factor
}

impl FactorContribution {
    pub fn delta(&self) -> i64 {
        self.after - self.before
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorContribution>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageScore {
    pub points: i64,
    pub breakdown: ScoreBreakdown,
}

/// Point delta for one word-usage round. May be negative; never clamped.
pub fn score_usage_round(
    verdict: &UsageVerdict,
    difficulty: Difficulty,
    punctuation: &PunctuationAssessment,
    config: &ScoringConfig,
) -> i64 {
    calculate_usage_score(verdict, difficulty, punctuation, config).points
}

/// Same as [`score_usage_round`], keeping a record of each step.
pub fn calculate_usage_score(
    verdict: &UsageVerdict,
    difficulty: Difficulty,
    punctuation: &PunctuationAssessment,
    config: &ScoringConfig,
) -> UsageScore {
    let mut points = 0;
    let mut factors = Vec::new();

    // Base
    let before = points;
    let description = if verdict.correct {
        points += config.correct_points();
        format!("correct usage {:+}", config.correct_points())
    } else {
        "incorrect usage +0".to_string()
    };
    factors.push(FactorContribution {
        label: "Usage".to_string(),
        description,
        before,
        after: points,
    });

    // Difficulty only matters at the extremes
    let difficulty_adjustment = match (verdict.correct, difficulty) {
        (true, Difficulty::Difficult) => Some((
            config.difficult_bonus(),
            format!("difficult word bonus {:+}", config.difficult_bonus()),
        )),
        (false, Difficulty::Easy) => Some((
            -config.easy_miss_penalty(),
            format!("missed an easy word {:+}", -config.easy_miss_penalty()),
        )),
        _ => None,
    };
    if let Some((delta, description)) = difficulty_adjustment {
        let before = points;
        points += delta;
        factors.push(FactorContribution {
            label: "Difficulty".to_string(),
            description,
            before,
            after: points,
        });
    }

    let before = points;
    let adjustment = config.punctuation_adjustment(punctuation.score);
    points += adjustment;
    factors.push(FactorContribution {
        label: "Punctuation".to_string(),
        description: format!("{}/2 checks passed {:+}", punctuation.score, adjustment),
        before,
        after: points,
    });

    UsageScore {
        points,
        breakdown: ScoreBreakdown { factors },
    }
}
