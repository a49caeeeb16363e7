use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::types::{SummaryEvaluation, UsageVerdict};
use crate::scoring::{PunctuationAssessment, ScoreBreakdown, SummaryScore, UsageScore};
use crate::words::WordEntry;

/// What the evaluator said about a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    Usage(UsageVerdict),
    Summary(SummaryEvaluation),
}

/// Outcome of one submission-and-evaluation cycle. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub points_delta: i64,
    pub verdict: Verdict,
    pub punctuation: Option<PunctuationAssessment>,
    /// Pass/fail marker: correct usage, or a summary average at/above threshold
    pub passed: bool,
    /// The sentence or summary the player submitted
    pub submission: String,
    /// Word being practised (usage rounds only)
    pub word: Option<WordEntry>,
    pub breakdown: ScoreBreakdown,
    pub recorded_at: DateTime<Utc>,
}

impl RoundResult {
    pub fn usage(
        word: WordEntry,
        sentence: String,
        verdict: UsageVerdict,
        punctuation: PunctuationAssessment,
        score: UsageScore,
    ) -> Self {
        Self {
            points_delta: score.points,
            passed: verdict.correct,
            verdict: Verdict::Usage(verdict),
            punctuation: Some(punctuation),
            submission: sentence,
            word: Some(word),
            breakdown: score.breakdown,
            recorded_at: Utc::now(),
        }
    }

    pub fn summary(summary: String, evaluation: SummaryEvaluation, score: SummaryScore) -> Self {
        Self {
            points_delta: score.average,
            passed: score.passed,
            verdict: Verdict::Summary(evaluation),
            punctuation: None,
            submission: summary,
            word: None,
            breakdown: ScoreBreakdown::default(),
            recorded_at: Utc::now(),
        }
    }

    /// Submission cut to `max_chars` characters, with "..." when shortened.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut chars = self.submission.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}...", head)
        } else {
            head
        }
    }
}
