use serde::Serialize;

use super::config::ScoringConfig;
use crate::api::types::{Score, SummaryEvaluation};

/// Rounded mean of the three category values, halves rounding up.
pub fn average_score(grammar: &Score, understanding: &Score, coherence: &Score) -> i64 {
    let sum = grammar.value + understanding.value + coherence.value;
    // floor(sum / 3 + 1/2) in integer arithmetic
    (2 * sum + 3).div_euclid(6)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryScore {
    pub average: i64,
    pub passed: bool,
}

pub fn score_summary(evaluation: &SummaryEvaluation, config: &ScoringConfig) -> SummaryScore {
    let average = average_score(
        &evaluation.grammar,
        &evaluation.understanding,
        &evaluation.coherence,
    );
    SummaryScore {
        average,
        passed: average >= config.pass_threshold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: i64) -> Score {
        Score::new(value, "")
    }

    #[test]
    fn test_exact_mean() {
        assert_eq!(average_score(&s(90), &s(80), &s(70)), 80);
    }

    #[test]
    fn test_rounding_on_thirds() {
        assert_eq!(average_score(&s(70), &s(70), &s(71)), 70);
        assert_eq!(average_score(&s(71), &s(71), &s(70)), 71);
        assert_eq!(average_score(&s(0), &s(0), &s(1)), 0);
        assert_eq!(average_score(&s(0), &s(1), &s(1)), 1);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(average_score(&s(0), &s(0), &s(0)), 0);
        assert_eq!(average_score(&s(100), &s(100), &s(100)), 100);
    }

    #[test]
    fn test_out_of_range_values_are_not_clamped() {
        assert_eq!(average_score(&s(150), &s(150), &s(150)), 150);
        assert_eq!(average_score(&s(-3), &s(-3), &s(-4)), -3);
    }

    #[test]
    fn test_pass_threshold() {
        let config = ScoringConfig::default();
        let eval = |g, u, c| SummaryEvaluation {
            grammar: s(g),
            understanding: s(u),
            coherence: s(c),
        };

        let at_threshold = score_summary(&eval(70, 70, 70), &config);
        assert_eq!(at_threshold.average, 70);
        assert!(at_threshold.passed);

        let below = score_summary(&eval(70, 69, 69), &config);
        assert_eq!(below.average, 69);
        assert!(!below.passed);
    }
}
