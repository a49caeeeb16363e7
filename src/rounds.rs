//! One submission-and-evaluation cycle per game.
//!
//! The drivers validate input, call the evaluator, score the verdict and only
//! then touch the session. Any error returns before the session is changed.

use tracing::{debug, info};

use crate::api::{Evaluator, SummaryEvaluation, UsageVerdict};
use crate::error::PracticeError;
use crate::scoring::{calculate_usage_score, check_punctuation, score_summary, ScoringConfig};
use crate::session::{RoundResult, Session};
use crate::words::WordEntry;

pub const EMPTY_SENTENCE: &str = "Please enter a sentence.";
pub const EMPTY_SUMMARY: &str = "Please write a summary before submitting.";

/// Trimmed submission, or `Validation(message)` when nothing is left.
pub fn validate_submission<'a>(text: &'a str, message: &str) -> Result<&'a str, PracticeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PracticeError::Validation(message.to_string()));
    }
    Ok(trimmed)
}

/// Score a usage verdict and record it.
pub fn apply_usage_verdict(
    session: &mut Session,
    word: WordEntry,
    sentence: &str,
    verdict: UsageVerdict,
    config: &ScoringConfig,
) -> RoundResult {
    let punctuation = check_punctuation(sentence);
    let score = calculate_usage_score(&verdict, word.difficulty, &punctuation, config);
    info!(word = word.text, points = score.points, "usage round scored");
    let round = RoundResult::usage(word, sentence.to_string(), verdict, punctuation, score);
    session.record(round).clone()
}

/// Average a summary evaluation and record it.
pub fn apply_summary_evaluation(
    session: &mut Session,
    summary: &str,
    evaluation: SummaryEvaluation,
    config: &ScoringConfig,
) -> RoundResult {
    let score = score_summary(&evaluation, config);
    info!(
        average = score.average,
        passed = score.passed,
        "summary round scored"
    );
    let round = RoundResult::summary(summary.to_string(), evaluation, score);
    session.record(round).clone()
}

/// Play one word-usage round against `evaluator`.
pub async fn play_usage_round(
    evaluator: &dyn Evaluator,
    session: &mut Session,
    word: WordEntry,
    sentence: &str,
    config: &ScoringConfig,
) -> Result<RoundResult, PracticeError> {
    let sentence = validate_submission(sentence, EMPTY_SENTENCE)?;
    debug!(word = word.text, "submitting sentence");
    let verdict = evaluator.evaluate_usage(word.text, sentence).await?;
    Ok(apply_usage_verdict(session, word, sentence, verdict, config))
}

/// Play one summary round. The round's delta is the average score.
pub async fn play_summary_round(
    evaluator: &dyn Evaluator,
    session: &mut Session,
    article: &str,
    summary: &str,
    config: &ScoringConfig,
) -> Result<RoundResult, PracticeError> {
    let summary = validate_submission(summary, EMPTY_SUMMARY)?;
    debug!(chars = summary.chars().count(), "submitting summary");
    let evaluation = evaluator.evaluate_summary(article, summary).await?;
    Ok(apply_summary_evaluation(session, summary, evaluation, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockEvaluator;
    use crate::api::Score;
    use crate::words::Difficulty;

    fn difficult() -> WordEntry {
        WordEntry::new("ubiquitous", Difficulty::Difficult)
    }

    #[tokio::test]
    async fn test_usage_round_records_into_session() {
        let evaluator = MockEvaluator::new();
        let mut session = Session::new();

        let round = play_usage_round(
            &evaluator,
            &mut session,
            difficult(),
            "  Phones are ubiquitous.  ",
            &ScoringConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(round.points_delta, 17);
        assert_eq!(round.submission, "Phones are ubiquitous.");
        assert_eq!(session.total(), 17);
        assert_eq!(session.rounds_played(), 1);
        assert_eq!(
            evaluator.last_input(),
            Some(("ubiquitous".to_string(), "Phones are ubiquitous.".to_string()))
        );
    }

    #[tokio::test]
    async fn test_incorrect_easy_word_goes_negative() {
        let evaluator = MockEvaluator::new().with_usage(Ok(UsageVerdict {
            correct: false,
            explanation: "Wrong sense.".to_string(),
        }));
        let mut session = Session::new();

        let round = play_usage_round(
            &evaluator,
            &mut session,
            WordEntry::new("the", Difficulty::Easy),
            "the",
            &ScoringConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(round.points_delta, -7);
        assert!(!round.passed);
        assert_eq!(session.total(), -7);
    }

    #[tokio::test]
    async fn test_empty_sentence_is_rejected_without_a_call() {
        let evaluator = MockEvaluator::new();
        let mut session = Session::new();

        let err = play_usage_round(
            &evaluator,
            &mut session,
            difficult(),
            "   \n",
            &ScoringConfig::default(),
        )
        .await
        .unwrap_err();

        assert_eq!(err, PracticeError::Validation(EMPTY_SENTENCE.to_string()));
        assert_eq!(evaluator.call_count(), 0);
        assert_eq!(session.rounds_played(), 0);
    }

    #[tokio::test]
    async fn test_network_failure_leaves_session_unchanged() {
        let evaluator = MockEvaluator::new()
            .with_usage(Err(PracticeError::Network("HTTP 500: boom".to_string())));
        let mut session = Session::new();
        play_usage_round(
            &MockEvaluator::new(),
            &mut session,
            difficult(),
            "Phones are ubiquitous.",
            &ScoringConfig::default(),
        )
        .await
        .unwrap();

        let err = play_usage_round(
            &evaluator,
            &mut session,
            difficult(),
            "Another sentence.",
            &ScoringConfig::default(),
        )
        .await
        .unwrap_err();

        assert!(err.is_network());
        assert_eq!(session.total(), 17);
        assert_eq!(session.rounds_played(), 1);
    }

    #[tokio::test]
    async fn test_summary_round_adds_average() {
        let evaluator = MockEvaluator::new();
        let mut session = Session::new();

        let round = play_summary_round(
            &evaluator,
            &mut session,
            "Article text...",
            "Sleep matters.",
            &ScoringConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(round.points_delta, 80);
        assert!(round.passed);
        assert_eq!(session.total(), 80);
        assert_eq!(
            evaluator.last_input(),
            Some(("Article text...".to_string(), "Sleep matters.".to_string()))
        );
    }

    #[tokio::test]
    async fn test_summary_below_threshold_fails_marker() {
        let evaluator = MockEvaluator::new().with_summary(Ok(SummaryEvaluation {
            grammar: Score::new(60, ""),
            understanding: Score::new(70, ""),
            coherence: Score::new(65, ""),
        }));
        let mut session = Session::new();

        let round = play_summary_round(
            &evaluator,
            &mut session,
            "Article",
            "Short.",
            &ScoringConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(round.points_delta, 65);
        assert!(!round.passed);
    }

    #[tokio::test]
    async fn test_empty_summary_is_rejected() {
        let evaluator = MockEvaluator::new();
        let mut session = Session::new();

        let err = play_summary_round(
            &evaluator,
            &mut session,
            "Article",
            "",
            &ScoringConfig::default(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), EMPTY_SUMMARY);
        assert_eq!(evaluator.call_count(), 0);
        assert_eq!(session.total(), 0);
    }

    #[test]
    fn test_validate_submission_trims() {
        assert_eq!(validate_submission(" a b ", EMPTY_SENTENCE).unwrap(), "a b");
        assert!(validate_submission("\t", EMPTY_SENTENCE)
            .unwrap_err()
            .is_validation());
    }
}
