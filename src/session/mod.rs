pub mod history;
pub mod types;

pub use history::History;
pub use types::{RoundResult, Verdict};

/// Running state for one game: the point total and the round history.
///
/// Owned by whoever drives the game and passed into the round drivers; there
/// is no process-wide counter. The total always equals the sum of the
/// recorded rounds' deltas.
#[derive(Debug, Clone, Default)]
pub struct Session {
    total: i64,
    history: History,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a finished round: add its delta and put it at the head of the history.
    pub fn record(&mut self, round: RoundResult) -> &RoundResult {
        self.total += round.points_delta;
        self.history.push(round)
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::UsageVerdict;
    use crate::scoring::{check_punctuation, ScoreBreakdown, UsageScore};
    use crate::words::{Difficulty, WordEntry};

    fn round(points: i64, sentence: &str) -> RoundResult {
        RoundResult::usage(
            WordEntry::new("word", Difficulty::Easy),
            sentence.to_string(),
            UsageVerdict {
                correct: points > 0,
                explanation: String::new(),
            },
            check_punctuation(sentence),
            UsageScore {
                points,
                breakdown: ScoreBreakdown::default(),
            },
        )
    }

    #[test]
    fn test_new_session_empty() {
        let session = Session::new();
        assert_eq!(session.total(), 0);
        assert!(session.history().is_empty());
        assert!(session.history().latest().is_none());
    }

    #[test]
    fn test_history_is_newest_first() {
        let mut session = Session::new();
        session.record(round(5, "First."));
        session.record(round(3, "Second."));

        let order: Vec<&str> = session
            .history()
            .iter()
            .map(|r| r.submission.as_str())
            .collect();
        assert_eq!(order, vec!["Second.", "First."]);
        assert_eq!(session.history().latest().unwrap().submission, "Second.");
    }

    #[test]
    fn test_total_is_sum_of_deltas() {
        let mut session = Session::new();
        for delta in [5, -2, 10] {
            session.record(round(delta, "Round."));
        }
        assert_eq!(session.total(), 13);
        assert_eq!(session.rounds_played(), 3);

        let summed: i64 = session.history().iter().map(|r| r.points_delta).sum();
        assert_eq!(summed, session.total());
    }

    #[test]
    fn test_total_can_go_negative() {
        let mut session = Session::new();
        session.record(round(-7, "bad"));
        assert_eq!(session.total(), -7);
    }

    #[test]
    fn test_record_returns_the_stored_round() {
        let mut session = Session::new();
        let stored = session.record(round(12, "Hello."));
        assert_eq!(stored.points_delta, 12);
    }
}
