use std::fmt;
use std::time::{Duration, Instant};

use tracing::debug;

use super::countdown::Countdown;
use crate::api::Article;

/// Where the writing exercise currently is. Transitions only move forward;
/// `reset` is the way back to `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Reading,
    Writing,
    Scored,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Loading => "Loading",
            Phase::Reading => "Reading",
            Phase::Writing => "Writing",
            Phase::Scored => "Scored",
        };
        write!(f, "{}", s)
    }
}

/// Read an article against the clock, then summarise it.
#[derive(Debug, Clone)]
pub struct WritingExercise {
    phase: Phase,
    reading_time: Duration,
    article: Option<String>,
    topic: Option<String>,
    countdown: Option<Countdown>,
}

impl WritingExercise {
    pub fn new(reading_time: Duration) -> Self {
        Self {
            phase: Phase::Loading,
            reading_time,
            article: None,
            topic: None,
            countdown: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Article text as shown to the reader, ellipsis included.
    pub fn article(&self) -> Option<&str> {
        self.article.as_deref()
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn reading_time(&self) -> Duration {
        self.reading_time
    }

    /// Enter `Reading` with a fresh article and start the countdown.
    /// Ignored outside `Loading`.
    pub fn article_loaded(&mut self, article: Article, now: Instant) -> bool {
        if self.phase != Phase::Loading {
            return false;
        }
        self.article = Some(format!("{}...", article.article));
        self.topic = article.topic;
        self.countdown = Some(Countdown::start(self.reading_time, now));
        self.phase = Phase::Reading;
        debug!(reading_secs = self.reading_time.as_secs(), "article loaded");
        true
    }

    /// `Reading -> Writing`. Returns false if already past reading, so a
    /// user action racing the countdown only switches once.
    pub fn start_writing(&mut self) -> bool {
        if self.phase != Phase::Reading {
            return false;
        }
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.cancel();
        }
        self.phase = Phase::Writing;
        debug!("writing started");
        true
    }

    /// Advance the clock. Returns true when the countdown forced writing.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Reading {
            return false;
        }
        let expired = self
            .countdown
            .as_mut()
            .map_or(false, |countdown| countdown.poll(now));
        expired && self.start_writing()
    }

    /// `Writing -> Scored`, after an accepted evaluation.
    pub fn mark_scored(&mut self) -> bool {
        if self.phase != Phase::Writing {
            return false;
        }
        self.phase = Phase::Scored;
        true
    }

    /// Back to `Loading` from anywhere; the caller fetches a new article.
    pub fn reset(&mut self) {
        self.phase = Phase::Loading;
        self.article = None;
        self.topic = None;
        self.countdown = None;
    }

    /// Seconds left on the reading clock, while reading.
    pub fn remaining_secs(&self, now: Instant) -> Option<u64> {
        self.reading_countdown().map(|c| c.remaining_secs(now))
    }

    /// Share of reading time left, while reading.
    pub fn fraction_remaining(&self, now: Instant) -> Option<f64> {
        self.reading_countdown().map(|c| c.fraction_remaining(now))
    }

    fn reading_countdown(&self) -> Option<&Countdown> {
        if self.phase == Phase::Reading {
            self.countdown.as_ref()
        } else {
            None
        }
    }
}

/// Whitespace-separated words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article {
            article: "Sleep is essential".to_string(),
            topic: Some("Sleep".to_string()),
        }
    }

    fn reading(start: Instant) -> WritingExercise {
        let mut exercise = WritingExercise::new(Duration::from_secs(300));
        assert!(exercise.article_loaded(article(), start));
        exercise
    }

    #[test]
    fn test_starts_loading() {
        let exercise = WritingExercise::new(Duration::from_secs(300));
        assert_eq!(exercise.phase(), Phase::Loading);
        assert!(exercise.article().is_none());
        assert!(exercise.remaining_secs(Instant::now()).is_none());
    }

    #[test]
    fn test_article_gets_ellipsis_and_clock_starts() {
        let start = Instant::now();
        let exercise = reading(start);
        assert_eq!(exercise.phase(), Phase::Reading);
        assert_eq!(exercise.article(), Some("Sleep is essential..."));
        assert_eq!(exercise.topic(), Some("Sleep"));
        assert_eq!(exercise.remaining_secs(start), Some(300));
        assert_eq!(exercise.fraction_remaining(start), Some(1.0));
    }

    #[test]
    fn test_countdown_forces_writing_once() {
        let start = Instant::now();
        let mut exercise = reading(start);

        assert!(!exercise.tick(start + Duration::from_secs(299)));
        assert!(exercise.tick(start + Duration::from_secs(300)));
        assert_eq!(exercise.phase(), Phase::Writing);
        assert!(!exercise.tick(start + Duration::from_secs(301)));
        assert!(!exercise.start_writing());
        assert_eq!(exercise.phase(), Phase::Writing);
    }

    #[test]
    fn test_user_action_cancels_countdown() {
        let start = Instant::now();
        let mut exercise = reading(start);

        assert!(exercise.start_writing());
        assert!(!exercise.start_writing());
        assert!(!exercise.tick(start + Duration::from_secs(600)));
        assert_eq!(exercise.phase(), Phase::Writing);
        assert!(exercise.remaining_secs(start).is_none());
    }

    #[test]
    fn test_scored_only_from_writing() {
        let start = Instant::now();
        let mut exercise = reading(start);
        assert!(!exercise.mark_scored());
        exercise.start_writing();
        assert!(exercise.mark_scored());
        assert_eq!(exercise.phase(), Phase::Scored);
        assert!(!exercise.mark_scored());
    }

    #[test]
    fn test_reset_from_any_phase() {
        let start = Instant::now();
        let mut exercise = reading(start);
        exercise.start_writing();
        exercise.mark_scored();
        exercise.reset();
        assert_eq!(exercise.phase(), Phase::Loading);
        assert!(exercise.article().is_none());
        assert!(exercise.topic().is_none());

        // a late article from before the reset is still welcome in Loading
        assert!(exercise.article_loaded(article(), start));
        assert!(!exercise.article_loaded(article(), start));
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("  Sleep   matters\n a lot. "), 4);
    }
}
