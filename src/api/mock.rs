//! Canned evaluator for tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::types::{Article, Score, SummaryEvaluation, UsageVerdict};
use super::Evaluator;
use crate::error::PracticeError;

/// Returns fixed responses and counts calls.
pub struct MockEvaluator {
    usage: Result<UsageVerdict, PracticeError>,
    article: Result<Article, PracticeError>,
    summary: Result<SummaryEvaluation, PracticeError>,
    call_count: AtomicU32,
    last_input: Mutex<Option<(String, String)>>,
}

impl MockEvaluator {
    pub fn new() -> Self {
        Self {
            usage: Ok(UsageVerdict {
                correct: true,
                explanation: "Looks right.".to_string(),
            }),
            article: Ok(Article {
                article: "## Sleep\n\nSleep is essential.".to_string(),
                topic: Some("Why sleep is essential for a healthy life".to_string()),
            }),
            summary: Ok(SummaryEvaluation {
                grammar: Score::new(90, "Clean."),
                understanding: Score::new(80, "Good."),
                coherence: Score::new(70, "Okay."),
            }),
            call_count: AtomicU32::new(0),
            last_input: Mutex::new(None),
        }
    }

    pub fn with_usage(mut self, usage: Result<UsageVerdict, PracticeError>) -> Self {
        self.usage = usage;
        self
    }

    pub fn with_summary(mut self, summary: Result<SummaryEvaluation, PracticeError>) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_article(mut self, article: Result<Article, PracticeError>) -> Self {
        self.article = article;
        self
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// The two text arguments of the last call, if any.
    pub fn last_input(&self) -> Option<(String, String)> {
        self.last_input.lock().unwrap().clone()
    }

    fn note(&self, a: &str, b: &str) {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_input.lock().unwrap() = Some((a.to_string(), b.to_string()));
    }
}

impl Default for MockEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Evaluator for MockEvaluator {
    async fn evaluate_usage(
        &self,
        word: &str,
        sentence: &str,
    ) -> Result<UsageVerdict, PracticeError> {
        self.note(word, sentence);
        self.usage.clone()
    }

    async fn generate_article(&self) -> Result<Article, PracticeError> {
        self.note("", "");
        self.article.clone()
    }

    async fn evaluate_summary(
        &self,
        article: &str,
        summary: &str,
    ) -> Result<SummaryEvaluation, PracticeError> {
        self.note(article, summary);
        self.summary.clone()
    }

    async fn evaluate_tense(
        &self,
        verb_tense: &str,
        sentence: &str,
    ) -> Result<UsageVerdict, PracticeError> {
        self.note(verb_tense, sentence);
        self.usage.clone()
    }
}
