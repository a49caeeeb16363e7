pub mod client;
#[cfg(test)]
pub mod mock;
pub mod types;

pub use client::{create_client, HttpEvaluator};
pub use types::{Article, Score, SummaryEvaluation, UsageVerdict};

use async_trait::async_trait;

use crate::error::PracticeError;

/// Remote judge for practice submissions.
///
/// The core only depends on the decoded JSON shapes; transport lives in the
/// implementations.
#[async_trait]
pub trait Evaluator: Send + Sync {
    /// Judge how `word` is used in `sentence`.
    async fn evaluate_usage(&self, word: &str, sentence: &str)
        -> Result<UsageVerdict, PracticeError>;

    /// Fetch a fresh reading article.
    async fn generate_article(&self) -> Result<Article, PracticeError>;

    /// Grade a summary of `article`.
    async fn evaluate_summary(
        &self,
        article: &str,
        summary: &str,
    ) -> Result<SummaryEvaluation, PracticeError>;

    /// Judge whether `sentence` uses `verb_tense`.
    async fn evaluate_tense(
        &self,
        verb_tense: &str,
        sentence: &str,
    ) -> Result<UsageVerdict, PracticeError>;
}
