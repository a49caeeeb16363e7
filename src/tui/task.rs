use crate::api::{Article, Evaluator, SummaryEvaluation, UsageVerdict};
use crate::error::PracticeError;
use crate::words::WordEntry;

/// Work the event loop should hand to the evaluator in the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Usage { word: WordEntry, sentence: String },
    Article,
    Summary { article: String, summary: String },
}

/// A finished request, carrying what the app needs to apply it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Usage {
        word: WordEntry,
        sentence: String,
        result: Result<UsageVerdict, PracticeError>,
    },
    Article(Result<Article, PracticeError>),
    Summary {
        summary: String,
        result: Result<SummaryEvaluation, PracticeError>,
    },
}

impl Request {
    pub async fn run(self, evaluator: &dyn Evaluator) -> Outcome {
        match self {
            Request::Usage { word, sentence } => {
                let result = evaluator.evaluate_usage(word.text, &sentence).await;
                Outcome::Usage {
                    word,
                    sentence,
                    result,
                }
            }
            Request::Article => Outcome::Article(evaluator.generate_article().await),
            Request::Summary { article, summary } => {
                let result = evaluator.evaluate_summary(&article, &summary).await;
                Outcome::Summary { summary, result }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockEvaluator;
    use crate::words::Difficulty;

    #[tokio::test]
    async fn test_usage_request_keeps_its_inputs() {
        let evaluator = MockEvaluator::new();
        let word = WordEntry::new("brave", Difficulty::Medium);
        let outcome = Request::Usage {
            word,
            sentence: "She was brave.".to_string(),
        }
        .run(&evaluator)
        .await;

        match outcome {
            Outcome::Usage {
                word: w,
                sentence,
                result,
            } => {
                assert_eq!(w, word);
                assert_eq!(sentence, "She was brave.");
                assert!(result.unwrap().correct);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_article_request_passes_errors_through() {
        let evaluator = MockEvaluator::new()
            .with_article(Err(PracticeError::Network("HTTP 500: down".to_string())));
        let outcome = Request::Article.run(&evaluator).await;
        assert_eq!(
            outcome,
            Outcome::Article(Err(PracticeError::Network("HTTP 500: down".to_string())))
        );
    }
}
