use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::types::{
    Article, ErrorBody, SummaryEvaluation, SummaryRequest, TenseRequest, UsageRequest,
    UsageVerdict,
};
use super::Evaluator;
use crate::config::Endpoints;
use crate::error::PracticeError;

/// Create the shared HTTP client
pub fn create_client() -> anyhow::Result<Client> {
    use anyhow::Context;
    Client::builder()
        .user_agent(concat!("lexidrill/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to create HTTP client")
}

/// Evaluator backed by the remote JSON endpoints.
///
/// No timeouts and no retries: a slow call stays pending until it resolves
/// or fails, and a failure is reported once.
#[derive(Clone, Debug)]
pub struct HttpEvaluator {
    client: Client,
    endpoints: Endpoints,
}

impl HttpEvaluator {
    pub fn new(client: Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

/// Turn a response into `T`, or into a `Network` error carrying the
/// service's `{"error": ...}` message when there is one.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, PracticeError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.error)
            .unwrap_or_else(|_| body.trim().to_string());
        warn!(status = status.as_u16(), %message, "evaluation service returned an error");
        return Err(PracticeError::Network(format!(
            "HTTP {}: {}",
            status.as_u16(),
            message
        )));
    }

    serde_json::from_str(&body).map_err(|e| {
        warn!(error = %e, "evaluation service returned malformed JSON");
        PracticeError::Network(format!("invalid response body: {}", e))
    })
}

#[async_trait]
impl Evaluator for HttpEvaluator {
    #[instrument(skip(self, sentence))]
    async fn evaluate_usage(
        &self,
        word: &str,
        sentence: &str,
    ) -> Result<UsageVerdict, PracticeError> {
        debug!(url = %self.endpoints.word_usage, "evaluating word usage");
        let response = self
            .client
            .post(&self.endpoints.word_usage)
            .json(&UsageRequest { word, sentence })
            .send()
            .await?;
        decode(response).await
    }

    #[instrument(skip(self))]
    async fn generate_article(&self) -> Result<Article, PracticeError> {
        debug!(url = %self.endpoints.article_generator, "fetching article");
        let response = self
            .client
            .get(&self.endpoints.article_generator)
            .send()
            .await?;
        decode(response).await
    }

    #[instrument(skip(self, article, summary))]
    async fn evaluate_summary(
        &self,
        article: &str,
        summary: &str,
    ) -> Result<SummaryEvaluation, PracticeError> {
        debug!(url = %self.endpoints.writing_evaluator, "evaluating summary");
        let response = self
            .client
            .post(&self.endpoints.writing_evaluator)
            .json(&SummaryRequest { article, summary })
            .send()
            .await?;
        decode(response).await
    }

    #[instrument(skip(self, sentence))]
    async fn evaluate_tense(
        &self,
        verb_tense: &str,
        sentence: &str,
    ) -> Result<UsageVerdict, PracticeError> {
        let url = self.endpoints.tense_evaluator.as_deref().ok_or_else(|| {
            PracticeError::Network("no tense evaluator endpoint configured".to_string())
        })?;
        debug!(url, "evaluating verb tense");
        let response = self
            .client
            .post(url)
            .json(&TenseRequest {
                verb_tense,
                sentence,
            })
            .send()
            .await?;
        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn evaluator_for(server: &MockServer) -> HttpEvaluator {
        let endpoints = Endpoints {
            word_usage: format!("{}/evaluator", server.uri()),
            article_generator: format!("{}/reading-generator", server.uri()),
            writing_evaluator: format!("{}/writing-evaluator", server.uri()),
            tense_evaluator: Some(format!("{}/tense-evaluator", server.uri())),
        };
        HttpEvaluator::new(create_client().unwrap(), endpoints)
    }

    #[tokio::test]
    async fn test_evaluate_usage_sends_word_and_sentence() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/evaluator"))
            .and(body_json(serde_json::json!({
                "word": "ephemeral",
                "sentence": "Fame is ephemeral."
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "correct": true,
                "explanation": "Used as an adjective meaning short-lived."
            })))
            .expect(1)
            .mount(&server)
            .await;

        let verdict = evaluator_for(&server)
            .evaluate_usage("ephemeral", "Fame is ephemeral.")
            .await
            .unwrap();
        assert!(verdict.correct);
        assert!(verdict.explanation.contains("short-lived"));
    }

    #[tokio::test]
    async fn test_generate_article() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reading-generator"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "topic": "Why sleep is essential for a healthy life",
                "article": "## Sleep\n\nSleep is **vital**."
            })))
            .mount(&server)
            .await;

        let article = evaluator_for(&server).generate_article().await.unwrap();
        assert!(article.article.starts_with("## Sleep"));
        assert_eq!(
            article.topic.as_deref(),
            Some("Why sleep is essential for a healthy life")
        );
    }

    #[tokio::test]
    async fn test_evaluate_summary() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/writing-evaluator"))
            .and(body_json(serde_json::json!({
                "article": "Text.",
                "summary": "Summary."
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "grammar_spelling": {"score": 90, "feedback": "Good."},
                "understanding": {"score": 80, "feedback": "Fine."},
                "coherence": {"score": 70, "feedback": "Okay."}
            })))
            .mount(&server)
            .await;

        let eval = evaluator_for(&server)
            .evaluate_summary("Text.", "Summary.")
            .await
            .unwrap();
        assert_eq!(eval.grammar.value, 90);
        assert_eq!(eval.coherence.feedback, "Okay.");
    }

    #[tokio::test]
    async fn test_evaluate_tense() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tense-evaluator"))
            .and(body_json(serde_json::json!({
                "verb_tense": "past simple",
                "sentence": "I walked home."
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "correct": true,
                "explanation": "Walked is past simple."
            })))
            .mount(&server)
            .await;

        let verdict = evaluator_for(&server)
            .evaluate_tense("past simple", "I walked home.")
            .await
            .unwrap();
        assert!(verdict.correct);
    }

    #[tokio::test]
    async fn test_missing_tense_endpoint() {
        let server = MockServer::start().await;
        let mut evaluator = evaluator_for(&server);
        evaluator.endpoints.tense_evaluator = None;

        let err = evaluator.evaluate_tense("future", "I will go.").await.unwrap_err();
        assert!(err.is_network());
        assert!(err.to_string().contains("tense evaluator"));
    }

    #[tokio::test]
    async fn test_error_body_message_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/evaluator"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "'sentence' cannot be empty"
            })))
            .mount(&server)
            .await;

        let err = evaluator_for(&server)
            .evaluate_usage("the", " ")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            PracticeError::Network("HTTP 400: 'sentence' cannot be empty".to_string())
        );
    }

    #[tokio::test]
    async fn test_plain_text_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reading-generator"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = evaluator_for(&server).generate_article().await.unwrap_err();
        assert!(err.to_string().contains("HTTP 502: Bad Gateway"));
    }

    #[tokio::test]
    async fn test_non_json_success_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/evaluator"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = evaluator_for(&server)
            .evaluate_usage("the", "The end.")
            .await
            .unwrap_err();
        assert!(err.is_network());
        assert!(err.to_string().contains("invalid response body"));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let server = MockServer::start().await;
        let evaluator = evaluator_for(&server);
        drop(server);

        let err = evaluator.evaluate_usage("the", "The end.").await.unwrap_err();
        assert!(err.is_network());
    }
}
