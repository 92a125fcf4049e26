//! OpenRouter gateway implementation
//!
//! One POST per completion, authenticated with a bearer key. No retries and
//! no streaming.

use super::protocol::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use draftsmith_application::ports::llm_gateway::{GatewayError, LlmGateway};
use draftsmith_domain::{ApiKey, ChatMessage, Model};
use std::time::Duration;
use tracing::{debug, trace};

/// Default OpenRouter API root
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// LLM gateway backed by the OpenRouter chat completions API
///
/// Holds the credential and a pooled HTTP client; share it through an `Arc`.
pub struct OpenRouterGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: ApiKey,
}

impl OpenRouterGateway {
    /// Create a gateway for `base_url` (e.g. [`DEFAULT_BASE_URL`]).
    ///
    /// Without `timeout` the HTTP client's default applies.
    pub fn new(
        api_key: ApiKey,
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| {
                GatewayError::Transport(format!("Failed to build HTTP client: {}", error_chain(&e)))
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// `err` followed by each of its sources, joined with `: `
///
/// reqwest's own message ("error sending request for url ...") hides the
/// connect or TLS failure underneath it.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[async_trait]
impl LlmGateway for OpenRouterGateway {
    async fn complete(
        &self,
        model: &Model,
        messages: &[ChatMessage],
    ) -> Result<String, GatewayError> {
        if messages.is_empty() {
            return Err(GatewayError::InvalidRequest(
                "messages must not be empty".to_string(),
            ));
        }

        let request = ChatCompletionRequest {
            model: model.as_str(),
            messages,
        };

        debug!(endpoint = %self.endpoint, model = %model, "Sending completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(error_chain(&e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(error_chain(&e)))?;

        trace!(status = status.as_u16(), bytes = body.len(), "Completion response received");

        if !status.is_success() {
            return Err(GatewayError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| {
                debug!("Unparseable completion body: {}", e);
                GatewayError::EmptyResponse
            })?;

        parsed
            .first_content()
            .map(str::to_string)
            .ok_or(GatewayError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway(server: &MockServer) -> OpenRouterGateway {
        OpenRouterGateway::new(ApiKey::try_new("sk-or-test").unwrap(), &server.uri(), None)
            .unwrap()
    }

    fn model() -> Model {
        Model::try_new("openai/gpt-4o-mini").unwrap()
    }

    fn messages() -> Vec<ChatMessage> {
        vec![ChatMessage::system("You write essays."), ChatMessage::user("Topic: Tides")]
    }

    #[derive(Debug, thiserror::Error)]
    #[error("error sending request")]
    struct SendFailed(#[source] std::io::Error);

    #[test]
    fn test_error_chain_includes_sources() {
        let err = SendFailed(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        assert_eq!(error_chain(&err), "error sending request: connection refused");

        let bare = std::io::Error::other("reset");
        assert_eq!(error_chain(&bare), "reset");
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let key = ApiKey::try_new("k").unwrap();
        let gateway = OpenRouterGateway::new(key.clone(), "http://localhost:9000/v1/", None).unwrap();
        assert_eq!(gateway.endpoint(), "http://localhost:9000/v1/chat/completions");

        let gateway = OpenRouterGateway::new(key, DEFAULT_BASE_URL, None).unwrap();
        assert_eq!(
            gateway.endpoint(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_complete_returns_trimmed_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-or-test"))
            .and(body_partial_json(json!({
                "model": "openai/gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "You write essays."},
                    {"role": "user", "content": "Topic: Tides"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "gen-123",
                "choices": [{"message": {"role": "assistant", "content": "\n  The tides rise.  \n"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = gateway(&server).complete(&model(), &messages()).await.unwrap();

        assert_eq!(text, "The tides rise.");
    }

    #[tokio::test]
    async fn test_error_status_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string(r#"{"error":{"message":"No auth credentials found"}}"#),
            )
            .mount(&server)
            .await;

        let err = gateway(&server)
            .complete(&model(), &messages())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().contains("No auth credentials found"));
    }

    #[tokio::test]
    async fn test_error_status_even_with_valid_completion_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({
                "choices": [{"message": {"content": "looks fine"}}]
            })))
            .mount(&server)
            .await;

        let err = gateway(&server)
            .complete(&model(), &messages())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    async fn test_missing_content_is_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let err = gateway(&server)
            .complete(&model(), &messages())
            .await
            .unwrap_err();

        assert_eq!(err, GatewayError::EmptyResponse);
    }

    #[tokio::test]
    async fn test_unparseable_body_is_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let err = gateway(&server)
            .complete(&model(), &messages())
            .await
            .unwrap_err();

        assert_eq!(err, GatewayError::EmptyResponse);
    }

    #[tokio::test]
    async fn test_empty_messages_rejected_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = gateway(&server).complete(&model(), &[]).await.unwrap_err();

        assert!(matches!(err, GatewayError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let gateway = OpenRouterGateway::new(
            ApiKey::try_new("k").unwrap(),
            "http://127.0.0.1:1",
            Some(Duration::from_secs(2)),
        )
        .unwrap();

        let err = gateway.complete(&model(), &messages()).await.unwrap_err();

        let message = match err {
            GatewayError::Transport(message) => message,
            other => panic!("expected a transport error, got {other:?}"),
        };
        // The connect failure underneath reqwest's message is kept
        assert!(message.contains("/chat/completions): "), "{message}");
    }
}
