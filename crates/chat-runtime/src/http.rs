//! HTTP Chat Backend
//!
//! Implementation of `ChatBackend` against the `/chat_gen` endpoint.

use async_trait::async_trait;
use chat_core::{
    ChatBackend, ChatError, Result,
    wire::{ChatGenRequest, parse_reply},
};

use crate::config::EndpointConfig;

/// Backend that posts prompts to a `/chat_gen` endpoint
///
/// No timeout and no retry: a request lives until the transport gives up.
#[derive(Clone, Debug)]
pub struct HttpChatBackend {
    client: reqwest::Client,
    config: EndpointConfig,
}

impl HttpChatBackend {
    /// Create from configuration
    pub fn from_config(config: EndpointConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create against the default local endpoint
    pub fn localhost() -> Self {
        Self::from_config(EndpointConfig::default())
    }

    pub const fn config(&self) -> &EndpointConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl ChatBackend for HttpChatBackend {
    fn name(&self) -> &str {
        self.config.url()
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        // `.json()` also sets `Content-Type: application/json`
        let response = self
            .client
            .post(self.config.url())
            .json(&ChatGenRequest::new(prompt))
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        parse_reply(&body)
    }
}

#[cfg(test)]
mod tests {
    use chat_core::{ChatGenResponse, ChatState, Message, SubmitTrigger};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, header, method, path},
    };

    use super::*;

    fn backend_for(server: &MockServer) -> HttpChatBackend {
        let config = EndpointConfig::new(format!("{}/chat_gen", server.uri())).unwrap();
        HttpChatBackend::from_config(config)
    }

    #[tokio::test]
    async fn test_posts_prompt_and_reads_ans() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat_gen"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({ "prompt": " 안녕하세요 " })))
            .respond_with(ResponseTemplate::new(200).set_body_json(ChatGenResponse {
                ans: "Hello!".into(),
            }))
            .expect(1)
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        let reply = backend.generate(" 안녕하세요 ").await.unwrap();
        assert_eq!(reply, "Hello!");
    }

    #[tokio::test]
    async fn test_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = backend_for(&server).generate("hi").await.unwrap_err();
        assert!(matches!(err, ChatError::Status(503)));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_missing_ans_is_shape_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "answer": "hi" })),
            )
            .mount(&server)
            .await;

        let err = backend_for(&server).generate("hi").await.unwrap_err();
        assert!(matches!(err, ChatError::ResponseShape(_)));
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = backend_for(&server).generate("hi").await.unwrap_err();
        assert!(matches!(err, ChatError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = EndpointConfig::new(format!("http://127.0.0.1:{port}/chat_gen")).unwrap();

        let err = HttpChatBackend::from_config(config)
            .generate("hi")
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::Network(_)));
    }

    #[tokio::test]
    async fn test_full_exchange_updates_state() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat_gen"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ans": "네, 좋아요!" })),
            )
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        let mut state = ChatState::new();
        state.set_input("Can we practice?");

        let pending = state.submit(SubmitTrigger::Click).unwrap();
        assert_eq!(state.input().as_str(), "");
        let outcome = pending.deliver(&backend).await;
        state.settle(outcome);

        let messages = state.conversation().messages();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[2], Message::user("Can we practice?"));
        assert_eq!(messages[3], Message::bot("네, 좋아요!"));
    }

    #[tokio::test]
    async fn test_failed_exchange_leaves_conversation() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        let mut state = ChatState::new();
        state.set_input("Hello?");

        let pending = state.submit(SubmitTrigger::SubmitKey).unwrap();
        let len = state.conversation().len();
        let outcome = pending.deliver(&backend).await;

        assert!(!state.settle(outcome));
        assert_eq!(state.conversation().len(), len);
    }

    #[test]
    fn test_name_is_endpoint() {
        assert_eq!(HttpChatBackend::localhost().name(), "http://127.0.0.1:8000/chat_gen");
    }
}
