//! Mock API tests for the Anthropic provider.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wonka_core::{Message, ProviderDescriptor, ProviderKind};
use wonka_error::ProviderErrorKind;
use wonka_interface::TextGenerationProvider;
use wonka_models::{AnthropicProvider, DEFAULT_ANTHROPIC_MODELS};

fn descriptor(server: &MockServer) -> ProviderDescriptor {
    ProviderDescriptor::new(
        ProviderKind::Anthropic,
        "sk-ant-test",
        "claude-3-5-sonnet-latest",
    )
    .with_base_url(server.uri())
}

#[tokio::test]
async fn test_messages_request_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "sk-ant-test"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({
            "model": "claude-3-5-sonnet-latest",
            "max_tokens": 1024,
            "system": "Be terse.",
            "messages": [{
                "role": "user",
                "content": [{"type": "text", "text": "User: Hi\n\nAssistant: Hello\n\nUser: Ideas?"}]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [{"type": "text", "text": "Chocolate river rafting"}],
            "model": "claude-3-5-sonnet-latest",
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 12, "output_tokens": 5}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = AnthropicProvider::new().with_max_tokens(1024);
    let text = provider
        .invoke(
            &descriptor(&server),
            &[
                Message::system("Be terse."),
                Message::user("Hi"),
                Message::assistant("Hello"),
                Message::user("Ideas?"),
            ],
        )
        .await
        .expect("completion");

    assert_eq!(text, "Chocolate river rafting");
}

#[tokio::test]
async fn test_overloaded_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(529).set_body_json(json!({
            "type": "error",
            "error": {"type": "overloaded_error", "message": "Overloaded"}
        })))
        .mount(&server)
        .await;

    let err = AnthropicProvider::new()
        .invoke(&descriptor(&server), &[Message::user("Hi")])
        .await
        .unwrap_err();

    assert!(matches!(err.kind, ProviderErrorKind::Api { status: 529, .. }));
}

#[tokio::test]
async fn test_roster_is_configured_not_fetched() {
    let server = MockServer::start().await;

    let models = AnthropicProvider::new()
        .list_models("sk-ant-test", Some(&server.uri()))
        .await
        .expect("roster");
    assert_eq!(models.len(), DEFAULT_ANTHROPIC_MODELS.len());
    assert_eq!(models[0], "claude-3-5-sonnet-latest");

    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());

    let custom = AnthropicProvider::new()
        .with_known_models(vec!["claude-3-7-sonnet-latest".to_string()])
        .list_models("sk-ant-test", None)
        .await
        .expect("roster");
    assert_eq!(custom, vec!["claude-3-7-sonnet-latest"]);
}
