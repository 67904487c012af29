//! End-to-end gateway calls against mocked vendor endpoints.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wonka_core::{
    FailureKind, GenerationRequest, GenerationResult, ProviderDescriptor, ProviderKind,
    StructuredItem,
};
use wonka_gateway::{Gateway, GatewayConfig};

fn gateway() -> Gateway {
    Gateway::from_config(&GatewayConfig::default())
}

#[tokio::test]
async fn test_gemini_block_is_policy_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&server)
        .await;

    let descriptor = ProviderDescriptor::new(ProviderKind::Gemini, "AIza-test", "gemini-1.5-pro")
        .with_base_url(server.uri());

    let result = gateway()
        .generate(&descriptor, &GenerationRequest::text("Something risky"))
        .await;

    let failure = result.failure().expect("failure");
    assert_eq!(*failure.kind(), FailureKind::PolicyRejected);
    assert_eq!(failure.detail(), "SAFETY");
}

#[tokio::test]
async fn test_groq_structured_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": "```json\n[{\"title\":\"A\",\"description\":\"d1\"},{\"title\":\"B\",\"description\":\"d2\"}]\n```"
                },
                "finish_reason": "stop"
            }]
        })))
        .mount(&server)
        .await;

    let descriptor = ProviderDescriptor::new(ProviderKind::Groq, "gsk-test", "llama3-70b-8192")
        .with_base_url(server.uri());
    let request = GenerationRequest::builder()
        .system_instructions("You plan team-building events.")
        .user_prompt("Two ideas")
        .structured_output(true)
        .build()
        .expect("valid request");

    let result = gateway().generate(&descriptor, &request).await;

    assert_eq!(
        result,
        GenerationResult::StructuredList(vec![
            StructuredItem::new("A", "d1"),
            StructuredItem::new("B", "d2"),
        ])
    );
}

#[tokio::test]
async fn test_rate_limit_is_transport_placeholder() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let descriptor =
        ProviderDescriptor::new(ProviderKind::Anthropic, "sk-ant-test", "claude-3-haiku-20240307")
            .with_base_url(server.uri());
    let request = GenerationRequest::builder()
        .user_prompt("Ideas")
        .structured_output(true)
        .build()
        .expect("valid request");

    let result = gateway().generate(&descriptor, &request).await;

    let items = result.items().expect("structured list");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].placeholder_kind(), Some(FailureKind::Transport));
}

#[tokio::test]
async fn test_configured_endpoint_is_used() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{"id": "grok-beta"}, {"id": "grok-2"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config =
        GatewayConfig::from_toml_str(&format!("[endpoints]\ngrok = \"{}\"", server.uri()))
            .expect("valid config");
    let gateway = Gateway::from_config(&config);

    let models = gateway.list_models("grok", "xai-test", None).await;
    assert_eq!(models, vec!["grok-beta", "grok-2"]);
}
