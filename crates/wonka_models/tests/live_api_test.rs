//! Live API smoke tests.
//!
//! Run with: cargo test --package wonka_models --features api -- --ignored

use std::env;
use wonka_core::{Message, ProviderDescriptor, ProviderKind};
use wonka_interface::TextGenerationProvider;
use wonka_models::{AnthropicProvider, GeminiProvider, OpenAICompatibleProvider};

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_gemini_simple_generation() {
    dotenvy::dotenv().ok();
    let api_key = env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set for API tests");

    let descriptor = ProviderDescriptor::new(ProviderKind::Gemini, api_key, "gemini-1.5-flash");
    let text = GeminiProvider::new()
        .invoke(&descriptor, &[Message::user("Say 'test' and nothing else.")])
        .await
        .expect("API call succeeded");

    assert!(!text.is_empty());
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_groq_list_models() {
    dotenvy::dotenv().ok();
    let api_key = env::var("GROQ_API_KEY").expect("GROQ_API_KEY must be set for API tests");

    let models = OpenAICompatibleProvider::groq()
        .list_models(&api_key, None)
        .await
        .expect("API call succeeded");

    assert!(!models.is_empty());
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_anthropic_simple_generation() {
    dotenvy::dotenv().ok();
    let api_key =
        env::var("ANTHROPIC_API_KEY").expect("ANTHROPIC_API_KEY must be set for API tests");

    let descriptor =
        ProviderDescriptor::new(ProviderKind::Anthropic, api_key, "claude-3-5-sonnet-latest");
    let text = AnthropicProvider::new()
        .invoke(
            &descriptor,
            &[Message::system("Be terse."), Message::user("Count to 3.")],
        )
        .await
        .expect("API call succeeded");

    assert!(!text.is_empty());
}
