//! Name to provider implementation lookup.

use crate::GatewayConfig;
use std::collections::HashMap;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::debug;
use wonka_core::ProviderKind;
use wonka_interface::TextGenerationProvider;
use wonka_models::{AnthropicProvider, GeminiProvider, OpenAICompatibleProvider};

/// Registry of provider implementations keyed by lowercase name.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn TextGenerationProvider>>,
}

impl ProviderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in provider, configured from
    /// `config`.
    pub fn with_defaults(config: &GatewayConfig) -> Self {
        let mut registry = Self::new();
        for kind in ProviderKind::iter() {
            registry.register(kind, builtin(kind, config));
        }
        registry
    }

    /// Registers (or replaces) the implementation for `name`.
    pub fn register(&mut self, name: impl AsRef<str>, provider: Arc<dyn TextGenerationProvider>) {
        let name = name.as_ref().to_ascii_lowercase();
        debug!(provider = %name, "Registered provider");
        self.providers.insert(name, provider);
    }

    /// Looks up the implementation for `name`, ignoring case.
    pub fn get(&self, name: &str) -> Option<Arc<dyn TextGenerationProvider>> {
        self.providers.get(&name.to_ascii_lowercase()).cloned()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.names())
            .finish()
    }
}

fn builtin(kind: ProviderKind, config: &GatewayConfig) -> Arc<dyn TextGenerationProvider> {
    let endpoint = config.endpoint(kind.as_ref());

    match kind {
        // A configured OpenAI endpoint is some other server, so its listing
        // is not filtered down to chat models.
        ProviderKind::OpenAi => match endpoint {
            Some(url) => Arc::new(OpenAICompatibleProvider::new("openai", url)),
            None => Arc::new(OpenAICompatibleProvider::openai()),
        },
        ProviderKind::Groq => Arc::new(with_endpoint(OpenAICompatibleProvider::groq(), endpoint)),
        ProviderKind::Grok => Arc::new(with_endpoint(OpenAICompatibleProvider::grok(), endpoint)),
        ProviderKind::Gemini => {
            let provider = GeminiProvider::new();
            Arc::new(match endpoint {
                Some(url) => provider.with_base_url(url),
                None => provider,
            })
        }
        ProviderKind::Anthropic => {
            let provider = AnthropicProvider::new()
                .with_max_tokens(config.anthropic.max_tokens)
                .with_known_models(config.anthropic.known_models.clone());
            Arc::new(match endpoint {
                Some(url) => provider.with_base_url(url),
                None => provider,
            })
        }
    }
}

fn with_endpoint(
    provider: OpenAICompatibleProvider,
    endpoint: Option<&str>,
) -> OpenAICompatibleProvider {
    match endpoint {
        Some(url) => provider.with_base_url(url),
        None => provider,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_register_every_builtin() {
        let registry = ProviderRegistry::with_defaults(&GatewayConfig::default());
        assert_eq!(
            registry.names(),
            vec!["anthropic", "gemini", "grok", "groq", "openai"]
        );
    }

    #[test]
    fn test_lookup_ignores_case() {
        let registry = ProviderRegistry::with_defaults(&GatewayConfig::default());
        let provider = registry.get("OpenAI").expect("registered");
        assert_eq!(provider.provider_name(), "openai");
        assert!(registry.get("mistral").is_none());
    }

    #[test]
    fn test_debug_lists_names() {
        let registry = ProviderRegistry::with_defaults(&GatewayConfig::default());
        let debug = format!("{:?}", registry);
        assert!(debug.contains("gemini"));
    }
}
