//! The provider invocation gateway.

use crate::{GatewayConfig, HistoryRetention, ProviderRegistry, decode_items};
use tracing::{debug, error, instrument, warn};
use wonka_core::{
    Failure, FailureKind, GenerationRequest, GenerationResult, ProviderDescriptor, StructuredItem,
};
use wonka_error::{ProviderError, ProviderErrorKind, ProviderResult};

/// Roster entry returned when discovery is attempted without a credential.
pub const ENTER_API_KEY: &str = "Enter an API key first";

/// Dispatches generation requests to registered providers.
///
/// Immutable after construction; share it behind an `Arc` across tasks.
#[derive(Debug, Clone)]
pub struct Gateway {
    registry: ProviderRegistry,
    retention: HistoryRetention,
}

impl Gateway {
    /// Creates a gateway over an explicit registry.
    pub fn new(registry: ProviderRegistry, retention: HistoryRetention) -> Self {
        Self {
            registry,
            retention,
        }
    }

    /// Creates a gateway with every built-in provider.
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(
            ProviderRegistry::with_defaults(config),
            config.history.retention,
        )
    }

    /// Returns the provider registry.
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Runs one generation call.
    ///
    /// Never fails: provider errors come back as [`GenerationResult::Failure`]
    /// in text mode and as a single placeholder item in structured mode.
    /// Structured mode always yields at least one item.
    #[instrument(
        skip(self, descriptor, request),
        fields(
            provider = %descriptor.name(),
            model = %descriptor.model(),
            structured = *request.structured_output()
        )
    )]
    pub async fn generate(
        &self,
        descriptor: &ProviderDescriptor,
        request: &GenerationRequest,
    ) -> GenerationResult {
        let structured = *request.structured_output();

        match self.complete(descriptor, request).await {
            Ok(raw) if structured => GenerationResult::StructuredList(decode_items(&raw)),
            Ok(raw) => {
                debug!(chars = raw.len(), "Received completion");
                GenerationResult::Text(raw)
            }
            Err(e) => degrade(&e, structured),
        }
    }

    async fn complete(
        &self,
        descriptor: &ProviderDescriptor,
        request: &GenerationRequest,
    ) -> ProviderResult<String> {
        if descriptor.has_blank_credential() {
            return Err(ProviderError::new(ProviderErrorKind::MissingCredential));
        }
        if request.user_prompt().trim().is_empty() {
            return Err(ProviderError::new(ProviderErrorKind::InvalidRequest(
                "The prompt is empty".to_string(),
            )));
        }

        let provider = self.registry.get(descriptor.name()).ok_or_else(|| {
            ProviderError::new(ProviderErrorKind::UnsupportedProvider(
                descriptor.name().clone(),
            ))
        })?;

        let history = self.retention.apply(request.history());
        let messages = request.compose_with(history);

        debug!(
            history = history.len(),
            messages = messages.len(),
            "Composed conversation"
        );

        provider.invoke(descriptor, &messages).await
    }

    /// Lists the models a credential can use with the named provider.
    ///
    /// Never fails: a blank credential yields [`ENTER_API_KEY`], an unknown
    /// provider or a listing error yields a single `Error: …` entry.
    #[instrument(skip(self, credential))]
    pub async fn list_models(
        &self,
        name: &str,
        credential: &str,
        base_url: Option<&str>,
    ) -> Vec<String> {
        if credential.trim().is_empty() {
            return vec![ENTER_API_KEY.to_string()];
        }

        let Some(provider) = self.registry.get(name) else {
            warn!("Roster requested for unknown provider");
            return vec![format!("Error: unsupported provider '{}'", name)];
        };

        match provider.list_models(credential, base_url).await {
            Ok(models) => models,
            Err(e) => {
                warn!(error = %e, "Model listing failed");
                vec![format!("Error: {}", e.kind)]
            }
        }
    }
}

/// Maps a provider error onto the result-level taxonomy.
fn classify(kind: &ProviderErrorKind) -> FailureKind {
    match kind {
        ProviderErrorKind::PolicyRejected { .. } => FailureKind::PolicyRejected,
        ProviderErrorKind::MissingCredential => FailureKind::InvalidCredential,
        ProviderErrorKind::UnsupportedProvider(_) | ProviderErrorKind::InvalidRequest(_) => {
            FailureKind::InvalidRequest
        }
        ProviderErrorKind::Http(_)
        | ProviderErrorKind::Authentication { .. }
        | ProviderErrorKind::RateLimited(_)
        | ProviderErrorKind::Api { .. }
        | ProviderErrorKind::ResponseParsing(_) => FailureKind::Transport,
    }
}

fn degrade(err: &ProviderError, structured: bool) -> GenerationResult {
    let kind = classify(&err.kind);
    let detail = match &err.kind {
        ProviderErrorKind::PolicyRejected { reason } => reason.clone(),
        other => other.to_string(),
    };

    match kind {
        FailureKind::PolicyRejected => warn!(reason = %detail, "Provider refused the request"),
        _ => error!(error = %err, failure = %kind, "Generation failed"),
    }

    if structured {
        GenerationResult::StructuredList(vec![StructuredItem::placeholder(kind, detail)])
    } else {
        GenerationResult::Failure(Failure::new(kind, detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let cases = [
            (
                ProviderErrorKind::PolicyRejected {
                    reason: "SAFETY".to_string(),
                },
                FailureKind::PolicyRejected,
            ),
            (
                ProviderErrorKind::MissingCredential,
                FailureKind::InvalidCredential,
            ),
            (
                ProviderErrorKind::UnsupportedProvider("mistral".to_string()),
                FailureKind::InvalidRequest,
            ),
            (
                ProviderErrorKind::from_status(401, "bad key"),
                FailureKind::Transport,
            ),
            (
                ProviderErrorKind::from_status(429, "slow down"),
                FailureKind::Transport,
            ),
            (
                ProviderErrorKind::ResponseParsing("eof".to_string()),
                FailureKind::Transport,
            ),
        ];

        for (kind, expected) in cases {
            assert_eq!(classify(&kind), expected, "{}", kind);
        }
    }

    #[test]
    fn test_degrade_text_mode_carries_reason() {
        let err = ProviderError::new(ProviderErrorKind::PolicyRejected {
            reason: "SAFETY".to_string(),
        });
        let result = degrade(&err, false);
        let failure = result.failure().expect("failure");
        assert_eq!(*failure.kind(), FailureKind::PolicyRejected);
        assert_eq!(failure.detail(), "SAFETY");
    }

    #[test]
    fn test_degrade_structured_mode_is_placeholder() {
        let err = ProviderError::new(ProviderErrorKind::Http("connection refused".to_string()));
        let result = degrade(&err, true);
        let items = result.items().expect("list");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].placeholder_kind(), Some(FailureKind::Transport));
        assert!(items[0].description().contains("connection refused"));
    }
}
