//! Error types for the Wonka provider gateway.
//!
//! Every error struct records the source location where it was created, so a
//! failure surfaced to the operator can be traced back without a backtrace.

mod config;
mod provider;
mod structured;

pub use config::{ConfigError, ConfigErrorKind};
pub use provider::{ProviderError, ProviderErrorKind, ProviderResult};
pub use structured::{StructuredError, StructuredErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum WonkaErrorKind {
    /// Provider invocation or roster discovery failed
    Provider(ProviderError),
    /// Structured output could not be decoded
    Structured(StructuredError),
    /// Configuration could not be loaded
    Config(ConfigError),
}

impl std::fmt::Display for WonkaErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WonkaErrorKind::Provider(e) => write!(f, "{}", e),
            WonkaErrorKind::Structured(e) => write!(f, "{}", e),
            WonkaErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Wonka error with kind discrimination.
#[derive(Debug)]
pub struct WonkaError(Box<WonkaErrorKind>);

impl WonkaError {
    /// Create a new error from a kind.
    pub fn new(kind: WonkaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &WonkaErrorKind {
        &self.0
    }
}

impl std::fmt::Display for WonkaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Wonka Error: {}", self.0)
    }
}

impl std::error::Error for WonkaError {}

impl<T> From<T> for WonkaError
where
    T: Into<WonkaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Wonka operations.
pub type WonkaResult<T> = std::result::Result<T, WonkaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_umbrella_error_wraps_config_error() {
        let err: WonkaError =
            ConfigError::new(ConfigErrorKind::Load("missing [anthropic] table".into())).into();
        assert!(matches!(err.kind(), WonkaErrorKind::Config(_)));
        assert!(err.to_string().starts_with("Wonka Error: Gateway Config Error"));
        assert!(err.to_string().contains("could not load configuration"));
    }

    #[test]
    fn test_umbrella_error_wraps_provider_error() {
        let err: WonkaError = ProviderError::new(ProviderErrorKind::MissingCredential).into();
        assert!(matches!(err.kind(), WonkaErrorKind::Provider(_)));
        assert!(err.to_string().contains("API key"));
    }
}
