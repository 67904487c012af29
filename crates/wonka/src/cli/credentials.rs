//! Credential and configuration file lookup.

use std::path::PathBuf;
use wonka_core::ProviderKind;

/// Environment variable holding the API key for a built-in provider.
fn credential_env_var(provider: &str) -> Option<&'static str> {
    let kind: ProviderKind = provider.parse().ok()?;
    Some(match kind {
        ProviderKind::Gemini => "GEMINI_API_KEY",
        ProviderKind::OpenAi => "OPENAI_API_KEY",
        ProviderKind::Groq => "GROQ_API_KEY",
        ProviderKind::Grok => "XAI_API_KEY",
        ProviderKind::Anthropic => "ANTHROPIC_API_KEY",
    })
}

/// Picks the explicit key, else the provider's environment variable, else
/// an empty string (which the gateway reports as a missing credential).
pub fn resolve_credential(provider: &str, explicit: Option<String>) -> String {
    explicit
        .or_else(|| credential_env_var(provider).and_then(|var| std::env::var(var).ok()))
        .unwrap_or_default()
}

/// `<config dir>/wonka/wonka.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wonka").join("wonka.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_names() {
        assert_eq!(credential_env_var("gemini"), Some("GEMINI_API_KEY"));
        assert_eq!(credential_env_var("OpenAI"), Some("OPENAI_API_KEY"));
        assert_eq!(credential_env_var("grok"), Some("XAI_API_KEY"));
        assert_eq!(credential_env_var("mistral"), None);
    }

    #[test]
    fn test_explicit_key_wins() {
        assert_eq!(
            resolve_credential("groq", Some("gsk-explicit".to_string())),
            "gsk-explicit"
        );
    }

    #[test]
    fn test_unknown_provider_has_no_credential() {
        assert_eq!(resolve_credential("mistral", None), "");
    }

    #[test]
    fn test_default_config_path_ends_with_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("wonka/wonka.toml"));
        }
    }
}
