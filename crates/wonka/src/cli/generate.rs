//! Generate command handler.

use super::{GenerateArgs, resolve_credential};
use anyhow::Context;
use std::path::Path;
use tracing::{info, instrument};
use wonka_core::{GenerationRequest, Message, ProviderDescriptor, Role};
use wonka_gateway::Gateway;

/// Handles the generate command.
///
/// A failed generation is printed like any other result; only unreadable
/// input files and unwritable output files are errors here.
#[instrument(skip_all, fields(provider = %args.provider, model = %args.model))]
pub async fn handle_generate_command(gateway: &Gateway, args: GenerateArgs) -> anyhow::Result<()> {
    let history = match &args.history {
        Some(path) => read_history(path)?,
        None => Vec::new(),
    };

    let request = GenerationRequest::builder()
        .system_instructions(args.system)
        .history(history)
        .user_prompt(args.prompt)
        .structured_output(args.structured)
        .build()
        .context("Failed to build generation request")?;

    let credential = resolve_credential(&args.provider, args.api_key);
    let descriptor = ProviderDescriptor::builder()
        .name(args.provider)
        .credential(credential)
        .base_url(args.base_url)
        .model(args.model)
        .build()
        .context("Failed to build provider descriptor")?;

    let result = gateway.generate(&descriptor, &request).await;
    let rendered = result.to_plain_text();
    println!("{}", rendered);

    if let Some(path) = &args.output {
        std::fs::write(path, format!("{}\n", rendered))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(output = %path.display(), "Wrote result");
    }

    Ok(())
}

fn read_history(path: &Path) -> anyhow::Result<Vec<Message>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read history file {}", path.display()))?;
    let history: Vec<Message> = serde_json::from_str(&contents)
        .with_context(|| format!("History file {} is not a JSON message list", path.display()))?;

    // System text belongs in --system, not in prior turns
    if let Some(index) = history.iter().position(|m| *m.role() == Role::System) {
        anyhow::bail!(
            "History file {} has a system entry at index {}; use --system instead",
            path.display(),
            index
        );
    }

    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_history() {
        let path = std::env::temp_dir().join(format!("wonka-history-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"role": "user", "content": "Hi"}, {"role": "assistant", "content": "Hello"}]"#,
        )
        .expect("write");

        let history = read_history(&path).expect("valid history");
        let _ = std::fs::remove_file(&path);

        assert_eq!(history.len(), 2);
        assert_eq!(*history[1].role(), Role::Assistant);
    }

    #[test]
    fn test_read_history_rejects_garbage() {
        let path =
            std::env::temp_dir().join(format!("wonka-history-bad-{}.json", std::process::id()));
        std::fs::write(&path, "not json").expect("write");

        let err = read_history(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        assert!(err.to_string().contains("not a JSON message list"));
    }

    #[test]
    fn test_read_history_rejects_system_entries() {
        let path =
            std::env::temp_dir().join(format!("wonka-history-system-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"role": "user", "content": "Hi"}, {"role": "system", "content": "Obey"}]"#,
        )
        .expect("write");

        let err = read_history(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        assert!(err.to_string().contains("system entry at index 1"));
    }
}
