//! Model and provider listing handlers.

use super::{ModelsArgs, resolve_credential};
use tracing::instrument;
use wonka_gateway::Gateway;

/// Handles the models command, printing one entry per line.
#[instrument(skip_all, fields(provider = %args.provider))]
pub async fn handle_models_command(gateway: &Gateway, args: ModelsArgs) -> anyhow::Result<()> {
    let credential = resolve_credential(&args.provider, args.api_key);
    let models = gateway
        .list_models(&args.provider, &credential, args.base_url.as_deref())
        .await;

    for model in models {
        println!("{}", model);
    }
    Ok(())
}

/// Handles the providers command.
pub fn handle_providers_command(gateway: &Gateway) {
    for name in gateway.registry().names() {
        println!("{}", name);
    }
}
