//! Wonka - generate team-building concepts through hosted LLM APIs.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wonka_gateway::{Gateway, GatewayConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout only carries results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let config_path = args.config.clone().or_else(cli::default_config_path);
    info!(config_file = ?config_path, "Loading configuration");
    let config = GatewayConfig::load(config_path.as_deref())?;
    let gateway = Gateway::from_config(&config);

    match args.command {
        Commands::Generate(args) => cli::handle_generate_command(&gateway, args).await,
        Commands::Models(args) => cli::handle_models_command(&gateway, args).await,
        Commands::Providers => {
            cli::handle_providers_command(&gateway);
            Ok(())
        }
    }
}
