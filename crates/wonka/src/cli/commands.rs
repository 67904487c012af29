//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Generate team-building event concepts with hosted LLMs.
#[derive(Parser, Debug)]
#[command(name = "wonka")]
#[command(about = "Generate team-building event concepts with hosted LLMs")]
#[command(version)]
pub struct Cli {
    /// Path to the gateway configuration file
    #[arg(short, long, global = true, env = "WONKA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one generation call and print the result
    Generate(GenerateArgs),

    /// List the models a credential can use
    Models(ModelsArgs),

    /// List the built-in provider names
    Providers,
}

/// Arguments for `wonka generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Provider name (gemini, openai, groq, grok, anthropic)
    #[arg(short, long)]
    pub provider: String,

    /// Model identifier
    #[arg(short, long)]
    pub model: String,

    /// System instructions
    #[arg(short, long, default_value = "")]
    pub system: String,

    /// JSON file holding prior turns as `[{"role": "user", "content": "..."}]`
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Ask for a list of title/description items
    #[arg(long)]
    pub structured: bool,

    /// Endpoint override for this call
    #[arg(long)]
    pub base_url: Option<String>,

    /// API key; defaults to the provider's environment variable
    #[arg(long)]
    pub api_key: Option<String>,

    /// Also write the plain-text rendering to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// The prompt
    pub prompt: String,
}

/// Arguments for `wonka models`.
#[derive(Args, Debug)]
pub struct ModelsArgs {
    /// Provider name
    #[arg(short, long)]
    pub provider: String,

    /// Endpoint override
    #[arg(long)]
    pub base_url: Option<String>,

    /// API key; defaults to the provider's environment variable
    #[arg(long)]
    pub api_key: Option<String>,
}
