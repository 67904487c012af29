//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the wonka binary.

mod commands;
mod credentials;
mod generate;
mod models;

pub use commands::{Cli, Commands, GenerateArgs, ModelsArgs};
pub use credentials::{default_config_path, resolve_credential};
pub use generate::handle_generate_command;
pub use models::{handle_models_command, handle_providers_command};
