//! Configuration commands: sample generation and effective-config dump.

use std::path::Path;

use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::{AppConfig, get_config};
use crate::interfaces::cli::CliError;

pub fn run_config_command(action: ConfigCommands) -> Result<(), CliError> {
    match action {
        ConfigCommands::Generate { output_path, force } => generate(output_path, force),
        ConfigCommands::Show => show(),
    }
}

fn generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| "chances.example.toml".to_string());
    if Path::new(&path).exists() && !force {
        return Err(CliError::CommandError(format!(
            "{} already exists, use --force to overwrite",
            path
        )));
    }
    std::fs::write(&path, AppConfig::generate_sample_config())
        .map_err(|e| CliError::CommandError(format!("Failed to write {}: {}", path, e)))?;
    println!("{} Wrote sample config to {}", "✓".bold().green(), path.cyan());
    Ok(())
}

fn show() -> Result<(), CliError> {
    let config = get_config();
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| CliError::CommandError(format!("Failed to render config: {}", e)))?;
    print!("{}", rendered);
    Ok(())
}
