//! CLI interface module
//!
//! Dispatches clap-parsed commands to the per-resource command modules.

pub mod commands;

use std::fmt;

use crate::cli::Commands;
use crate::client::ApiClient;
use crate::config::get_config;
use crate::session::SessionStore;

#[derive(Debug)]
pub enum CliError {
    ApiError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ApiError(msg) => format!("API error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ApiError(msg) => {
                format!("{} {}", "API error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::ChancesError> for CliError {
    fn from(err: crate::errors::ChancesError) -> Self {
        match err {
            crate::errors::ChancesError::Validation(msg) => CliError::ParseError(msg),
            crate::errors::ChancesError::DateParse(msg) => CliError::ParseError(msg),
            other => CliError::ApiError(other.format_simple()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    // Config generate/show need no API client or session.
    let cmd = match cmd {
        Commands::Config { action } => return commands::config::run_config_command(action),
        other => other,
    };

    let config = get_config();
    let session = SessionStore::new(config.session.file.clone());
    session.load();
    let api = ApiClient::new(config, session).map_err(|e| CliError::ApiError(e.format_simple()))?;

    match cmd {
        Commands::Login {
            user_name,
            password,
        } => commands::auth::login(api, user_name, password).await,

        Commands::Register {
            user_name,
            password,
        } => commands::auth::register(api, user_name, password).await,

        Commands::Logout => commands::auth::logout(api),

        Commands::Tickets { action } => commands::tickets::run(api, action).await,

        Commands::Sorteos { action } => commands::sorteos::run(api, action).await,

        Commands::Patterns { action } => commands::patterns::run(api, action).await,

        Commands::SorteoPatterns { action } => commands::sorteo_patterns::run(api, action).await,

        Commands::Astro { action } => commands::astro::run(api, action).await,

        Commands::Config { .. } => unreachable!("handled above"),

        #[cfg(feature = "tui")]
        Commands::Tui => unreachable!("TUI handled in main"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChancesError;

    #[test]
    fn test_validation_error_maps_to_parse_error() {
        let err: CliError = ChancesError::validation("bad input").into();
        assert!(matches!(err, CliError::ParseError(_)));
    }

    #[test]
    fn test_api_error_maps_to_api_error() {
        let err: CliError = ChancesError::api("500: boom").into();
        match err {
            CliError::ApiError(msg) => assert!(msg.contains("boom")),
            other => panic!("expected ApiError, got: {:?}", other),
        }
    }
}
