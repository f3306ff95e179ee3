//! Command-line interface definitions using clap
//!
//! One subcommand family per API resource; no subcommand starts the TUI.

use clap::{Parser, Subcommand};

/// Chances - terminal client for the Chances/Loterías record-keeping API
#[derive(Parser)]
#[command(name = "chances")]
#[command(version)]
#[command(about = "Log draw results and browse pattern analytics", long_about = None)]
pub struct Cli {
    /// Override the API base URL for this invocation
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start interactive TUI mode (the default)
    #[cfg(feature = "tui")]
    Tui,

    /// Log in and persist the session
    Login {
        user_name: String,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Register a new operator account
    Register {
        user_name: String,

        #[arg(long)]
        password: Option<String>,
    },

    /// Forget the persisted session
    Logout,

    /// Chance tickets
    Tickets {
        #[command(subcommand)]
        action: TicketCommands,
    },

    /// Lottery draws
    Sorteos {
        #[command(subcommand)]
        action: SorteoCommands,
    },

    /// Chance patterns and their analytics
    Patterns {
        #[command(subcommand)]
        action: PatternCommands,
    },

    /// Sorteo patterns and their analytics
    SorteoPatterns {
        #[command(subcommand)]
        action: SorteoPatternCommands,
    },

    /// Astro histograms
    Astro {
        #[command(subcommand)]
        action: AstroCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum TicketCommands {
    /// List every ticket
    List,

    /// Server-side search by ticket number
    Search { number: String },

    /// Tickets for one date and shift
    ByDate {
        /// yyyy-MM-dd
        date: String,
        /// dia, tarde or noche
        jornada: String,
    },

    /// Add a ticket
    Add {
        number: String,
        /// yyyy-MM-dd
        date: String,
        loteria: String,
        jornada: String,
        /// Zodiac sign, required when loteria is Astro
        #[arg(long)]
        sign: Option<String>,
    },

    /// Update a ticket
    Update {
        id: i64,
        number: String,
        date: String,
        loteria: String,
        jornada: String,
        #[arg(long)]
        sign: Option<String>,
    },

    /// Delete a ticket
    Rm { id: i64 },

    /// Upload a spreadsheet of tickets
    Upload { file: String },
}

#[derive(Subcommand)]
pub enum SorteoCommands {
    /// List every draw
    List,

    /// Server-side search by number and/or serie
    Search {
        #[arg(long)]
        number: Option<String>,
        #[arg(long)]
        serie: Option<String>,
    },

    /// Draws for one date
    ByDate { date: String },

    /// Add a draw
    Add {
        number: String,
        serie: String,
        date: String,
        loteria: String,
    },

    /// Update a draw
    Update {
        id: i64,
        number: String,
        serie: String,
        date: String,
        loteria: String,
    },

    /// Delete a draw
    Rm { id: i64 },

    /// Upload a spreadsheet of draws
    Upload { file: String },
}

#[derive(Subcommand)]
pub enum PatternCommands {
    /// Pattern for one date and shift, with its histogram
    Search { date: String, jornada: String },

    /// Patterns matching an FDG value
    Fdg { fdg: String, jornada: String },

    /// Patterns matching a 10-slot histogram
    ByNumbers {
        /// Ten frequencies, digit 0 first
        #[arg(required = true, num_args = 10)]
        numbers: Vec<u32>,
    },

    /// Ask the server to (re)compute a pattern
    Calculate { date: String, jornada: String },

    /// Batch-compute patterns over a date span
    Range {
        date_init: String,
        jornada_init: String,
        date_final: String,
        jornada_final: String,
    },

    /// Overlap counts against the pattern at date+shift
    Redundancy { date: String, jornada: String },

    /// Patterns overlapping within one date
    InDate { date: String },

    /// Numbers not played for a date and shift
    NotPlayed { date: String, jornada: String },

    /// Patterns containing a zero slot in the day of pattern ID
    Void { id: i64 },

    /// Column totals for a date and shift
    Columns { date: String, jornada: String },

    /// Pairwise analysis between two patterns
    Analyze { patron1_id: i64, patron2_id: i64 },

    /// Create a pattern by hand
    Add {
        date: String,
        jornada: String,
        /// Ten frequencies, digit 0 first
        #[arg(required = true, num_args = 10)]
        numbers: Vec<u32>,
    },

    /// Update a pattern
    Update {
        id: i64,
        date: String,
        jornada: String,
        #[arg(required = true, num_args = 10)]
        numbers: Vec<u32>,
    },

    /// Delete a pattern
    Rm { id: i64 },
}

#[derive(Subcommand)]
pub enum SorteoPatternCommands {
    /// Pattern for one date
    Search { date: String },

    /// Ask the server to (re)compute a pattern
    Calculate { date: String },

    /// Batch-compute patterns over a date span
    Range {
        date_init: String,
        date_final: String,
    },

    /// Overlap counts against the pattern at date
    Redundancy { date: String },

    /// Patterns overlapping within one date
    InDate { date: String },

    /// Numbers not played for a date
    NotPlayed { date: String },

    /// Patterns containing a zero slot in the day of pattern ID
    Void { id: i64 },

    /// Column totals for a date
    Columns { date: String },

    /// Delete a pattern
    Rm { id: i64 },
}

#[derive(Subcommand)]
pub enum AstroCommands {
    /// Histogram for a date and shift (Sol or Luna)
    Show { date: String, jornada: String },

    /// Trigger server-side (re)computation
    Calculate { date: String, jornada: String },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate an example configuration file
    Generate {
        /// Output path (default: chances.example.toml)
        output_path: Option<String>,

        /// Overwrite without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_pattern_search() {
        let cli = Cli::parse_from(["chances", "patterns", "search", "2024-05-20", "dia"]);
        match cli.command {
            Some(Commands::Patterns {
                action: PatternCommands::Search { date, jornada },
            }) => {
                assert_eq!(date, "2024-05-20");
                assert_eq!(jornada, "dia");
            }
            _ => panic!("expected patterns search"),
        }
    }

    #[test]
    fn test_parse_pattern_by_numbers_requires_ten() {
        let err = Cli::try_parse_from(["chances", "patterns", "by-numbers", "1", "2", "3"]);
        assert!(err.is_err());

        let ok = Cli::try_parse_from([
            "chances",
            "patterns",
            "by-numbers",
            "3",
            "7",
            "1",
            "0",
            "5",
            "2",
            "9",
            "4",
            "6",
            "8",
        ]);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["chances"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_global_api_url_flag() {
        let cli = Cli::parse_from(["chances", "--api-url", "http://x/api", "tickets", "list"]);
        assert_eq!(cli.api_url.as_deref(), Some("http://x/api"));
    }
}
