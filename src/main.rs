use clap::Parser;

use chances::cli::{Cli, Commands};
use chances::config;
use chances::interfaces::cli::run_cli_command;
use chances::system::logging::init_logging;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Some(url) = &cli.api_url {
        // The config loader treats this env var as its highest-priority
        // source, so the flag wins over file values.
        unsafe { std::env::set_var("CHANCES_API_URL", url) };
    }

    config::init_config();
    let _guard = init_logging(config::get_config());

    match cli.command {
        #[cfg(feature = "tui")]
        None | Some(Commands::Tui) => {
            if let Err(e) = chances::interfaces::tui::run_tui(config::get_config()).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
        #[cfg(not(feature = "tui"))]
        None => {
            eprintln!("no command given; run with --help for usage");
            std::process::exit(2);
        }
        Some(cmd) => {
            if let Err(e) = run_cli_command(cmd).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
    }
}
