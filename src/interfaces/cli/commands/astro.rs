//! Astro histogram commands.

use std::sync::Arc;

use colored::Colorize;

use super::helpers::{digit_labels, print_histogram};
use crate::cli::AstroCommands;
use crate::client::{ApiClient, AstroClient};
use crate::interfaces::cli::CliError;
use crate::models::ZODIAC_SIGNS;
use crate::utils::dates::parse_date;

pub async fn run(api: Arc<ApiClient>, action: AstroCommands) -> Result<(), CliError> {
    let client = AstroClient::new(api);
    match action {
        AstroCommands::Show { date, jornada } => {
            let astro = client.get_by_date(parse_date(&date)?, &jornada).await?;
            println!(
                "{} {} {}",
                "Astro pattern".bold().green(),
                astro.date,
                astro.jornada
            );
            println!();
            println!("{}", "Sign frequencies:".bold());
            let sign_labels: Vec<String> =
                ZODIAC_SIGNS.iter().map(|s| s.to_string()).collect();
            print_histogram(&sign_labels, &astro.sign);
            println!();
            println!("{}", "Row frequencies:".bold());
            for (label, row) in [
                ("Row 1", &astro.row1),
                ("Row 2", &astro.row2),
                ("Row 3", &astro.row3),
                ("Row 4", &astro.row4),
            ] {
                println!("{}", label.dimmed());
                print_histogram(&digit_labels(), row);
            }
        }

        AstroCommands::Calculate { date, jornada } => {
            client.calculate(parse_date(&date)?, &jornada).await?;
            println!("{} Calculation requested", "✓".bold().green());
        }
    }
    Ok(())
}
