//! Sorteo pattern commands; the chance family without the jornada axis.

use std::sync::Arc;

use colored::Colorize;

use super::helpers::{digit_labels, print_histogram, print_sorteo_pattern, print_sorteo_pattern_row};
use crate::cli::SorteoPatternCommands;
use crate::client::{ApiClient, SorteoPatronsClient};
use crate::interfaces::cli::CliError;
use crate::models::SorteoPattern;
use crate::utils::dates::parse_date;

pub async fn run(api: Arc<ApiClient>, action: SorteoPatternCommands) -> Result<(), CliError> {
    let client = SorteoPatronsClient::new(api);
    match action {
        SorteoPatternCommands::Search { date } => {
            let pattern = client.search(parse_date(&date)?).await?;
            print_sorteo_pattern(&pattern);
        }

        SorteoPatternCommands::Calculate { date } => {
            client.calculate(parse_date(&date)?).await?;
            println!("{} Calculation requested", "✓".bold().green());
        }

        SorteoPatternCommands::Range {
            date_init,
            date_final,
        } => {
            client
                .calculate_range(parse_date(&date_init)?, parse_date(&date_final)?)
                .await?;
            println!("{} Range calculation requested", "✓".bold().green());
        }

        SorteoPatternCommands::Redundancy { date } => {
            let pattern = client.search(parse_date(&date)?).await?;
            let redundancy = client.calculate_redundancy(&pattern).await?;
            print_sorteo_pattern(&pattern);
            println!();
            println!("{}", "Concurrencia:".bold().green());
            for entry in &redundancy {
                println!(
                    "  {:<12} overlaps: {}",
                    entry.patron.date.to_string(),
                    entry.redundancy_count.to_string().cyan()
                );
            }
        }

        SorteoPatternCommands::InDate { date } => {
            let patterns = client.redundancy_in_date(parse_date(&date)?).await?;
            print_list(&patterns);
        }

        SorteoPatternCommands::NotPlayed { date } => {
            let numbers = client.numbers_not_played(parse_date(&date)?).await?;
            if numbers.is_empty() {
                println!("{} Every number played", "ℹ".bold().blue());
            } else {
                println!("{}", "Numbers not played:".bold().green());
                println!("  {}", numbers.join(", "));
            }
        }

        SorteoPatternCommands::Void { id } => {
            let patterns = client.void_in_day(id).await?;
            print_list(&patterns);
        }

        SorteoPatternCommands::Columns { date } => {
            let totals = client.total_for_column(parse_date(&date)?).await?;
            println!("{}", "Column totals:".bold().green());
            print_histogram(&digit_labels(), &totals);
        }

        SorteoPatternCommands::Rm { id } => {
            client.delete(id).await?;
            println!("{} Pattern {} deleted", "✓".bold().green(), id);
        }
    }
    Ok(())
}

fn print_list(patterns: &[SorteoPattern]) {
    if patterns.is_empty() {
        println!("{} No patterns found", "ℹ".bold().blue());
        return;
    }
    for pattern in patterns {
        print_sorteo_pattern_row(pattern);
    }
    println!();
    println!(
        "{} Total {} patterns",
        "ℹ".bold().blue(),
        patterns.len().to_string().green()
    );
}
