//! Chance pattern commands, including the analytics family.

use std::sync::Arc;

use colored::Colorize;

use super::helpers::{print_histogram, print_pattern, print_pattern_row, print_ticket_table};
use crate::cli::PatternCommands;
use crate::client::{ApiClient, PatronsClient};
use crate::interfaces::cli::CliError;
use crate::models::Pattern;
use crate::utils::dates::parse_date;

pub async fn run(api: Arc<ApiClient>, action: PatternCommands) -> Result<(), CliError> {
    let client = PatronsClient::new(api);
    match action {
        PatternCommands::Search { date, jornada } => {
            let pattern = client.search(parse_date(&date)?, &jornada).await?;
            print_pattern(&pattern);
        }

        PatternCommands::Fdg { fdg, jornada } => {
            let patterns = client.search_by_fdg(&fdg, &jornada).await?;
            print_pattern_list(&patterns);
        }

        PatternCommands::ByNumbers { numbers } => {
            let patterns = client.get_by_numbers(&numbers).await?;
            print_pattern_list(&patterns);
        }

        PatternCommands::Calculate { date, jornada } => {
            client.calculate(parse_date(&date)?, &jornada).await?;
            println!("{} Calculation requested", "✓".bold().green());
        }

        PatternCommands::Range {
            date_init,
            jornada_init,
            date_final,
            jornada_final,
        } => {
            client
                .calculate_range(
                    parse_date(&date_init)?,
                    &jornada_init,
                    parse_date(&date_final)?,
                    &jornada_final,
                )
                .await?;
            println!("{} Range calculation requested", "✓".bold().green());
        }

        PatternCommands::Redundancy { date, jornada } => {
            let date = parse_date(&date)?;
            let pattern = client.search(date, &jornada).await?;
            let redundancy = client.calculate_redundancy(&pattern).await?;
            print_pattern(&pattern);
            println!();
            println!("{}", "Concurrencia:".bold().green());
            for entry in &redundancy {
                println!(
                    "  {:<12} {:<8} overlaps: {}",
                    entry.patron.date.to_string(),
                    entry.patron.jornada,
                    entry.redundancy_count.to_string().cyan()
                );
            }
        }

        PatternCommands::InDate { date } => {
            let patterns = client.redundancy_in_date(parse_date(&date)?).await?;
            print_pattern_list(&patterns);
        }

        PatternCommands::NotPlayed { date, jornada } => {
            let numbers = client
                .numbers_not_played(parse_date(&date)?, &jornada)
                .await?;
            if numbers.is_empty() {
                println!("{} Every number played", "ℹ".bold().blue());
            } else {
                println!("{}", "Numbers not played:".bold().green());
                println!("  {}", numbers.join(", "));
            }
        }

        PatternCommands::Void { id } => {
            let patterns = client.void_in_day(id).await?;
            print_pattern_list(&patterns);
        }

        PatternCommands::Columns { date, jornada } => {
            let totals = client.total_for_column(parse_date(&date)?, &jornada).await?;
            println!("{}", "Column totals:".bold().green());
            print_histogram(&super::helpers::digit_labels(), &totals);
        }

        PatternCommands::Analyze {
            patron1_id,
            patron2_id,
        } => {
            let analysis = client.analyze_redundancy(patron1_id, patron2_id).await?;
            print_pattern(&analysis.patron);
            println!();
            println!(
                "{} {:?}",
                "Numbers in common:".bold().green(),
                analysis.numbers_to_search
            );
            println!();
            println!("{}", "Tickets with 4 coincidences:".bold().green());
            print_ticket_table(&analysis.tickets_con4_coincidencias);
            println!();
            println!("{}", "Tickets with 3 coincidences:".bold().green());
            print_ticket_table(&analysis.tickets_con3_coincidencias);
        }

        PatternCommands::Add {
            date,
            jornada,
            numbers,
        } => {
            let pattern = Pattern {
                id: None,
                date: parse_date(&date)?,
                jornada,
                patron_numbers: numbers,
                fdg: None,
            };
            client.create(&pattern).await?;
            println!("{} Pattern added", "✓".bold().green());
        }

        PatternCommands::Update {
            id,
            date,
            jornada,
            numbers,
        } => {
            let pattern = Pattern {
                id: Some(id),
                date: parse_date(&date)?,
                jornada,
                patron_numbers: numbers,
                fdg: None,
            };
            client.update(id, &pattern).await?;
            println!("{} Pattern {} updated", "✓".bold().green(), id);
        }

        PatternCommands::Rm { id } => {
            client.delete(id).await?;
            println!("{} Pattern {} deleted", "✓".bold().green(), id);
        }
    }
    Ok(())
}

fn print_pattern_list(patterns: &[Pattern]) {
    if patterns.is_empty() {
        println!("{} No patterns found", "ℹ".bold().blue());
        return;
    }
    for pattern in patterns {
        print_pattern_row(pattern);
    }
    println!();
    println!(
        "{} Total {} patterns",
        "ℹ".bold().blue(),
        patterns.len().to_string().green()
    );
}
