//! Shared table and bar-chart printing for CLI output.

use colored::Colorize;

use crate::models::{Pattern, Sorteo, SorteoPattern, Ticket};
use crate::utils::colors::bar_percent;

/// Width of the longest ASCII bar.
const BAR_WIDTH: usize = 40;

pub fn print_ticket_table(tickets: &[Ticket]) {
    if tickets.is_empty() {
        println!("{} No tickets found", "ℹ".bold().blue());
        return;
    }
    println!(
        "{:<8} {:<10} {:<12} {:<16} {:<8} {}",
        "ID".bold(),
        "Number".bold(),
        "Date".bold(),
        "Loteria".bold(),
        "Jornada".bold(),
        "Sign".bold()
    );
    for t in tickets {
        println!(
            "{:<8} {:<10} {:<12} {:<16} {:<8} {}",
            t.id,
            t.number.cyan(),
            t.date,
            t.loteria,
            t.jornada,
            t.sign.as_deref().unwrap_or("-")
        );
    }
    println!();
    println!(
        "{} Total {} tickets",
        "ℹ".bold().blue(),
        tickets.len().to_string().green()
    );
}

pub fn print_sorteo_table(sorteos: &[Sorteo]) {
    if sorteos.is_empty() {
        println!("{} No draws found", "ℹ".bold().blue());
        return;
    }
    println!(
        "{:<8} {:<10} {:<8} {:<12} {}",
        "ID".bold(),
        "Number".bold(),
        "Serie".bold(),
        "Date".bold(),
        "Loteria".bold()
    );
    for s in sorteos {
        println!(
            "{:<8} {:<10} {:<8} {:<12} {}",
            s.id,
            s.number.cyan(),
            s.serie,
            s.date,
            s.loteria
        );
    }
    println!();
    println!(
        "{} Total {} draws",
        "ℹ".bold().blue(),
        sorteos.len().to_string().green()
    );
}

/// Horizontal bar chart, one labeled row per slot, scaled to the max.
pub fn print_histogram(labels: &[String], values: &[u32]) {
    let max = values.iter().copied().max().unwrap_or(0);
    for (label, &value) in labels.iter().zip(values) {
        let width = bar_percent(value, max) as usize * BAR_WIDTH / 100;
        println!(
            "  {:>12} {:<width$} {}",
            label.dimmed(),
            "█".repeat(width).cyan(),
            value,
            width = BAR_WIDTH
        );
    }
}

pub fn digit_labels() -> Vec<String> {
    (0..10).map(|d| d.to_string()).collect()
}

pub fn print_pattern(pattern: &Pattern) {
    println!(
        "{} {} {}  fdg: {}",
        "Pattern".bold().green(),
        pattern.date,
        pattern.jornada,
        pattern.fdg.as_deref().unwrap_or("-")
    );
    print_histogram(&digit_labels(), &pattern.patron_numbers);
}

pub fn print_sorteo_pattern(pattern: &SorteoPattern) {
    println!("{} {}", "Sorteo pattern".bold().green(), pattern.date);
    print_histogram(&digit_labels(), &pattern.patron_numbers);
}

pub fn print_pattern_row(pattern: &Pattern) {
    println!(
        "  {:<8} {:<12} {:<8} {:?}  fdg: {}",
        pattern.id.map_or("-".to_string(), |id| id.to_string()),
        pattern.date.to_string(),
        pattern.jornada,
        pattern.patron_numbers,
        pattern.fdg.as_deref().unwrap_or("-")
    );
}

pub fn print_sorteo_pattern_row(pattern: &SorteoPattern) {
    println!(
        "  {:<8} {:<12} {:?}",
        pattern.id.map_or("-".to_string(), |id| id.to_string()),
        pattern.date.to_string(),
        pattern.patron_numbers
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_labels_cover_all_slots() {
        let labels = digit_labels();
        assert_eq!(labels.len(), 10);
        assert_eq!(labels[0], "0");
        assert_eq!(labels[9], "9");
    }
}
