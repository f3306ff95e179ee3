//! Ticket commands.

use std::path::Path;
use std::sync::Arc;

use colored::Colorize;

use super::helpers::print_ticket_table;
use crate::cli::TicketCommands;
use crate::client::{ApiClient, TicketsClient};
use crate::interfaces::cli::CliError;
use crate::models::Ticket;
use crate::utils::dates::parse_date;

pub async fn run(api: Arc<ApiClient>, action: TicketCommands) -> Result<(), CliError> {
    let client = TicketsClient::new(api);
    match action {
        TicketCommands::List => {
            let tickets = client.list().await?;
            print_ticket_table(&tickets);
        }

        TicketCommands::Search { number } => {
            let tickets = client.get_by_number(&number).await?;
            print_ticket_table(&tickets);
        }

        TicketCommands::ByDate { date, jornada } => {
            let date = parse_date(&date)?;
            let tickets = client.get_by_date(date, &jornada).await?;
            print_ticket_table(&tickets);
        }

        TicketCommands::Add {
            number,
            date,
            loteria,
            jornada,
            sign,
        } => {
            let mut ticket = Ticket {
                id: 0,
                number,
                date: parse_date(&date)?,
                loteria,
                jornada,
                sign,
            };
            ticket.validate()?;
            client.create(&ticket).await?;
            println!("{} Ticket added", "✓".bold().green());
        }

        TicketCommands::Update {
            id,
            number,
            date,
            loteria,
            jornada,
            sign,
        } => {
            let mut ticket = Ticket {
                id,
                number,
                date: parse_date(&date)?,
                loteria,
                jornada,
                sign,
            };
            ticket.validate()?;
            client.update(id, &ticket).await?;
            println!("{} Ticket {} updated", "✓".bold().green(), id);
        }

        TicketCommands::Rm { id } => {
            client.delete(id).await?;
            println!("{} Ticket {} deleted", "✓".bold().green(), id);
        }

        TicketCommands::Upload { file } => {
            client.upload(Path::new(&file)).await?;
            println!("{} Uploaded {}", "✓".bold().green(), file.cyan());
        }
    }
    Ok(())
}
