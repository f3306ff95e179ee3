//! Sorteo commands.

use std::path::Path;
use std::sync::Arc;

use colored::Colorize;

use super::helpers::print_sorteo_table;
use crate::cli::SorteoCommands;
use crate::client::{ApiClient, SorteosClient};
use crate::interfaces::cli::CliError;
use crate::models::Sorteo;
use crate::utils::dates::parse_date;

pub async fn run(api: Arc<ApiClient>, action: SorteoCommands) -> Result<(), CliError> {
    let client = SorteosClient::new(api);
    match action {
        SorteoCommands::List => {
            let sorteos = client.list().await?;
            print_sorteo_table(&sorteos);
        }

        SorteoCommands::Search { number, serie } => {
            let sorteos = client.search(number.as_deref(), serie.as_deref()).await?;
            print_sorteo_table(&sorteos);
        }

        SorteoCommands::ByDate { date } => {
            let date = parse_date(&date)?;
            let sorteos = client.get_by_date(date).await?;
            print_sorteo_table(&sorteos);
        }

        SorteoCommands::Add {
            number,
            serie,
            date,
            loteria,
        } => {
            let sorteo = Sorteo {
                id: 0,
                number,
                serie,
                date: parse_date(&date)?,
                loteria,
            };
            sorteo.validate()?;
            client.create(&sorteo).await?;
            println!("{} Draw added", "✓".bold().green());
        }

        SorteoCommands::Update {
            id,
            number,
            serie,
            date,
            loteria,
        } => {
            let sorteo = Sorteo {
                id,
                number,
                serie,
                date: parse_date(&date)?,
                loteria,
            };
            sorteo.validate()?;
            client.update(id, &sorteo).await?;
            println!("{} Draw {} updated", "✓".bold().green(), id);
        }

        SorteoCommands::Rm { id } => {
            client.delete(id).await?;
            println!("{} Draw {} deleted", "✓".bold().green(), id);
        }

        SorteoCommands::Upload { file } => {
            client.upload(Path::new(&file)).await?;
            println!("{} Uploaded {}", "✓".bold().green(), file.cyan());
        }
    }
    Ok(())
}
