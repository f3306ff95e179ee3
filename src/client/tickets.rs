//! Tickets resource: chance ticket CRUD, lookups, and spreadsheet upload.

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;

use super::ApiClient;
use crate::errors::Result;
use crate::models::Ticket;
use crate::utils::dates::format_date;

pub struct TicketsClient {
    api: Arc<ApiClient>,
}

impl TicketsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Ticket>> {
        self.api.get_json("/tickets").await
    }

    pub async fn get_by_number(&self, number: &str) -> Result<Vec<Ticket>> {
        self.api
            .get_json(&format!(
                "/Tickets/GetTicketByNumber/{}",
                urlencoding::encode(number)
            ))
            .await
    }

    pub async fn get_by_date(&self, date: NaiveDate, jornada: &str) -> Result<Vec<Ticket>> {
        self.api
            .get_json(&format!(
                "/Tickets/GetTicketByDate?date={}&jornada={}",
                format_date(date),
                urlencoding::encode(jornada)
            ))
            .await
    }

    /// Astro tickets for a draw window; used by the astro screen.
    pub async fn get_astro_by_date(&self, date: NaiveDate, jornada: &str) -> Result<Vec<Ticket>> {
        self.api
            .get_json(&format!(
                "/Tickets/GetAstroTicketByDate?date={}&jornada={}",
                format_date(date),
                urlencoding::encode(jornada)
            ))
            .await
    }

    pub async fn create(&self, ticket: &Ticket) -> Result<()> {
        self.api.post_json_discard("/tickets", ticket).await
    }

    pub async fn update(&self, id: i64, ticket: &Ticket) -> Result<()> {
        self.api.put_json(&format!("/tickets/{}", id), ticket).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("/tickets/{}", id)).await
    }

    pub async fn upload(&self, file: &Path) -> Result<()> {
        self.api.upload_file("/Tickets/upload", file).await
    }
}
