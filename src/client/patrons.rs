//! Patrons resource: chance pattern search, CRUD, calculation, and the
//! redundancy analytics family.

use std::sync::Arc;

use chrono::NaiveDate;

use super::ApiClient;
use crate::errors::Result;
use crate::models::{Pattern, PatronRedundancy, RedundancyAnalysis};
use crate::utils::dates::format_date;

pub struct PatronsClient {
    api: Arc<ApiClient>,
}

impl PatronsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn search(&self, date: NaiveDate, jornada: &str) -> Result<Pattern> {
        self.api
            .get_json(&format!(
                "/patrons/Search?date={}&jornada={}",
                format_date(date),
                urlencoding::encode(jornada)
            ))
            .await
    }

    pub async fn search_by_fdg(&self, fdg: &str, jornada: &str) -> Result<Vec<Pattern>> {
        self.api
            .get_json(&format!(
                "/patrons/SearchByFDG?fdg={}&jornada={}",
                urlencoding::encode(fdg),
                urlencoding::encode(jornada)
            ))
            .await
    }

    pub async fn get_by_numbers(&self, numbers: &[u32]) -> Result<Vec<Pattern>> {
        self.api
            .post_json("/Patrons/GetPatronByNumbers", numbers)
            .await
    }

    pub async fn create(&self, pattern: &Pattern) -> Result<()> {
        self.api.post_json_discard("/patrons", pattern).await
    }

    pub async fn update(&self, id: i64, pattern: &Pattern) -> Result<()> {
        self.api.put_json(&format!("/patrons/{}", id), pattern).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("/patrons/{}", id)).await
    }

    /// Ask the server to (re)compute the pattern for one date+shift.
    pub async fn calculate(&self, date: NaiveDate, jornada: &str) -> Result<()> {
        self.api
            .post_empty(&format!(
                "/patrons/Calculate?date={}&jornada={}",
                format_date(date),
                urlencoding::encode(jornada)
            ))
            .await
    }

    /// Batch-generate patterns over a date span.
    pub async fn calculate_range(
        &self,
        date_init: NaiveDate,
        jornada_init: &str,
        date_final: NaiveDate,
        jornada_final: &str,
    ) -> Result<()> {
        self.api
            .post_empty(&format!(
                "/patrons/CalculateRange?dateInit={}&jornadaInit={}&dateFinal={}&jornadaFinal={}",
                format_date(date_init),
                urlencoding::encode(jornada_init),
                format_date(date_final),
                urlencoding::encode(jornada_final)
            ))
            .await
    }

    /// Patterns overlapping the given one, with overlap counts.
    pub async fn calculate_redundancy(&self, pattern: &Pattern) -> Result<Vec<PatronRedundancy>> {
        self.api
            .post_json("/patrons/CalculateRedundancy", pattern)
            .await
    }

    pub async fn redundancy_in_date(&self, date: NaiveDate) -> Result<Vec<Pattern>> {
        self.api
            .get_json(&format!(
                "/patrons/GetRedundancyinDate?date={}",
                format_date(date)
            ))
            .await
    }

    pub async fn numbers_not_played(&self, date: NaiveDate, jornada: &str) -> Result<Vec<String>> {
        self.api
            .get_json(&format!(
                "/patrons/GetNumbersNotPlayed?date={}&jornada={}",
                format_date(date),
                urlencoding::encode(jornada)
            ))
            .await
    }

    /// Patterns containing a zero slot within the day of pattern `id`.
    pub async fn void_in_day(&self, id: i64) -> Result<Vec<Pattern>> {
        self.api
            .get_json(&format!("/patrons/GetVoidinDay/{}", id))
            .await
    }

    pub async fn total_for_column(&self, date: NaiveDate, jornada: &str) -> Result<Vec<u32>> {
        self.api
            .get_json(&format!(
                "/patrons/GetTotalForColumn?date={}&jornada={}",
                format_date(date),
                urlencoding::encode(jornada)
            ))
            .await
    }

    /// Pairwise comparison: numbers in common plus tickets hitting 4 and
    /// 3 of them.
    pub async fn analyze_redundancy(
        &self,
        patron1_id: i64,
        patron2_id: i64,
    ) -> Result<RedundancyAnalysis> {
        self.api
            .get_json(&format!(
                "/Patrons/AnalyzePatternRedundancy?patron1Id={}&patron2Id={}",
                patron1_id, patron2_id
            ))
            .await
    }
}
