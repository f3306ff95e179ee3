//! SorteoPatrons resource: the pattern family over lottery draws.
//! Same shape as `PatronsClient` minus the jornada dimension.

use std::sync::Arc;

use chrono::NaiveDate;

use super::ApiClient;
use crate::errors::Result;
use crate::models::{SorteoPattern, SorteoPatronRedundancy};
use crate::utils::dates::format_date;

pub struct SorteoPatronsClient {
    api: Arc<ApiClient>,
}

impl SorteoPatronsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn search(&self, date: NaiveDate) -> Result<SorteoPattern> {
        self.api
            .get_json(&format!(
                "/SorteoPatrons/Search?date={}",
                format_date(date)
            ))
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("/SorteoPatrons/{}", id)).await
    }

    pub async fn calculate(&self, date: NaiveDate) -> Result<()> {
        self.api
            .post_empty(&format!(
                "/SorteoPatrons/Calculate?date={}",
                format_date(date)
            ))
            .await
    }

    pub async fn calculate_range(&self, date_init: NaiveDate, date_final: NaiveDate) -> Result<()> {
        self.api
            .post_empty(&format!(
                "/SorteoPatrons/CalculateRange?dateInit={}&dateFinal={}",
                format_date(date_init),
                format_date(date_final)
            ))
            .await
    }

    pub async fn calculate_redundancy(
        &self,
        pattern: &SorteoPattern,
    ) -> Result<Vec<SorteoPatronRedundancy>> {
        self.api
            .post_json("/SorteoPatrons/CalculateRedundancy", pattern)
            .await
    }

    pub async fn redundancy_in_date(&self, date: NaiveDate) -> Result<Vec<SorteoPattern>> {
        self.api
            .get_json(&format!(
                "/SorteoPatrons/GetRedundancyinDate?date={}",
                format_date(date)
            ))
            .await
    }

    pub async fn numbers_not_played(&self, date: NaiveDate) -> Result<Vec<String>> {
        self.api
            .get_json(&format!(
                "/SorteoPatrons/GetNumbersNotPlayed?date={}",
                format_date(date)
            ))
            .await
    }

    pub async fn void_in_day(&self, id: i64) -> Result<Vec<SorteoPattern>> {
        self.api
            .get_json(&format!("/SorteoPatrons/GetVoidinDay/{}", id))
            .await
    }

    pub async fn total_for_column(&self, date: NaiveDate) -> Result<Vec<u32>> {
        self.api
            .get_json(&format!(
                "/SorteoPatrons/GetTotalForColumn?date={}",
                format_date(date)
            ))
            .await
    }
}
