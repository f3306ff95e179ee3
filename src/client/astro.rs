//! AstroPatrons resource: zodiac-sign histograms per draw window.

use std::sync::Arc;

use chrono::NaiveDate;

use super::ApiClient;
use crate::errors::Result;
use crate::models::AstroPatron;
use crate::utils::dates::format_date;

pub struct AstroClient {
    api: Arc<ApiClient>,
}

impl AstroClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn get_by_date(&self, date: NaiveDate, jornada: &str) -> Result<AstroPatron> {
        self.api
            .get_json(&format!(
                "/AstroPatrons/Search?date={}&jornada={}",
                format_date(date),
                urlencoding::encode(jornada)
            ))
            .await
    }

    /// Trigger server-side (re)computation of the histogram.
    pub async fn calculate(&self, date: NaiveDate, jornada: &str) -> Result<()> {
        self.api
            .post_empty(&format!(
                "/AstroPatrons/Calculate?date={}&jornada={}",
                format_date(date),
                urlencoding::encode(jornada)
            ))
            .await
    }
}
