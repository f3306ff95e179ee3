//! Sorteos resource: lottery draw CRUD, search, and spreadsheet upload.

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;

use super::ApiClient;
use crate::errors::{ChancesError, Result};
use crate::models::Sorteo;
use crate::utils::dates::format_date;

pub struct SorteosClient {
    api: Arc<ApiClient>,
}

impl SorteosClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Sorteo>> {
        self.api.get_json("/Sorteos").await
    }

    /// Server-side search by number and/or serie. At least one criterion
    /// must be supplied.
    pub async fn search(&self, number: Option<&str>, serie: Option<&str>) -> Result<Vec<Sorteo>> {
        let mut params = Vec::new();
        if let Some(number) = number.filter(|n| !n.trim().is_empty()) {
            params.push(format!("number={}", urlencoding::encode(number.trim())));
        }
        if let Some(serie) = serie.filter(|s| !s.trim().is_empty()) {
            params.push(format!("serie={}", urlencoding::encode(serie.trim())));
        }
        if params.is_empty() {
            return Err(ChancesError::validation(
                "search needs a number or a serie",
            ));
        }
        self.api
            .get_json(&format!(
                "/Sorteos/GetSorteoByNumber?{}",
                params.join("&")
            ))
            .await
    }

    pub async fn get_by_date(&self, date: NaiveDate) -> Result<Vec<Sorteo>> {
        self.api
            .get_json(&format!(
                "/Sorteos/GetsorteoByDate?date={}",
                format_date(date)
            ))
            .await
    }

    pub async fn create(&self, sorteo: &Sorteo) -> Result<()> {
        self.api.post_json_discard("/Sorteos", sorteo).await
    }

    pub async fn update(&self, id: i64, sorteo: &Sorteo) -> Result<()> {
        self.api.put_json(&format!("/Sorteos/{}", id), sorteo).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("/Sorteos/{}", id)).await
    }

    pub async fn upload(&self, file: &Path) -> Result<()> {
        self.api.upload_file("/sorteos/upload", file).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::session::SessionStore;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_search_requires_a_criterion() {
        let dir = tempdir().unwrap();
        let session = SessionStore::new(dir.path().join("session.json"));
        let api = ApiClient::new(&AppConfig::default(), session).unwrap();
        let client = SorteosClient::new(api);

        let err = client.search(None, None).await.unwrap_err();
        assert!(matches!(err, ChancesError::Validation(_)));

        let err = client.search(Some("  "), Some("")).await.unwrap_err();
        assert!(matches!(err, ChancesError::Validation(_)));
    }
}
