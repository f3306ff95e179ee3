//! HTTP client layer for the Chances API
//!
//! `ApiClient` owns the `reqwest` client, the base URL, and the session
//! store; one typed client per server resource sits on top of it. All
//! calls are single-shot: no retry, no backoff, no request timeout.

mod astro;
mod patrons;
mod sorteo_patrons;
mod sorteos;
mod tickets;
mod users;

pub use astro::AstroClient;
pub use patrons::PatronsClient;
pub use sorteo_patrons::SorteoPatronsClient;
pub use sorteos::SorteosClient;
pub use tickets::TicketsClient;
pub use users::UsersClient;

use std::path::Path;
use std::sync::Arc;

use reqwest::multipart;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::{ChancesError, Result};
use crate::session::SessionStore;

/// Longest body snippet carried into an error message.
const ERROR_BODY_SNIPPET: usize = 200;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: Arc<SessionStore>) -> Result<Arc<Self>> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ChancesError::http(format!("failed to build HTTP client: {}", e)))?;
        Ok(Arc::new(Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            session,
        }))
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Absolute URL for an API path (`path` starts with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!(%method, %url, "api request");
        let mut builder = self.http.request(method, url);
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        Self::check_status(response).await
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let snippet: String = body.chars().take(ERROR_BODY_SNIPPET).collect();
        if status == StatusCode::NOT_FOUND {
            Err(ChancesError::not_found(format!("{}: {}", status, snippet)))
        } else {
            Err(ChancesError::api(format!("{}: {}", status, snippet)))
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Ok(response.json().await?)
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .send(self.request(Method::POST, path).json(body))
            .await?;
        Ok(response.json().await?)
    }

    /// POST a JSON body, response body ignored.
    pub async fn post_json_discard<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<()> {
        self.send(self.request(Method::POST, path).json(body))
            .await?;
        Ok(())
    }

    /// POST with query-string parameters only, response body ignored.
    pub async fn post_empty(&self, path: &str) -> Result<()> {
        self.send(self.request(Method::POST, path)).await?;
        Ok(())
    }

    pub async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.send(self.request(Method::PUT, path).json(body))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    /// Upload a spreadsheet as a multipart form with a single `file` part.
    pub async fn upload_file(&self, path: &str, file: &Path) -> Result<()> {
        let bytes = tokio::fs::read(file).await?;
        let file_name = file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.xlsx")
            .to_string();
        let part = multipart::Part::bytes(bytes).file_name(file_name);
        let form = multipart::Form::new().part("file", part);
        self.send(self.request(Method::POST, path).multipart(form))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use tempfile::tempdir;

    fn client_with_base(base: &str) -> Arc<ApiClient> {
        let dir = tempdir().unwrap();
        let session = SessionStore::new(dir.path().join("session.json"));
        let mut config = AppConfig::default();
        config.api.base_url = base.into();
        ApiClient::new(&config, session).unwrap()
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = client_with_base("https://localhost:7267/api");
        assert_eq!(
            client.url("/patrons/Search?date=2024-05-20&jornada=dia"),
            "https://localhost:7267/api/patrons/Search?date=2024-05-20&jornada=dia"
        );
    }

    #[test]
    fn test_url_strips_trailing_slash_from_base() {
        let client = client_with_base("http://example.test/api/");
        assert_eq!(client.url("/tickets"), "http://example.test/api/tickets");
    }

    // Query values go through urlencoding::encode at every call site;
    // the API expects dates and jornada names to arrive unmangled.
    #[test]
    fn test_query_values_percent_encode() {
        assert_eq!(urlencoding::encode("2024-05-20"), "2024-05-20");
        assert_eq!(urlencoding::encode("dia"), "dia");
        assert_eq!(urlencoding::encode("a b"), "a%20b");
        assert_eq!(urlencoding::encode("x&y=z"), "x%26y%3Dz");
        // UTF-8 multibyte characters encode per byte.
        assert_eq!(urlencoding::encode("ñ"), "%C3%B1");
    }
}
