//! Catalog backend API client.

use super::backend::{CatalogSource, RecordStore};
use crate::models::config::ApiConfig;
use crate::models::credential::Credential;
use crate::models::record::{MovieRecord, RawRecord};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

/// Catalog backend client.
pub struct CatalogApiClient {
    config: ApiConfig,
    client: reqwest::Client,
    credential: Option<Credential>,
}

impl CatalogApiClient {
    /// Create a new client.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            config,
            client,
            credential: None,
        })
    }

    /// Send `credential` on reads of single local records.
    pub fn with_credential(mut self, credential: Option<Credential>) -> Self {
        self.credential = credential;
        self
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Build an absolute URL for an API path.
    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Check the backend answers the public listing.
    pub async fn ping(&self) -> bool {
        match self.client.get(self.build_url("movies")).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    /// Attach the configured credential, if any.
    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credential {
            Some(credential) => request.header("Authorization", credential.bearer_header()),
            None => request,
        }
    }

    async fn get_json(&self, request: reqwest::RequestBuilder, what: &str) -> Result<Value> {
        let resp = request
            .send()
            .await
            .map_err(|e| transport_error(what, e))?;
        let resp = check_status(resp, what).await?;
        resp.json().await.map_err(|e| transport_error(what, e))
    }

    async fn get_list(&self, url: &str, what: &str) -> Result<Vec<RawRecord>> {
        tracing::debug!("GET {}", url);
        match self.get_json(self.client.get(url), what).await? {
            Value::Array(items) => Ok(items.into_iter().map(RawRecord::from).collect()),
            other => {
                tracing::warn!("Expected a list for {}, got {}", what, json_kind(&other));
                Ok(Vec::new())
            }
        }
    }
}

#[async_trait]
impl CatalogSource for CatalogApiClient {
    async fn fetch_local_catalog(&self) -> Result<Vec<RawRecord>> {
        self.get_list(&self.build_url("movies"), "movie list").await
    }

    async fn fetch_external_search(&self, query: &str) -> Result<Vec<RawRecord>> {
        let url = self.build_url(&format!(
            "movies/search/tmdb?title={}",
            urlencoding::encode(query)
        ));
        self.get_list(&url, "TMDB search").await
    }

    async fn fetch_local_record(&self, id: &str) -> Result<RawRecord> {
        let url = self.build_url(&format!("movies/{}", urlencoding::encode(id)));
        tracing::debug!("GET {}", url);
        let request = self.authorized(self.client.get(&url));
        let value = self.get_json(request, &format!("movie {}", id)).await?;
        Ok(RawRecord::from(value))
    }

    async fn fetch_external_record(&self, id: &str) -> Result<RawRecord> {
        let url = self.build_url(&format!(
            "movies/public/tmdb/details/{}",
            urlencoding::encode(id)
        ));
        tracing::debug!("GET {}", url);
        let value = self
            .get_json(self.client.get(&url), &format!("TMDB movie {}", id))
            .await?;
        Ok(RawRecord::from(value))
    }
}

#[async_trait]
impl RecordStore for CatalogApiClient {
    async fn submit_record(
        &self,
        record: &MovieRecord,
        is_update: bool,
        credential: &Credential,
    ) -> Result<()> {
        let request = if is_update {
            let id = record
                .id
                .as_deref()
                .ok_or_else(|| Error::validation("update target id is missing"))?;
            self.client
                .put(self.build_url(&format!("movies/{}", urlencoding::encode(id))))
        } else {
            self.client.post(self.build_url("movies"))
        };

        let what = format!("save of '{}'", record.title);
        let resp = request
            .header("Authorization", credential.bearer_header())
            .json(record)
            .send()
            .await
            .map_err(|e| transport_error(&what, e))?;
        check_status(resp, &what).await?;
        Ok(())
    }

    async fn delete_record(&self, id: &str, credential: &Credential) -> Result<()> {
        let what = format!("delete of movie {}", id);
        let resp = self
            .client
            .delete(self.build_url(&format!("movies/{}", urlencoding::encode(id))))
            .header("Authorization", credential.bearer_header())
            .send()
            .await
            .map_err(|e| transport_error(&what, e))?;
        check_status(resp, &what).await?;
        tracing::info!("Movie {} deleted", id);
        Ok(())
    }
}

/// Map a non-success status onto the catalog error taxonomy.
async fn check_status(resp: reqwest::Response, what: &str) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let detail = server_message(resp).await;
    Err(status_error(status, what, detail.as_deref()))
}

/// Map a status code onto an error.
pub fn status_error(status: StatusCode, what: &str, detail: Option<&str>) -> Error {
    let suffix = detail.map(|d| format!(": {}", d)).unwrap_or_default();
    match status {
        StatusCode::NOT_FOUND => Error::NotFound(format!("{}{}", what, suffix)),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Unauthorized(format!(
            "{} rejected ({}); sign in as admin{}",
            what, status, suffix
        )),
        _ => Error::TransientFetchFailure(format!("{} failed with {}{}", what, status, suffix)),
    }
}

/// The backend's `message` field, if the error body carries one.
async fn server_message(resp: reqwest::Response) -> Option<String> {
    let body: Value = resp.json().await.ok()?;
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

fn transport_error(what: &str, e: reqwest::Error) -> Error {
    Error::TransientFetchFailure(format!("{}: {}", what, e))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
