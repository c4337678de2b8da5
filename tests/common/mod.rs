//! Shared in-memory collaborators for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use movie_catalog::models::credential::Credential;
use movie_catalog::models::record::{MovieRecord, RawRecord};
use movie_catalog::services::backend::{CatalogSource, RecordStore};
use movie_catalog::{Error, Result};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

pub const ADMIN_TOKEN: &str = "admin-token";

/// Build a raw record from a JSON literal.
pub fn raw(value: serde_json::Value) -> RawRecord {
    RawRecord::from(value)
}

/// In-memory catalog backend with optional per-request delays.
#[derive(Default)]
pub struct MockCatalog {
    pub local: Vec<RawRecord>,
    pub searches: HashMap<String, Vec<RawRecord>>,
    pub external_details: HashMap<String, RawRecord>,
    pub local_delay: Duration,
    pub search_delays: HashMap<String, Duration>,
    pub fail_local: bool,
    pub fail_search: bool,
    pub submitted: Mutex<Vec<(MovieRecord, bool)>>,
    pub deleted: Mutex<Vec<String>>,
}

impl MockCatalog {
    pub fn with_local(local: Vec<RawRecord>) -> Self {
        Self {
            local,
            ..Default::default()
        }
    }

    pub fn search_result(mut self, query: &str, results: Vec<RawRecord>) -> Self {
        self.searches.insert(query.to_string(), results);
        self
    }

    pub fn search_delay(mut self, query: &str, millis: u64) -> Self {
        self.search_delays
            .insert(query.to_string(), Duration::from_millis(millis));
        self
    }

    pub fn submitted(&self) -> Vec<(MovieRecord, bool)> {
        self.submitted.lock().unwrap().clone()
    }

    fn authorize(credential: &Credential) -> Result<()> {
        if credential.bearer_header() == format!("Bearer {}", ADMIN_TOKEN) {
            Ok(())
        } else {
            Err(Error::Unauthorized("token rejected".to_string()))
        }
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn fetch_local_catalog(&self) -> Result<Vec<RawRecord>> {
        tokio::time::sleep(self.local_delay).await;
        if self.fail_local {
            return Err(Error::TransientFetchFailure("movie list failed with 502".into()));
        }
        Ok(self.local.clone())
    }

    async fn fetch_external_search(&self, query: &str) -> Result<Vec<RawRecord>> {
        if let Some(delay) = self.search_delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        if self.fail_search {
            return Err(Error::TransientFetchFailure("TMDB search failed with 503".into()));
        }
        Ok(self.searches.get(query).cloned().unwrap_or_default())
    }

    async fn fetch_local_record(&self, id: &str) -> Result<RawRecord> {
        self.local
            .iter()
            .find(|r| {
                r.get("id")
                    .map(|v| v.to_string().trim_matches('"') == id)
                    .unwrap_or(false)
            })
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("movie {}", id)))
    }

    async fn fetch_external_record(&self, id: &str) -> Result<RawRecord> {
        self.external_details
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("TMDB movie {}", id)))
    }
}

#[async_trait]
impl RecordStore for MockCatalog {
    async fn submit_record(
        &self,
        record: &MovieRecord,
        is_update: bool,
        credential: &Credential,
    ) -> Result<()> {
        Self::authorize(credential)?;
        self.submitted
            .lock()
            .unwrap()
            .push((record.clone(), is_update));
        Ok(())
    }

    async fn delete_record(&self, id: &str, credential: &Credential) -> Result<()> {
        Self::authorize(credential)?;
        self.deleted.lock().unwrap().push(id.to_string());
        Ok(())
    }
}
