//! Collaborator contracts consumed by the catalog core.
//!
//! The core never talks to the network directly; it is handed
//! implementations of these traits.

use crate::models::credential::Credential;
use crate::models::record::{MovieRecord, RawRecord};
use crate::Result;
use async_trait::async_trait;

/// Read access to the local catalog and the external metadata search.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// List every record in the local catalog.
    async fn fetch_local_catalog(&self) -> Result<Vec<RawRecord>>;

    /// Search the external metadata service by title.
    ///
    /// Zero matches is `Ok(vec![])`, not an error.
    async fn fetch_external_search(&self, query: &str) -> Result<Vec<RawRecord>>;

    /// Fetch one local record. A missing id is `Error::NotFound`.
    async fn fetch_local_record(&self, id: &str) -> Result<RawRecord>;

    /// Fetch full details of one external record. A missing id is `Error::NotFound`.
    async fn fetch_external_record(&self, id: &str) -> Result<RawRecord>;
}

/// Mutating access to the local catalog. Every call requires a credential.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create (`is_update == false`) or update a record.
    ///
    /// Updates target `record.id`.
    async fn submit_record(
        &self,
        record: &MovieRecord,
        is_update: bool,
        credential: &Credential,
    ) -> Result<()>;

    /// Delete a record by id.
    async fn delete_record(&self, id: &str, credential: &Credential) -> Result<()>;
}
