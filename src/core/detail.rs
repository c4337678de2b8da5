//! Detail view loading.

use super::normalizer::normalize;
use crate::models::record::{DetailRoute, SourceKind, TaggedRecord};
use crate::services::backend::CatalogSource;
use crate::{Error, Result};

/// Fetch and normalize the record behind a detail route.
///
/// A record without a title is reported as `NotFound` rather than shown
/// with a blank heading.
pub async fn load_detail(source: &dyn CatalogSource, route: &DetailRoute) -> Result<TaggedRecord> {
    let raw = match route.kind() {
        SourceKind::Local => source.fetch_local_record(route.id()).await?,
        SourceKind::External => source.fetch_external_record(route.id()).await?,
    };

    let mut record = normalize(&raw);
    if record.title.is_empty() {
        return Err(Error::NotFound(format!("{} has no title", route.path())));
    }
    if record.id.is_none() {
        record.id = Some(route.id().to_string());
    }

    Ok(TaggedRecord::new(route.kind(), record))
}
