//! Source classification.
//!
//! Neither collaborator labels its records, so the origin is inferred from
//! shape: external search results carry a raw `release_date` and never a
//! canonical `releaseYear`. Records are tagged right after classification and
//! the raw shape is not inspected again downstream.

use super::normalizer::normalize;
use crate::models::record::{RawRecord, SourceKind, TaggedRecord};

/// Classify a raw record as local or external.
///
/// A record is external iff it has a `release_date` and no `releaseYear`.
/// Everything else, including a record with neither, is local.
pub fn classify(raw: &RawRecord) -> SourceKind {
    if raw.has("release_date") && !raw.has("releaseYear") {
        SourceKind::External
    } else {
        SourceKind::Local
    }
}

/// Classify and normalize a raw record.
pub fn tag(raw: &RawRecord) -> TaggedRecord {
    TaggedRecord::new(classify(raw), normalize(raw))
}

/// Classify and normalize a list of raw records, preserving order.
pub fn tag_all(raws: &[RawRecord]) -> Vec<TaggedRecord> {
    raws.iter().map(tag).collect()
}
