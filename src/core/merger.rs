//! Merging a picked external search result into a draft.
//!
//! Selecting a search result adopts its title, poster, synopsis and release
//! year. Genre and director are kept from the draft: search results do not
//! carry them reliably, only a separate detail lookup does. The trailer needs
//! its own lookup and is left alone.

use super::normalizer::normalize;
use crate::models::draft::Draft;
use crate::models::record::RawRecord;

/// Merge `picked` into `draft`, returning the updated draft.
///
/// The draft's mode and id are never changed.
pub fn merge(draft: &Draft, picked: &RawRecord) -> Draft {
    let incoming = normalize(picked);
    let mut merged = draft.clone();

    merged.record.title = incoming.title;
    merged.record.poster_url = incoming.poster_url;
    merged.record.synopsis = incoming.synopsis;
    merged.record.release_year = incoming.release_year;

    tracing::debug!(
        "Merged search result '{}' into draft ({:?})",
        merged.record.title,
        merged.mode
    );

    merged
}
