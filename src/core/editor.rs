//! Create/edit session for a single draft record.
//!
//! Covers the whole form flow: seeding, field edits, looking up the external
//! service, adopting a picked result, validation and submission.

use super::merger::merge;
use super::normalizer::{normalize, parse_year};
use crate::models::credential::Credential;
use crate::models::draft::{Draft, DraftMode};
use crate::models::record::{MovieRecord, RawRecord};
use crate::services::backend::{CatalogSource, RecordStore};
use crate::utils::youtube::extract_video_id;
use crate::{Error, Result};
use chrono::Datelike;

/// Earliest accepted release year.
pub const MIN_RELEASE_YEAR: u16 = 1888;

/// A user-editable field of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Genre,
    ReleaseYear,
    PosterUrl,
    Synopsis,
    Director,
    TrailerReferenceId,
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DraftField::Title => "title",
            DraftField::Genre => "genre",
            DraftField::ReleaseYear => "releaseYear",
            DraftField::PosterUrl => "posterUrl",
            DraftField::Synopsis => "synopsis",
            DraftField::Director => "director",
            DraftField::TrailerReferenceId => "trailerYoutubeId",
        };
        f.pad(name)
    }
}

/// Single-owner editing session over a [`Draft`].
#[derive(Debug, Default)]
pub struct DraftEditor {
    draft: Draft,
    lookup_results: Vec<RawRecord>,
}

impl DraftEditor {
    /// Start a session for a new record.
    pub fn create() -> Self {
        Self::from_draft(Draft::create())
    }

    /// Start a session editing local record `id`.
    ///
    /// A record without a title cannot be edited and is reported as `NotFound`.
    pub async fn edit(source: &dyn CatalogSource, id: &str) -> Result<Self> {
        let raw = source.fetch_local_record(id).await?;
        let record = normalize(&raw);
        if record.title.is_empty() {
            return Err(Error::NotFound(format!("movie {} has no title", id)));
        }
        tracing::debug!("Seeded draft from local record {}: '{}'", id, record.title);
        Ok(Self::from_draft(Draft::edit(id, record)))
    }

    /// Resume a session over an existing draft.
    pub fn from_draft(draft: Draft) -> Self {
        Self {
            draft,
            lookup_results: Vec::new(),
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn into_draft(self) -> Draft {
        self.draft
    }

    /// Results of the last lookup, in service order.
    pub fn lookup_results(&self) -> &[RawRecord] {
        &self.lookup_results
    }

    /// Set one field from user input.
    ///
    /// An empty release year clears it; anything else must parse as a year.
    /// The trailer accepts a bare video id or a full YouTube URL.
    pub fn set_field(&mut self, field: DraftField, value: &str) -> Result<()> {
        let record = &mut self.draft.record;
        match field {
            DraftField::Title => record.title = value.to_string(),
            DraftField::Genre => record.genre = value.to_string(),
            DraftField::PosterUrl => record.poster_url = value.to_string(),
            DraftField::Synopsis => record.synopsis = value.to_string(),
            DraftField::Director => record.director = value.to_string(),
            DraftField::TrailerReferenceId => {
                record.trailer_reference_id = extract_video_id(value)
            }
            DraftField::ReleaseYear => {
                record.release_year = if value.trim().is_empty() {
                    None
                } else {
                    Some(parse_year(value).ok_or_else(|| {
                        Error::validation(format!("release year '{}' is not a year", value))
                    })?)
                };
            }
        }
        Ok(())
    }

    /// Search the external service for candidates to adopt.
    ///
    /// A blank query leaves the results untouched. A failed search clears them.
    pub async fn lookup(
        &mut self,
        source: &dyn CatalogSource,
        query: &str,
    ) -> Result<&[RawRecord]> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(&self.lookup_results);
        }

        match source.fetch_external_search(query).await {
            Ok(results) => {
                tracing::debug!("Lookup '{}': {} results", query, results.len());
                self.lookup_results = results;
                Ok(&self.lookup_results)
            }
            Err(e) => {
                self.lookup_results.clear();
                Err(e)
            }
        }
    }

    /// Adopt lookup result `index` into the draft and clear the results.
    pub fn select(&mut self, index: usize) -> Result<&Draft> {
        let picked = self.lookup_results.get(index).ok_or_else(|| {
            Error::validation(format!(
                "no lookup result at position {} ({} available)",
                index,
                self.lookup_results.len()
            ))
        })?;

        self.draft = merge(&self.draft, picked);
        self.lookup_results.clear();
        Ok(&self.draft)
    }

    /// Check the draft can be submitted.
    pub fn validate(&self) -> Result<()> {
        validate(&self.draft)
    }

    /// Validate and submit the draft, ending the session.
    ///
    /// Nothing is sent when validation fails.
    pub async fn submit(
        self,
        store: &dyn RecordStore,
        credential: &Credential,
    ) -> Result<MovieRecord> {
        self.validate()?;

        let is_update = self.draft.is_update();
        store
            .submit_record(&self.draft.record, is_update, credential)
            .await?;

        tracing::info!(
            "Movie '{}' {}",
            self.draft.record.title,
            if is_update { "updated" } else { "created" }
        );
        Ok(self.draft.record)
    }
}

/// Check a draft before dispatch.
pub fn validate(draft: &Draft) -> Result<()> {
    let record = &draft.record;

    if record.title.trim().is_empty() {
        return Err(Error::validation("title is required"));
    }

    if let DraftMode::Edit { id } = &draft.mode {
        if id.is_empty() || record.id.as_deref() != Some(id.as_str()) {
            return Err(Error::validation("update target id is missing"));
        }
    }

    if let Some(year) = record.release_year {
        let max_year = chrono::Utc::now().year() + 1;
        if year < MIN_RELEASE_YEAR || i32::from(year) > max_year {
            return Err(Error::validation(format!(
                "release year {} is outside {}-{}",
                year, MIN_RELEASE_YEAR, max_year
            )));
        }
    }

    if !record.poster_url.is_empty() && !is_absolute_http_url(&record.poster_url) {
        return Err(Error::validation(format!(
            "poster URL '{}' is not an absolute http(s) URL",
            record.poster_url
        )));
    }

    Ok(())
}

fn is_absolute_http_url(s: &str) -> bool {
    reqwest::Url::parse(s)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}
