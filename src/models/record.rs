//! Movie record data models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const POSTER_PLACEHOLDER_URL: &str = "https://via.placeholder.com/400x600?text=No+Poster";
const YOUTUBE_EMBED_BASE_URL: &str = "https://www.youtube.com/embed";

/// Origin of a raw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Stored in the local catalog.
    Local,
    /// Returned by the external metadata search service.
    External,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Local => write!(f, "local"),
            SourceKind::External => write!(f, "external"),
        }
    }
}

/// A record of unknown origin, exactly as a collaborator returned it.
///
/// Any JSON value converts into a `RawRecord`; values that are not objects
/// become an empty record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    /// Create an empty raw record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field value, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Check whether a field is present and not null.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_null())
    }

    /// Set a field value.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert back into a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

/// Canonical movie record used for display and editing.
///
/// String fields are never absent: a missing value is `""`. Field names on
/// the wire follow the catalog backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    /// Origin-specific identifier. `None` until persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Title.
    #[serde(default)]
    pub title: String,
    /// Free-text genre (e.g., "Sci-Fi, Drama").
    #[serde(default)]
    pub genre: String,
    /// Release year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<u16>,
    /// Absolute poster URL.
    #[serde(default)]
    pub poster_url: String,
    /// Synopsis.
    #[serde(default)]
    pub synopsis: String,
    /// Director name.
    #[serde(default)]
    pub director: String,
    /// YouTube video id of the trailer.
    #[serde(default, rename = "trailerYoutubeId")]
    pub trailer_reference_id: String,
}

impl MovieRecord {
    /// Embeddable trailer URL, if a trailer is set.
    pub fn trailer_embed_url(&self) -> Option<String> {
        if self.trailer_reference_id.is_empty() {
            return None;
        }
        Some(format!(
            "{}/{}?autoplay=0",
            YOUTUBE_EMBED_BASE_URL, self.trailer_reference_id
        ))
    }

    /// Poster URL, or a placeholder image when none is set.
    pub fn poster_or_placeholder(&self) -> &str {
        if self.poster_url.is_empty() {
            POSTER_PLACEHOLDER_URL
        } else {
            &self.poster_url
        }
    }

    /// Release year for display ("N/A" when unknown).
    pub fn display_year(&self) -> String {
        self.release_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Serialize into the raw wire shape.
    ///
    /// Normalizing the result gives back the same record for anything the
    /// normalizer produces. An empty `id` or a zero release year are not
    /// canonical and come back as `None`.
    pub fn to_raw(&self) -> RawRecord {
        serde_json::to_value(self)
            .map(RawRecord::from)
            .unwrap_or_default()
    }
}

/// Route to the detail view of a listed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailRoute {
    /// Detail of a record in the local catalog.
    Local(String),
    /// Detail of a record from the external metadata service.
    External(String),
}

impl DetailRoute {
    /// Build a route for an identifier of the given origin.
    pub fn new(kind: SourceKind, id: impl Into<String>) -> Self {
        match kind {
            SourceKind::Local => DetailRoute::Local(id.into()),
            SourceKind::External => DetailRoute::External(id.into()),
        }
    }

    /// Origin of the routed record.
    pub fn kind(&self) -> SourceKind {
        match self {
            DetailRoute::Local(_) => SourceKind::Local,
            DetailRoute::External(_) => SourceKind::External,
        }
    }

    /// Identifier of the routed record.
    pub fn id(&self) -> &str {
        match self {
            DetailRoute::Local(id) | DetailRoute::External(id) => id,
        }
    }

    /// View path for this route.
    pub fn path(&self) -> String {
        match self {
            DetailRoute::Local(id) => format!("/movies/{}", id),
            DetailRoute::External(id) => format!("/tmdb-details/{}", id),
        }
    }
}

/// A canonical record together with the origin its raw shape was classified as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "record", rename_all = "lowercase")]
pub enum TaggedRecord {
    Local(MovieRecord),
    External(MovieRecord),
}

impl TaggedRecord {
    /// Wrap a record with its origin.
    pub fn new(kind: SourceKind, record: MovieRecord) -> Self {
        match kind {
            SourceKind::Local => TaggedRecord::Local(record),
            SourceKind::External => TaggedRecord::External(record),
        }
    }

    /// Origin of the record.
    pub fn kind(&self) -> SourceKind {
        match self {
            TaggedRecord::Local(_) => SourceKind::Local,
            TaggedRecord::External(_) => SourceKind::External,
        }
    }

    /// The canonical record.
    pub fn record(&self) -> &MovieRecord {
        match self {
            TaggedRecord::Local(record) | TaggedRecord::External(record) => record,
        }
    }

    /// Consume and return the canonical record.
    pub fn into_record(self) -> MovieRecord {
        match self {
            TaggedRecord::Local(record) | TaggedRecord::External(record) => record,
        }
    }

    /// Route to this record's detail view. `None` when the record has no id.
    pub fn detail_route(&self) -> Option<DetailRoute> {
        self.record()
            .id
            .as_ref()
            .map(|id| DetailRoute::new(self.kind(), id.clone()))
    }
}
