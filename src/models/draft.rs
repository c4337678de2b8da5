//! Draft record model for the create/edit flow.

use super::record::MovieRecord;
use serde::{Deserialize, Serialize};

/// Whether a draft creates a new record or updates an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum DraftMode {
    Create,
    Edit { id: String },
}

/// A movie record under construction.
///
/// Unlike a persisted record, any field may still be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub mode: DraftMode,
    pub record: MovieRecord,
}

impl Draft {
    /// Create an empty draft for a new record.
    pub fn create() -> Self {
        Self {
            mode: DraftMode::Create,
            record: MovieRecord::default(),
        }
    }

    /// Create a draft editing an existing record.
    ///
    /// The record id is forced to `id` so the submit targets the edited record.
    pub fn edit(id: impl Into<String>, mut record: MovieRecord) -> Self {
        let id = id.into();
        record.id = Some(id.clone());
        Self {
            mode: DraftMode::Edit { id },
            record,
        }
    }

    /// Whether submitting this draft updates an existing record.
    pub fn is_update(&self) -> bool {
        matches!(self.mode, DraftMode::Edit { .. })
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::create()
    }
}
