use super::error::{Result, StoreError};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrackStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl std::fmt::Display for TrackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Contents of `tracks/<id>/metadata.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackMetadata {
    pub id: String,
    pub title: String,
    pub status: TrackStatus,
    pub created_at: String,
}

impl TrackMetadata {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status: TrackStatus::Pending,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Track ids become directory names under `tracks/`, so they must be a
/// single, visible path component.
pub fn validate_track_id(id: &str) -> Result<()> {
    let reason = if id.trim().is_empty() {
        "must not be empty"
    } else if id.contains('/') || id.contains('\\') || id.contains('\0') {
        "must not contain path separators"
    } else if id.contains("..") {
        "must not contain '..'"
    } else if id.starts_with('.') {
        "must not start with '.'"
    } else {
        return Ok(());
    };

    Err(StoreError::InvalidTrackId {
        id: id.to_string(),
        reason,
    })
}
