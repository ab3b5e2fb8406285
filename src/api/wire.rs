//! Directory API response types for deserialization.
//!
//! These structures mirror the JSON the API sends. Everything the rest of the
//! crate relies on is required here, so a response of the wrong shape fails
//! at the fetch boundary instead of deep inside the views.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// An identifier the API sends either as a string or as a number
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RawId {
    Text(String),
    Number(u64),
}

impl RawId {
    pub fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

/// One entry of the catalog endpoint
#[derive(Debug, Deserialize)]
pub(super) struct PreviewRecord {
    pub id: RawId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Number of seasons, when the API includes it
    #[serde(default)]
    pub seasons: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub genres: Vec<u32>,
    pub updated: DateTime<Utc>,
}

/// The show detail endpoint's record
#[derive(Debug, Deserialize)]
pub(super) struct ShowRecord {
    pub id: RawId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Genre titles (the detail endpoint sends names, not ids)
    #[serde(default)]
    pub genres: Vec<String>,
    pub updated: DateTime<Utc>,
    #[serde(default)]
    pub seasons: Vec<SeasonRecord>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SeasonRecord {
    #[serde(default)]
    pub id: Option<RawId>,
    /// Season number; used as the id when no explicit id is sent
    #[serde(default)]
    pub season: Option<RawId>,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub episodes: Vec<EpisodeRecord>,
}

#[derive(Debug, Deserialize)]
pub(super) struct EpisodeRecord {
    #[serde(default)]
    pub id: Option<RawId>,
    /// Episode number within its season
    #[serde(default)]
    pub episode: Option<u32>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Audio file URL
    #[serde(default)]
    pub file: Option<String>,
}
