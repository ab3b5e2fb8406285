// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::Value;
use url::Url;

use crate::error::FetchError;

use super::wire::{EpisodeRecord, PreviewRecord, RawId, SeasonRecord, ShowRecord};

/// Identifier of a podcast, season or episode, normalized to text
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct Podcast {
    pub id: RecordId,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<Url>,
    pub genre_ids: Vec<u32>,
    pub season_count: Option<u32>,
    pub updated: DateTime<Utc>,
}

/// A show detail record with its seasons and episodes
#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    pub id: RecordId,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<Url>,
    pub genres: Vec<String>,
    pub updated: DateTime<Utc>,
    pub seasons: Vec<Season>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Season {
    pub id: RecordId,
    pub title: String,
    pub image_url: Option<Url>,
    pub episodes: Vec<Episode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    pub id: RecordId,
    pub number: u32,
    pub title: String,
    pub description: Option<String>,
    pub file_url: Option<Url>,
}

impl Show {
    /// Find a season by id
    pub fn season(&self, id: &RecordId) -> Option<&Season> {
        self.seasons.iter().find(|season| &season.id == id)
    }

    /// Total number of episodes over all seasons
    pub fn episode_count(&self) -> usize {
        self.seasons.iter().map(|season| season.episodes.len()).sum()
    }
}

/// Parse the catalog endpoint's JSON array into podcasts
pub fn parse_catalog(body: &[u8], url: &Url) -> Result<Vec<Podcast>, FetchError> {
    let records: Vec<PreviewRecord> =
        serde_json::from_slice(body).map_err(|e| malformed(url, e))?;

    Ok(records.into_iter().map(convert_preview).collect())
}

/// Parse a show detail response
///
/// A `null` or empty-object body is a successful response without a usable
/// record and yields [`FetchError::NotFound`].
pub fn parse_show(body: &[u8], id: &str, url: &Url) -> Result<Show, FetchError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| malformed(url, e))?;

    let is_empty = match &value {
        Value::Null => true,
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    };
    if is_empty {
        return Err(FetchError::NotFound { id: id.to_string() });
    }

    let record: ShowRecord = serde_json::from_value(value).map_err(|e| malformed(url, e))?;
    Ok(convert_show(record))
}

fn malformed(url: &Url, source: serde_json::Error) -> FetchError {
    FetchError::Malformed {
        url: url.to_string(),
        source,
    }
}

fn convert_preview(record: PreviewRecord) -> Podcast {
    Podcast {
        id: record_id(record.id),
        title: decode(&record.title),
        description: non_empty(record.description),
        image_url: parse_url(record.image),
        genre_ids: record.genres,
        season_count: record.seasons,
        updated: record.updated,
    }
}

fn convert_show(record: ShowRecord) -> Show {
    Show {
        id: record_id(record.id),
        title: decode(&record.title),
        description: non_empty(record.description),
        image_url: parse_url(record.image),
        genres: record.genres.iter().map(|genre| decode(genre)).collect(),
        updated: record.updated,
        seasons: record
            .seasons
            .into_iter()
            .enumerate()
            .map(|(index, season)| convert_season(season, index + 1))
            .collect(),
    }
}

fn convert_season(record: SeasonRecord, position: usize) -> Season {
    let id = record
        .id
        .or(record.season)
        .map(record_id)
        .unwrap_or_else(|| RecordId(position.to_string()));

    Season {
        id,
        title: decode(&record.title),
        image_url: parse_url(record.image),
        episodes: record
            .episodes
            .into_iter()
            .enumerate()
            .map(|(index, episode)| convert_episode(episode, index + 1))
            .collect(),
    }
}

fn convert_episode(record: EpisodeRecord, position: usize) -> Episode {
    let number = record.episode.unwrap_or(position as u32);
    let id = record
        .id
        .map(record_id)
        .unwrap_or_else(|| RecordId(number.to_string()));

    Episode {
        id,
        number,
        title: decode(&record.title),
        description: non_empty(record.description),
        file_url: parse_url(record.file),
    }
}

fn record_id(raw: RawId) -> RecordId {
    RecordId(raw.into_string())
}

fn parse_url(raw: Option<String>) -> Option<Url> {
    raw.and_then(|s| Url::parse(&s).ok())
}

/// Resolve HTML entities; the API delivers `&amp;` and friends in plain text
fn decode(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Decoded text, with blank values treated as absent
fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|s| !s.trim().is_empty())
        .map(|s| decode(&s))
}
