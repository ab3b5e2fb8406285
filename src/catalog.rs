// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::api::{Podcast, RecordId};
use crate::error::CommandError;

/// Order in which the catalog view is listed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Most recently updated first
    #[default]
    Newest,
    /// Least recently updated first
    Oldest,
    /// Title A-Z
    TitleAsc,
    /// Title Z-A
    TitleDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CommandError::InvalidSortKey(s.to_string()))
    }
}

/// Search text, genre and sort order applied to the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: String,
    pub genre: Option<u32>,
    pub sort: SortKey,
}

/// The full podcast list, read-only once loaded
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    podcasts: Vec<Podcast>,
}

impl Catalog {
    pub fn new(podcasts: Vec<Podcast>) -> Self {
        Self { podcasts }
    }

    pub fn podcasts(&self) -> &[Podcast] {
        &self.podcasts
    }

    pub fn len(&self) -> usize {
        self.podcasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.podcasts.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&Podcast> {
        self.podcasts.iter().find(|podcast| &podcast.id == id)
    }

    /// The filtered and sorted view for a query
    pub fn view(&self, query: &CatalogQuery) -> Vec<&Podcast> {
        let mut view: Vec<&Podcast> = self.podcasts.iter().collect();
        view = filter_by_search(view, &query.search);
        if let Some(genre) = query.genre {
            view = filter_by_genre(view, genre);
        }
        sort_podcasts(&mut view, query.sort);
        view
    }
}

/// Whether the title contains `search`, ignoring case
pub fn matches_search(podcast: &Podcast, search: &str) -> bool {
    search.is_empty() || podcast.title.to_lowercase().contains(&search.to_lowercase())
}

pub fn filter_by_search<'a>(podcasts: Vec<&'a Podcast>, search: &str) -> Vec<&'a Podcast> {
    podcasts
        .into_iter()
        .filter(|podcast| matches_search(podcast, search))
        .collect()
}

pub fn filter_by_genre(podcasts: Vec<&Podcast>, genre: u32) -> Vec<&Podcast> {
    podcasts
        .into_iter()
        .filter(|podcast| podcast.genre_ids.contains(&genre))
        .collect()
}

/// Sort in place; equal keys fall back to id so the order is total
pub fn sort_podcasts(podcasts: &mut [&Podcast], sort: SortKey) {
    podcasts.sort_by(|a, b| compare(a, b, sort).then_with(|| a.id.cmp(&b.id)));
}

fn compare(a: &Podcast, b: &Podcast, sort: SortKey) -> Ordering {
    match sort {
        SortKey::Newest => b.updated.cmp(&a.updated),
        SortKey::Oldest => a.updated.cmp(&b.updated),
        SortKey::TitleAsc => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::TitleDesc => b.title.to_lowercase().cmp(&a.title.to_lowercase()),
    }
}
