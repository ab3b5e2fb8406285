// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plain-text views of the catalog and the show detail state.
//!
//! Everything here is derived from the state passed in; colouring is left
//! to the binary.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::api::{Podcast, Season, Show};
use crate::detail::{DetailStatus, ShowDetail};
use crate::expansion::{EpisodeKey, ExpansionState};
use crate::genre::{GENRES, genre_title};

/// Descriptions in the catalog and in a season listing are cut to this many characters
pub const PREVIEW_CHARS: usize = 100;

/// Format a timestamp as e.g. `November 3, 2022`
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Cut `text` to at most `max_chars` characters, appending `...` when cut.
/// Counts characters, not bytes, so multi-byte characters stay intact.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

/// One line per podcast (id, title, genres and last update), followed by
/// a shortened description when the podcast has one
pub fn render_catalog(view: &[&Podcast]) -> String {
    if view.is_empty() {
        return "No podcasts match your filters.\n".to_string();
    }

    let mut out = String::new();
    for podcast in view {
        let genres: Vec<String> = podcast.genre_ids.iter().map(|id| genre_title(*id)).collect();
        let _ = write!(out, "{:>6}  {}", podcast.id, podcast.title);
        if let Some(count) = podcast.season_count {
            let _ = write!(out, "  [{} {}]", count, plural(count as usize, "season"));
        }
        if !genres.is_empty() {
            let _ = write!(out, "  ({})", genres.join(", "));
        }
        let _ = writeln!(out, "  updated {}", format_date(&podcast.updated));
        if let Some(description) = &podcast.description {
            let _ = writeln!(out, "        {}", truncate_chars(description, PREVIEW_CHARS));
        }
    }
    out
}

/// The genre table, one `id  title` per line
pub fn render_genres() -> String {
    GENRES
        .iter()
        .map(|genre| format!("{:>3}  {}\n", genre.id, genre.title))
        .collect()
}

/// The show detail view for whatever state the detail is in
pub fn render_detail(detail: &ShowDetail) -> String {
    match detail.status() {
        DetailStatus::Idle => "No show details found.\n".to_string(),
        DetailStatus::Loading => "Loading show details...\n".to_string(),
        DetailStatus::Failed(message) => format!("Error: {message}\n"),
        DetailStatus::Loaded(show) => render_show(show, detail.expansion()),
    }
}

/// A loaded show with its seasons, expanded according to `expansion`
pub fn render_show(show: &Show, expansion: &ExpansionState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", show.title);
    if let Some(image) = &show.image_url {
        let _ = writeln!(out, "Image: {image}");
    }
    if let Some(description) = &show.description {
        let _ = writeln!(out, "\n{description}\n");
    }

    if show.genres.is_empty() {
        let _ = writeln!(out, "Genres: No genres listed");
    } else {
        let _ = writeln!(out, "Genres: {}", show.genres.join(", "));
    }
    let _ = writeln!(out, "Last Updated: {}", format_date(&show.updated));

    let _ = writeln!(out, "\nSeasons ({}):", show.seasons.len());
    for season in &show.seasons {
        render_season(&mut out, season, expansion);
    }

    out
}

fn render_season(out: &mut String, season: &Season, expansion: &ExpansionState) {
    let expanded = expansion.is_season_expanded(&season.id);
    let _ = writeln!(
        out,
        "  {} [{}] {} ({} {})",
        if expanded { "[-]" } else { "[+]" },
        season.id,
        season.title,
        season.episodes.len(),
        plural(season.episodes.len(), "episode")
    );

    if !expanded {
        return;
    }

    for episode in &season.episodes {
        let key = EpisodeKey::new(season.id.clone(), episode.id.clone());
        let open = expansion.is_episode_expanded(&key);

        let _ = writeln!(
            out,
            "      {} [{}] Episode {}: {}",
            if open { "[-]" } else { "[+]" },
            episode.id,
            episode.number,
            episode.title
        );

        if let Some(description) = &episode.description {
            let text = if open {
                description.clone()
            } else {
                truncate_chars(description, PREVIEW_CHARS)
            };
            let _ = writeln!(out, "          {text}");
        }

        if open && let Some(file) = &episode.file_url {
            let _ = writeln!(out, "          Audio: {file}");
        }
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
