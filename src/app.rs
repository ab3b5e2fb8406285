// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::str::FromStr;

use crate::api::{RecordId, fetch_catalog};
use crate::catalog::{Catalog, CatalogQuery, SortKey};
use crate::config::ApiConfig;
use crate::detail::ShowDetail;
use crate::error::{BrowseError, CommandError, FetchError};
use crate::expansion::EpisodeKey;
use crate::genre::Genre;
use crate::http::HttpClient;
use crate::progress::{ProgressEvent, SharedProgressReporter};
use crate::render::{render_catalog, render_detail, render_genres};

pub const HELP: &str = "\
Commands:
  list                 show the catalog with the current filters
  search [text]        filter by title (no text clears the search)
  genre <id|name|all>  filter by genre
  sort <key>           newest, oldest, title-asc or title-desc
  genres               list the known genres
  open <id>            show the details of a podcast
  season <id>          expand or collapse a season of the open show
  episode <id>         expand or collapse an episode of the expanded season
  back                 close the show and return to the catalog
  help                 this text
  quit                 leave
";

/// One line of input in an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Search(String),
    /// `None` clears the genre filter
    Genre(Option<String>),
    Sort(SortKey),
    Genres,
    Open(String),
    Season(RecordId),
    Episode(RecordId),
    Back,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let required = |command: &'static str, usage: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument { command, usage })
            } else {
                Ok(rest.to_string())
            }
        };

        match word.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "list" | "ls" => Ok(Command::List),
            "search" | "find" => Ok(Command::Search(rest.to_string())),
            "genre" => {
                let genre = required("genre", "genre <id|name|all>")?;
                if genre.eq_ignore_ascii_case("all") {
                    Ok(Command::Genre(None))
                } else {
                    Ok(Command::Genre(Some(genre)))
                }
            }
            "sort" => Ok(Command::Sort(
                required("sort", "sort <newest|oldest|title-asc|title-desc>")?.parse()?,
            )),
            "genres" => Ok(Command::Genres),
            "open" | "show" => Ok(Command::Open(required("open", "open <id>")?)),
            "season" => Ok(Command::Season(RecordId::new(required(
                "season",
                "season <id>",
            )?))),
            "episode" => Ok(Command::Episode(RecordId::new(required(
                "episode",
                "episode <id>",
            )?))),
            "back" => Ok(Command::Back),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// What the session should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and keep going
    Output(String),
    Quit,
}

/// State of one browsing session: the loaded catalog, the active query and
/// the show detail view. Created once the catalog has been fetched and kept
/// for the lifetime of the session.
pub struct Browser<C: HttpClient> {
    client: C,
    config: ApiConfig,
    reporter: SharedProgressReporter,
    catalog: Catalog,
    query: CatalogQuery,
    detail: ShowDetail,
}

impl<C: HttpClient> Browser<C> {
    /// Fetch the catalog and set up a session around it
    pub async fn start(
        client: C,
        config: ApiConfig,
        reporter: SharedProgressReporter,
    ) -> Result<Self, FetchError> {
        let url = config.catalog_url().to_string();
        reporter.report(ProgressEvent::FetchingCatalog { url: url.clone() });

        let podcasts = match fetch_catalog(&client, &config).await {
            Ok(podcasts) => podcasts,
            Err(e) => {
                reporter.report(ProgressEvent::FetchFailed {
                    url,
                    error: e.to_string(),
                });
                return Err(e);
            }
        };

        reporter.report(ProgressEvent::CatalogLoaded {
            podcast_count: podcasts.len(),
        });

        Ok(Self::with_catalog(
            client,
            config,
            reporter,
            Catalog::new(podcasts),
        ))
    }

    /// Set up a session around an already loaded catalog
    pub fn with_catalog(
        client: C,
        config: ApiConfig,
        reporter: SharedProgressReporter,
        catalog: Catalog,
    ) -> Self {
        Self {
            client,
            config,
            reporter,
            catalog,
            query: CatalogQuery::default(),
            detail: ShowDetail::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut CatalogQuery {
        &mut self.query
    }

    pub fn detail(&self) -> &ShowDetail {
        &self.detail
    }

    /// The catalog view for the current query, rendered
    pub fn render_view(&self) -> String {
        render_catalog(&self.catalog.view(&self.query))
    }

    /// Run one command against the session.
    ///
    /// Fetch failures while opening a show are not errors here: they end up
    /// in the detail view as its error message.
    pub async fn execute(&mut self, command: Command) -> Result<Outcome, BrowseError> {
        let output = match command {
            Command::List => self.render_view(),
            Command::Search(text) => {
                self.query.search = text;
                self.render_view()
            }
            Command::Genre(None) => {
                self.query.genre = None;
                self.render_view()
            }
            Command::Genre(Some(input)) => {
                let genre = Genre::lookup(&input).ok_or(BrowseError::UnknownGenre(input))?;
                self.query.genre = Some(genre.id);
                self.render_view()
            }
            Command::Sort(sort) => {
                self.query.sort = sort;
                self.render_view()
            }
            Command::Genres => render_genres(),
            Command::Open(id) => {
                self.detail
                    .load(&self.client, &self.config, &id, &self.reporter)
                    .await;
                render_detail(&self.detail)
            }
            Command::Season(id) => {
                if self.detail.requested_id().is_none() {
                    return Err(BrowseError::NoShowOpen);
                }
                self.detail.expansion_mut().toggle_season(id);
                render_detail(&self.detail)
            }
            Command::Episode(id) => {
                if self.detail.requested_id().is_none() {
                    return Err(BrowseError::NoShowOpen);
                }
                let season = self
                    .detail
                    .expansion()
                    .expanded_season()
                    .cloned()
                    .ok_or(BrowseError::NoSeasonExpanded)?;
                self.detail
                    .expansion_mut()
                    .toggle_episode(EpisodeKey::new(season, id));
                render_detail(&self.detail)
            }
            Command::Back => {
                self.detail.clear();
                self.render_view()
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Output(output))
    }
}
