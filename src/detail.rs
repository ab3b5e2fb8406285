// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::debug;

use crate::api::{Show, fetch_show};
use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::expansion::ExpansionState;
use crate::http::HttpClient;
use crate::progress::{ProgressEvent, SharedProgressReporter};

/// Where the show detail view currently stands
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Loaded(Show),
    /// The request failed; holds the message shown in place of the show
    Failed(String),
}

/// Ticket for one detail request, tagged with its generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub id: String,
    pub generation: u64,
}

/// State of the show detail view.
///
/// Every request started with [`ShowDetail::begin`] gets a new generation.
/// Only the result for the latest generation is applied, so the displayed
/// record always belongs to the most recently requested id.
#[derive(Debug, Default)]
pub struct ShowDetail {
    generation: u64,
    requested: Option<String>,
    status: DetailStatus,
    expansion: ExpansionState,
}

impl ShowDetail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `id`: switch to loading and clear any error.
    /// Requesting a different show collapses all seasons and episodes.
    pub fn begin(&mut self, id: &str) -> DetailRequest {
        self.generation += 1;

        if self.requested.as_deref() != Some(id) {
            self.expansion.reset();
            self.requested = Some(id.to_string());
        }
        self.status = DetailStatus::Loading;

        DetailRequest {
            id: id.to_string(),
            generation: self.generation,
        }
    }

    /// Apply the outcome of a request.
    ///
    /// Returns `false` and leaves the state untouched when a newer request
    /// has been started since `request` was issued.
    pub fn resolve(&mut self, request: &DetailRequest, result: Result<Show, FetchError>) -> bool {
        if request.generation != self.generation {
            debug!(
                id = %request.id,
                generation = request.generation,
                latest_generation = self.generation,
                "stale show response discarded"
            );
            return false;
        }

        self.status = match result {
            Ok(show) => DetailStatus::Loaded(show),
            Err(e) => DetailStatus::Failed(e.to_string()),
        };
        true
    }

    /// Fetch the show `id` and apply the result.
    ///
    /// This holds `&mut self` until the response is in, so requests made
    /// through it never overlap. A caller that keeps the view responsive
    /// while a fetch is in flight must use [`ShowDetail::begin`] and
    /// [`ShowDetail::resolve`] instead, which drop superseded results.
    pub async fn load<C: HttpClient>(
        &mut self,
        client: &C,
        config: &ApiConfig,
        id: &str,
        reporter: &SharedProgressReporter,
    ) -> &DetailStatus {
        let request = self.begin(id);

        reporter.report(ProgressEvent::FetchingShow {
            id: id.to_string(),
            url: config.show_url(id).to_string(),
            generation: request.generation,
        });

        let result = fetch_show(client, config, id).await;
        let event = match &result {
            Ok(show) => ProgressEvent::ShowLoaded {
                id: show.id.to_string(),
                title: show.title.clone(),
                season_count: show.seasons.len(),
                episode_count: show.episode_count(),
            },
            Err(e) => ProgressEvent::FetchFailed {
                url: config.show_url(id).to_string(),
                error: e.to_string(),
            },
        };

        self.resolve(&request, result);
        reporter.report(event);

        &self.status
    }

    pub fn status(&self) -> &DetailStatus {
        &self.status
    }

    pub fn show(&self) -> Option<&Show> {
        match &self.status {
            DetailStatus::Loaded(show) => Some(show),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            DetailStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == DetailStatus::Loading
    }

    /// Id of the most recently requested show
    pub fn requested_id(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn expansion_mut(&mut self) -> &mut ExpansionState {
        &mut self.expansion
    }

    /// Back to the initial state, keeping the generation counter
    pub fn clear(&mut self) {
        self.requested = None;
        self.status = DetailStatus::Idle;
        self.expansion.reset();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    use crate::api::RecordId;
    use crate::http::mock::MockHttpClient;
    use crate::progress::{NoopReporter, RecordingReporter};

    const SHOW_ONE: &str = r#"{
      "id": "1", "title": "Sci-Fi Hour", "description": "Stories from the future",
      "updated": "2023-01-05T00:00:00Z",
      "seasons": [{"season": 1, "title": "Season 1", "episodes": []}]
    }"#;

    const SHOW_TWO: &str = r#"{
      "id": "2", "title": "Jazz Talk", "updated": "2023-01-09T00:00:00Z", "seasons": []
    }"#;

    fn client(config: &ApiConfig) -> MockHttpClient {
        MockHttpClient::new()
            .route(config.show_url("1").as_str(), 200, SHOW_ONE)
            .route(config.show_url("2").as_str(), 200, SHOW_TWO)
            .route(config.show_url("empty").as_str(), 200, "null")
    }

    #[tokio::test]
    async fn successful_load_ends_loaded_with_title() {
        let config = ApiConfig::default();
        let client = client(&config);
        let mut detail = ShowDetail::new();

        detail.load(&client, &config, "1", &NoopReporter::shared()).await;

        assert!(!detail.is_loading());
        assert!(detail.error().is_none());
        assert_eq!(detail.show().map(|s| s.title.as_str()), Some("Sci-Fi Hour"));
    }

    #[tokio::test]
    async fn failed_load_ends_with_error_message() {
        let config = ApiConfig::default();
        let client = client(&config);
        let mut detail = ShowDetail::new();

        detail.load(&client, &config, "404", &NoopReporter::shared()).await;

        assert!(!detail.is_loading());
        assert!(detail.show().is_none());
        let message = detail.error().unwrap();
        assert!(!message.is_empty());
        assert!(message.contains("404"));
    }

    #[tokio::test]
    async fn null_record_is_reported_as_not_found() {
        let config = ApiConfig::default();
        let client = client(&config);
        let mut detail = ShowDetail::new();

        detail.load(&client, &config, "empty", &NoopReporter::shared()).await;

        assert_eq!(detail.error(), Some("No show found with id 'empty'"));
    }

    #[tokio::test]
    async fn load_reports_fetch_and_result_events() {
        let config = ApiConfig::default();
        let client = client(&config);
        let reporter = Arc::new(RecordingReporter::default());
        let shared: SharedProgressReporter = reporter.clone();
        let mut detail = ShowDetail::new();

        detail.load(&client, &config, "1", &shared).await;

        let events = reporter.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            ProgressEvent::FetchingShow { id, generation: 1, .. } if id == "1"
        ));
        assert!(matches!(
            &events[1],
            ProgressEvent::ShowLoaded { season_count: 1, .. }
        ));
    }

    #[tokio::test]
    async fn load_supersedes_a_pending_request() {
        let config = ApiConfig::default();
        let client = client(&config);
        let reporter = Arc::new(RecordingReporter::default());
        let shared: SharedProgressReporter = reporter.clone();
        let mut detail = ShowDetail::new();

        let pending = detail.begin("2");
        detail.load(&client, &config, "1", &shared).await;
        assert_eq!(detail.generation(), 2);

        // The ticket issued before the load is now stale
        let late = fetch_show(&client, &config, "2").await;
        assert!(!detail.resolve(&pending, late));
        assert_eq!(detail.show().map(|s| s.title.as_str()), Some("Sci-Fi Hour"));

        let events = reporter.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[1], ProgressEvent::ShowLoaded { id, .. } if id == "1"));
    }

    #[tokio::test]
    async fn stale_result_never_replaces_newer_one() {
        let config = ApiConfig::default();
        let client = client(&config);
        let mut detail = ShowDetail::new();

        let first = detail.begin("1");
        let second = detail.begin("2");

        let second_result = fetch_show(&client, &config, "2").await;
        assert!(detail.resolve(&second, second_result));

        // The earlier request resolves late and must be dropped
        let first_result = fetch_show(&client, &config, "1").await;
        assert!(!detail.resolve(&first, first_result));

        assert_eq!(detail.show().map(|s| s.title.as_str()), Some("Jazz Talk"));
        assert_eq!(detail.requested_id(), Some("2"));
    }

    #[tokio::test]
    async fn stale_failure_does_not_clear_loading_of_newer_request() {
        let config = ApiConfig::default();
        let client = client(&config);
        let mut detail = ShowDetail::new();

        let first = detail.begin("404");
        let _second = detail.begin("1");

        let first_result = fetch_show(&client, &config, "404").await;
        assert!(!detail.resolve(&first, first_result));
        assert!(detail.is_loading());
        assert!(detail.error().is_none());
    }

    #[test]
    fn begin_clears_previous_error() {
        let mut detail = ShowDetail::new();
        let request = detail.begin("1");
        detail.resolve(
            &request,
            Err(FetchError::NotFound {
                id: "1".to_string(),
            }),
        );
        assert!(detail.error().is_some());

        detail.begin("1");
        assert!(detail.is_loading());
        assert!(detail.error().is_none());
    }

    #[test]
    fn requesting_another_show_resets_expansion() {
        let mut detail = ShowDetail::new();

        detail.begin("1");
        detail.expansion_mut().toggle_season(RecordId::from("1"));

        // Reloading the same show keeps what is open
        detail.begin("1");
        assert!(detail.expansion().expanded_season().is_some());

        detail.begin("2");
        assert!(detail.expansion().expanded_season().is_none());
        assert_eq!(detail.generation(), 3);
    }

    #[test]
    fn clear_returns_to_idle() {
        let mut detail = ShowDetail::new();
        detail.begin("1");
        detail.clear();

        assert_eq!(detail.status(), &DetailStatus::Idle);
        assert!(detail.requested_id().is_none());
    }
}
