use std::sync::Arc;

use tracing::{debug, info, warn};

/// Events emitted while the browser talks to the directory API
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// The catalog is being fetched
    FetchingCatalog { url: String },

    /// The catalog has been fetched and parsed
    CatalogLoaded { podcast_count: usize },

    /// A show detail record is being fetched
    FetchingShow {
        id: String,
        url: String,
        /// Generation tag of this request
        generation: u64,
    },

    /// A show detail record arrived and is now displayed
    ShowLoaded {
        id: String,
        title: String,
        season_count: usize,
        episode_count: usize,
    },

    /// Fetching the catalog or a show failed
    FetchFailed { url: String, error: String },
}

/// Trait for reporting progress events.
///
/// Implementations can use this to display spinners, log messages,
/// or collect events in tests.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event
    fn report(&self, event: ProgressEvent);
}

/// A shared reference to a progress reporter
pub type SharedProgressReporter = Arc<dyn ProgressReporter>;

/// A no-op progress reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: ProgressEvent) {
        // Intentionally empty
    }
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}

/// Forwards every event to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}

impl ProgressReporter for TracingReporter {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::FetchingCatalog { url } => debug!(%url, "fetching catalog"),
            ProgressEvent::CatalogLoaded { podcast_count } => {
                info!(podcast_count, "catalog loaded")
            }
            ProgressEvent::FetchingShow {
                id,
                url,
                generation,
            } => debug!(%id, %url, generation, "fetching show"),
            ProgressEvent::ShowLoaded {
                id,
                title,
                season_count,
                episode_count,
            } => info!(%id, %title, season_count, episode_count, "show loaded"),
            ProgressEvent::FetchFailed { url, error } => warn!(%url, %error, "fetch failed"),
        }
    }
}

/// Records every event; for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingReporter {
    events: std::sync::Mutex<Vec<ProgressEvent>>,
}

#[cfg(test)]
impl RecordingReporter {
    pub(crate) fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl ProgressReporter for RecordingReporter {
    fn report(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}
