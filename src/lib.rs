pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod expansion;
pub mod genre;
pub mod http;
pub mod progress;
pub mod render;

// Re-export main types for convenience
pub use api::{Episode, Podcast, RecordId, Season, Show, fetch_catalog, fetch_show};
pub use app::{Browser, Command, Outcome};
pub use catalog::{Catalog, CatalogQuery, SortKey};
pub use config::ApiConfig;
pub use detail::{DetailRequest, DetailStatus, ShowDetail};
pub use error::{BrowseError, CommandError, ConfigError, FetchError, FetchErrorKind};
pub use expansion::{EpisodeKey, ExpansionState};
pub use genre::Genre;
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use progress::{
    NoopReporter, ProgressEvent, ProgressReporter, SharedProgressReporter, TracingReporter,
};
