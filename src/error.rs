use thiserror::Error;

/// Errors that can occur when fetching catalog or show data from the API
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Malformed response from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No show found with id '{id}'")]
    NotFound { id: String },
}

/// Coarse classification of a [`FetchError`], as surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Network failure, timeout or non-success status
    FetchFailed,
    /// Successful response without a usable record
    NotFound,
    /// Response body did not match the expected shape
    Malformed,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Request { .. } | Self::HttpStatus { .. } => FetchErrorKind::FetchFailed,
            Self::NotFound { .. } => FetchErrorKind::NotFound,
            Self::Malformed { .. } => FetchErrorKind::Malformed,
        }
    }
}

/// Errors in the API configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid API base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("API base URL cannot carry a path: {0}")]
    NotABaseUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// Errors while parsing an interactive command line
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("'{command}' needs an argument: {usage}")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },

    #[error("Unknown sort key '{0}' (expected newest, oldest, title-asc or title-desc)")]
    InvalidSortKey(String),
}

/// Errors raised by the browser state container
#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("Unknown genre '{0}' (run 'genres' to list them)")]
    UnknownGenre(String),

    #[error("No show is open (use 'open <id>' first)")]
    NoShowOpen,

    #[error("No season is expanded (use 'season <id>' first)")]
    NoSeasonExpanded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_classifies_variants() {
        let status = FetchError::HttpStatus {
            url: "https://example.com/id/1".to_string(),
            status: 404,
        };
        assert_eq!(status.kind(), FetchErrorKind::FetchFailed);

        let missing = FetchError::NotFound {
            id: "1".to_string(),
        };
        assert_eq!(missing.kind(), FetchErrorKind::NotFound);

        let malformed = FetchError::Malformed {
            url: "https://example.com".to_string(),
            source: serde_json::from_str::<u32>("nope").unwrap_err(),
        };
        assert_eq!(malformed.kind(), FetchErrorKind::Malformed);
    }

    #[test]
    fn messages_are_human_readable() {
        let err = FetchError::HttpStatus {
            url: "https://example.com/id/7".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "HTTP error 404 for https://example.com/id/7");

        let err = FetchError::NotFound {
            id: "7".to_string(),
        };
        assert_eq!(err.to_string(), "No show found with id '7'");

        let err = BrowseError::UnknownGenre("Jazz".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown genre 'Jazz' (run 'genres' to list them)"
        );
    }
}
