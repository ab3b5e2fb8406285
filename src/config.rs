// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;
use crate::http::ReqwestClient;

/// Base URL of the public podcast directory API
pub const DEFAULT_API_BASE: &str = "https://podcast-api.netlify.app";

/// Request timeout applied when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the directory API lives and how long to wait for it
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Create a configuration for the API rooted at `base`
    pub fn new(base: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base)?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::NotABaseUrl(base.to_string()));
        }

        Ok(Self { base_url, timeout })
    }

    /// Endpoint returning the full catalog of podcast summaries
    pub fn catalog_url(&self) -> Url {
        self.base_url.clone()
    }

    /// Endpoint returning one show detail record: `{base}/id/{id}`
    pub fn show_url(&self, id: &str) -> Url {
        let mut url = self.base_url.clone();
        // Cannot fail: `new` rejects cannot-be-a-base URLs
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("id").push(id);
        }
        url
    }

    /// Build the HTTP client matching this configuration
    pub fn client(&self) -> Result<ReqwestClient, ConfigError> {
        Ok(ReqwestClient::with_timeout(self.timeout)?)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_BASE).expect("valid default API URL"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_api() {
        let config = ApiConfig::default();
        assert_eq!(
            config.catalog_url().as_str(),
            "https://podcast-api.netlify.app/"
        );
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn show_url_appends_id_segment() {
        let config = ApiConfig::default();
        assert_eq!(
            config.show_url("10716").as_str(),
            "https://podcast-api.netlify.app/id/10716"
        );
    }

    #[test]
    fn show_url_keeps_base_path_and_escapes_id() {
        let config = ApiConfig::new("http://localhost:8080/api/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            config.show_url("a b/c").as_str(),
            "http://localhost:8080/api/id/a%20b%2Fc"
        );
    }

    #[test]
    fn rejects_invalid_urls() {
        assert!(matches!(
            ApiConfig::new("not a url", DEFAULT_TIMEOUT),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert!(matches!(
            ApiConfig::new("mailto:someone@example.com", DEFAULT_TIMEOUT),
            Err(ConfigError::NotABaseUrl(_))
        ));
    }
}
