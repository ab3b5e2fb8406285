// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use bytes::Bytes;
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::http::HttpClient;

use super::parse::{Podcast, Show, parse_catalog, parse_show};

/// Fetch a response body, treating non-2xx statuses as failures
pub async fn fetch_body<C: HttpClient>(client: &C, url: &Url) -> Result<Bytes, FetchError> {
    let response = client
        .get(url.as_str())
        .await
        .map_err(|e| FetchError::Request {
            url: url.to_string(),
            source: e,
        })?;

    debug!(url = %url, status = response.status, bytes = response.body.len(), "response received");

    if !response.is_success() {
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            status: response.status,
        });
    }

    Ok(response.body)
}

/// Fetch and parse the full podcast catalog
pub async fn fetch_catalog<C: HttpClient>(
    client: &C,
    config: &ApiConfig,
) -> Result<Vec<Podcast>, FetchError> {
    let url = config.catalog_url();
    let body = fetch_body(client, &url).await?;
    parse_catalog(&body, &url)
}

/// Fetch and parse one show detail record
pub async fn fetch_show<C: HttpClient>(
    client: &C,
    config: &ApiConfig,
    id: &str,
) -> Result<Show, FetchError> {
    let url = config.show_url(id);
    let body = fetch_body(client, &url).await?;
    parse_show(&body, id, &url)
}
