//! Blocking download of source bulletins.
//!
//! The source files are static archival data, so a failed fetch is fatal
//! and never retried; there is no caching of downloaded content.

use reqwest::blocking::Client;
use tracing::info;

use crate::error::{Result, SwpcError};

/// Fetch a bulletin as text over HTTP. Non-success statuses are errors.
pub fn fetch_text(url: &str) -> Result<String> {
    info!("downloading {}", url);

    let client = Client::new();
    let response = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .map_err(|source| SwpcError::Download {
            url: url.to_string(),
            source,
        })?;

    response.text().map_err(|source| SwpcError::Download {
        url: url.to_string(),
        source,
    })
}
