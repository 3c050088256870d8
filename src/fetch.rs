use reqwest::Client;

use crate::error::{Result, ScrapeError};

/// GETs `url` and returns the response body. A network failure or a
/// non-success status is a [`ScrapeError::Fetch`]; nothing downstream
/// catches it, so one unreachable page fails the whole run.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|source| ScrapeError::Fetch {
            url: url.to_string(),
            source,
        })?;

    response.text().await.map_err(|source| ScrapeError::Fetch {
        url: url.to_string(),
        source,
    })
}
