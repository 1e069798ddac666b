//! Shared outbound HTTP plumbing for providers.

use std::time::Duration;

use reqwest::{header, Client};
use tracing::debug;

use crate::errors::MarketDataError;

/// Default bound on a single provider request.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Build a client whose every request is bounded by `timeout`.
pub fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .default_headers({
            let mut headers = header::HeaderMap::new();
            headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT));
            headers
        })
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// GET `url` and return the body, mapping transport and status failures.
pub async fn fetch_text(
    client: &Client,
    provider: &str,
    url: &str,
) -> Result<String, MarketDataError> {
    debug!("{} GET {}", provider, url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| MarketDataError::from_reqwest(provider, e))?;

    if !response.status().is_success() {
        return Err(MarketDataError::Http {
            provider: provider.to_string(),
            status: response.status().as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| MarketDataError::from_reqwest(provider, e))
}
