use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::{header::ACCEPT, Client};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{UpstreamCall, UpstreamError};

const USER_AGENT: &str = concat!("thesaurus/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by both upstream services.
pub fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to create HTTP client")
}

/// Reject base URLs that cannot take path segments (e.g. `mailto:`).
pub(crate) fn check_base(base: &Url) -> Result<()> {
    if base.cannot_be_a_base() {
        bail!("{} cannot be used as a service base URL", base);
    }
    Ok(())
}

/// Append path segments to a base URL, percent-encoding each one.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// GET a JSON document, mapping every failure to an [`UpstreamError`].
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &Client,
    call: UpstreamCall,
    url: Url,
    timeout: Duration,
) -> Result<T, UpstreamError> {
    tracing::debug!(%call, %url, "Upstream request");

    let response = http
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| UpstreamError::from_reqwest(call, e, timeout))?;

    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status { call, status });
    }

    response
        .json()
        .await
        .map_err(|e| UpstreamError::from_reqwest(call, e, timeout))
}
