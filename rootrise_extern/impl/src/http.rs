use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use rootrise_utils::rootrise_version;

/// Identifies the website tooling to the site it talks to.
pub fn user_agent() -> String {
    format!(
        "rootrise/{} (+{}; {})",
        rootrise_version(),
        env!("CARGO_PKG_HOMEPAGE"),
        env!("CARGO_PKG_REPOSITORY"),
    )
}

/// Client for the JSON endpoints of a running site.
pub(crate) fn json_client() -> anyhow::Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .user_agent(user_agent())
        .default_headers(headers)
        .build()
        .context("Failed to build HTTP client")
}
