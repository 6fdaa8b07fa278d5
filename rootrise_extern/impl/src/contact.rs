use std::sync::Arc;

use anyhow::Context;
use rootrise_extern_contracts::contact::{
    ContactApiError, ContactApiResponse, ContactApiService, ContactPayload,
};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::http::json_client;

pub const CONTACT_ROUTE: &str = "api/contact";

#[derive(Debug, Clone)]
pub struct ContactApiServiceImpl {
    config: ContactApiServiceConfig,
    client: reqwest::Client,
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceConfig {
    endpoint: Arc<Url>,
}

impl ContactApiServiceConfig {
    /// Targets the contact endpoint of the site served at `base_url`.
    pub fn new(base_url: &Url) -> anyhow::Result<Self> {
        let endpoint = base_url
            .join(CONTACT_ROUTE)
            .with_context(|| format!("Invalid base url: {base_url}"))?;
        Ok(Self {
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ContactApiServiceImpl {
    pub fn new(config: ContactApiServiceConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            client: json_client()?,
        })
    }
}

impl ContactApiService for ContactApiServiceImpl {
    async fn submit(
        &self,
        payload: &ContactPayload,
    ) -> Result<ContactApiResponse, ContactApiError> {
        let response = self
            .client
            .post((*self.config.endpoint).clone())
            .json(payload)
            .send()
            .await
            .map_err(|err| ContactApiError::Transport(err.into()))?;

        let status = response.status();

        // Anything that is not the expected JSON is treated like an empty body.
        let body = response
            .json::<ContactResponseBody>()
            .await
            .inspect_err(|err| debug!(%status, "failed to parse contact response body: {err}"))
            .unwrap_or_default();

        Ok(ContactApiResponse {
            accepted: status.is_success() && body.success,
            error: body.error.filter(|error| !error.is_empty()),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct ContactResponseBody {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}
