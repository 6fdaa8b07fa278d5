use std::future::Future;

use serde::Serialize;
use thiserror::Error;

/// Client side access to the contact submission endpoint.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Send a single contact submission. There are no retries.
    fn submit(
        &self,
        payload: &ContactPayload,
    ) -> impl Future<Output = Result<ContactApiResponse, ContactApiError>> + Send;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Outcome of a request that reached the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactApiResponse {
    /// `true` only for a successful status code with `success: true` in the
    /// response body.
    pub accepted: bool,
    /// Human readable reason provided by the server, if any.
    pub error: Option<String>,
}

impl ContactApiResponse {
    pub fn accepted() -> Self {
        Self {
            accepted: true,
            error: None,
        }
    }

    pub fn rejected(error: Option<String>) -> Self {
        Self {
            accepted: false,
            error,
        }
    }
}

#[derive(Debug, Error)]
pub enum ContactApiError {
    #[error("Failed to reach the contact endpoint: {0}")]
    Transport(#[source] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactApiService {
    pub fn with_submit(
        mut self,
        payload: ContactPayload,
        result: Result<ContactApiResponse, ContactApiError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(payload))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
