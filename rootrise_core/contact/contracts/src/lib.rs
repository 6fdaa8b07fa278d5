use std::future::Future;

use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate a contact form submission and record it.
    fn submit(
        &self,
        input: ContactSubmissionInput,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

/// Raw contact form payload as received from the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmissionInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Name, email, and message are required.")]
    Validation,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        input: ContactSubmissionInput,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(input))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
