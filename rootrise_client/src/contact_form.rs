use rootrise_extern_contracts::contact::{
    ContactApiError, ContactApiResponse, ContactApiService, ContactPayload,
};
use tracing::{debug, warn};

pub const THANK_YOU_MESSAGE: &str = "Thank you! We'll get back to you soon.";
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Sending,
    Success,
    Error(String),
}

/// What the contact form area currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormDisplay<'a> {
    /// The form itself; `error` is rendered beneath the fields.
    Form {
        submit_label: &'static str,
        submit_enabled: bool,
        error: Option<&'a str>,
    },
    ThankYou(&'static str),
}

/// State of the contact form on the contact page.
///
/// A submission is a single request; the form never retries on its own.
#[derive(Debug)]
pub struct ContactForm<Api> {
    api: Api,
    fields: ContactPayload,
    status: FormStatus,
}

impl<Api> ContactForm<Api>
where
    Api: ContactApiService,
{
    pub fn new(api: Api) -> Self {
        Self {
            api,
            fields: ContactPayload::default(),
            status: FormStatus::Idle,
        }
    }

    pub fn fields(&self) -> &ContactPayload {
        &self.fields
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.fields.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.fields.email = email.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.fields.message = message.into();
    }

    /// The submit control is disabled while a submission is in flight.
    pub fn can_submit(&self) -> bool {
        self.status != FormStatus::Sending
    }

    pub fn display(&self) -> FormDisplay<'_> {
        match &self.status {
            FormStatus::Success => FormDisplay::ThankYou(THANK_YOU_MESSAGE),
            status => FormDisplay::Form {
                submit_label: if *status == FormStatus::Sending {
                    "Sending…"
                } else {
                    "Send Inquiry"
                },
                submit_enabled: self.can_submit(),
                error: match status {
                    FormStatus::Error(error) => Some(error.as_str()),
                    _ => None,
                },
            },
        }
    }

    /// Enters the sending state and returns the payload to send, or `None` if
    /// a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if !self.can_submit() {
            debug!("ignoring submit while a submission is in flight");
            return None;
        }

        self.status = FormStatus::Sending;
        Some(self.fields.clone())
    }

    /// Applies the outcome of the request started by [`Self::begin_submit`].
    pub fn complete_submit(&mut self, result: Result<ContactApiResponse, ContactApiError>) {
        self.status = match result {
            Ok(ContactApiResponse { accepted: true, .. }) => {
                self.fields = ContactPayload::default();
                FormStatus::Success
            }
            Ok(ContactApiResponse {
                accepted: false,
                error,
            }) => FormStatus::Error(error.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.into())),
            Err(err) => {
                warn!("failed to submit contact form: {err}");
                FormStatus::Error(NETWORK_ERROR_MESSAGE.into())
            }
        };
    }

    /// Submits the current field values. Does nothing while a submission is
    /// already in flight.
    pub async fn submit(&mut self) {
        let Some(payload) = self.begin_submit() else {
            return;
        };
        let result = self.api.submit(&payload).await;
        self.complete_submit(result);
    }
}
