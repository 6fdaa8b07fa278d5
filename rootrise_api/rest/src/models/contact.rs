use rootrise_core_contact_contracts::ContactSubmissionInput;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl From<ApiContactSubmission> for ContactSubmissionInput {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}
