use rootrise_core_contact_contracts::{
    ContactFeatureService, ContactSubmissionInput, ContactSubmitError,
};
use rootrise_models::contact::ContactSubmission;
use tracing::info;

/// Accepts contact submissions and records them in the operational log.
///
/// Delivering submissions anywhere else (email, CRM, ...) is not implemented.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFeatureServiceImpl;

impl ContactFeatureService for ContactFeatureServiceImpl {
    async fn submit(&self, input: ContactSubmissionInput) -> Result<(), ContactSubmitError> {
        let ContactSubmissionInput {
            name,
            email,
            message,
        } = input;

        let submission = ContactSubmission::from_parts(name, email, message)
            .ok_or(ContactSubmitError::Validation)?;

        info!(
            target: "rootrise::contact",
            name = %submission.name,
            email = %submission.email,
            message = submission.preview(),
            "received contact submission"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rootrise_utils::assert_matches;

    use super::*;

    fn input(name: &str, email: &str, message: &str) -> ContactSubmissionInput {
        ContactSubmissionInput {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let sut = ContactFeatureServiceImpl;

        // Act
        let result = sut.submit(input("Sam", "s@x.com", "hi")).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn empty_email() {
        // Arrange
        let sut = ContactFeatureServiceImpl;

        // Act
        let result = sut.submit(input("Sam", "", "hi")).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Validation));
    }

    #[tokio::test]
    async fn whitespace_only_message() {
        // Arrange
        let sut = ContactFeatureServiceImpl;

        // Act
        let result = sut.submit(input("Sam", "s@x.com", " \t\n")).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Validation));
    }

    #[tokio::test]
    async fn missing_fields() {
        // Arrange
        let sut = ContactFeatureServiceImpl;

        // Act
        let result = sut.submit(ContactSubmissionInput::default()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Validation));
    }

    #[test]
    fn validation_error_text() {
        assert_eq!(
            ContactSubmitError::Validation.to_string(),
            "Name, email, and message are required."
        );
    }
}
