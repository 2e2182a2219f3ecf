#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("missing required field {0}")]
    MissingField(&'static str),

    #[error("comment store request failed: {0}")]
    Sync(String),

    #[error("contact relay request failed: {0}")]
    Relay(String),
}

impl Error {
    /// Validation failures are the only non-retryable errors: resubmitting
    /// the same empty field can never succeed. Store and relay failures left
    /// no partial side effect and can always be retried as-is.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Error::MissingField(_))
    }

    /// Short inline message for the form the error came from.
    pub fn user_message(&self) -> String {
        match self {
            Error::MissingField(field) => format!("Please fill in the {} field.", field),
            Error::Sync(_) => {
                String::from("An error occurred while sending your comment. Please try again.")
            }
            Error::Relay(_) => {
                String::from("An error occurred while sending the message. Please try again.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_validation_is_non_retryable() {
        assert!(!Error::MissingField("name").is_retryable());
        assert!(Error::Sync(String::from("boom")).is_retryable());
        assert!(Error::Relay(String::from("boom")).is_retryable());
    }
}
