use crate::Error;

/// A contact-form submission, relayed form-encoded to the third-party
/// endpoint.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Result<ContactMessage, Error> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();
        if name.is_empty() {
            return Err(Error::MissingField("name"));
        }
        if email.is_empty() {
            return Err(Error::MissingField("email"));
        }
        if message.is_empty() {
            return Err(Error::MissingField("message"));
        }
        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_every_field() {
        assert_eq!(
            ContactMessage::new("", "a@b.c", "hi"),
            Err(Error::MissingField("name"))
        );
        assert_eq!(
            ContactMessage::new("Ana", "", "hi"),
            Err(Error::MissingField("email"))
        );
        assert_eq!(
            ContactMessage::new("Ana", "a@b.c", "\n"),
            Err(Error::MissingField("message"))
        );
        assert!(ContactMessage::new("Ana", "a@b.c", "hi").is_ok());
    }
}
