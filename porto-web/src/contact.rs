use porto_client::api::{ContactMessage, Error};

use crate::config;

/// Post the contact form to the relay. Success is any 2xx JSON answer;
/// everything else is a retryable `Relay` error and the form stays filled.
pub async fn send_message(msg: &ContactMessage) -> Result<(), Error> {
    let resp = crate::CLIENT
        .post(config::CONTACT_RELAY_URL)
        .header("Accept", "application/json")
        .form(msg)
        .send()
        .await
        .map_err(|e| Error::Relay(e.to_string()))?;
    match resp.status().is_success() {
        true => Ok(()),
        false => Err(Error::Relay(format!("relay answered {}", resp.status()))),
    }
}
