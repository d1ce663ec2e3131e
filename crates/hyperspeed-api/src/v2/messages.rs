use crate::client::ResourceClient;
use crate::error::Error;
use crate::types::{MessagePayload, MessageResponse};

/// Accessor for submitting contact-form messages (v2 only).
#[derive(Debug, Clone)]
pub struct Messages {
    client: ResourceClient,
}

impl Messages {
    pub(crate) fn new(http: reqwest::Client, base: &str) -> Result<Self, Error> {
        Ok(Self {
            client: ResourceClient::new(http, base, "messages")?,
        })
    }

    /// Submit a message; the server's outcome is returned verbatim.
    pub async fn create(&self, payload: &MessagePayload) -> Result<MessageResponse, Error> {
        self.client.post("", payload).await
    }
}
