use crate::client::ResourceClient;
use crate::error::Error;
use crate::types::{CommentPayload, MessageResponse};

/// Accessor for submitting comments on v2 content items.
#[derive(Debug, Clone)]
pub struct Comments {
    client: ResourceClient,
}

impl Comments {
    pub(crate) fn new(http: reqwest::Client, base: &str) -> Result<Self, Error> {
        Ok(Self {
            client: ResourceClient::new(http, base, "comments")?,
        })
    }

    /// Post a new comment on the content item with id `content_id`.
    ///
    /// The server's outcome is returned verbatim: a 2xx body carrying
    /// `error` comes back as [`MessageResponse::Error`], not an `Err`.
    pub async fn create(
        &self,
        content_id: u64,
        payload: &CommentPayload,
    ) -> Result<MessageResponse, Error> {
        self.client.post(&content_id.to_string(), payload).await
    }
}
