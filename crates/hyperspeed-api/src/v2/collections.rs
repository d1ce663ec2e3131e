use crate::client::ResourceClient;
use crate::error::Error;
use crate::types::{Collection, ContentSlug};

/// Accessor for the v2 `/collections` resource (collection metadata,
/// not the content inside it — that's [`Contents`](super::Contents)).
#[derive(Debug, Clone)]
pub struct Collections {
    client: ResourceClient,
}

impl Collections {
    pub(crate) fn new(http: reqwest::Client, base: &str) -> Result<Self, Error> {
        Ok(Self {
            client: ResourceClient::new(http, base, "collections")?,
        })
    }

    /// Fetch every collection in the organization.
    ///
    /// Useful for verifying collection names or debugging an
    /// integration; does *not* fetch the content within them.
    pub async fn list(&self) -> Result<Vec<Collection>, Error> {
        self.client.get("").await
    }

    /// Fetch a single collection by name.
    pub async fn get(&self, name: &str) -> Result<Collection, Error> {
        self.client.get(name).await
    }

    /// Fetch every content slug in a collection, primarily for
    /// generating static paths ahead of time.
    pub async fn list_slugs(&self, name: &str) -> Result<Vec<ContentSlug>, Error> {
        self.client.get(&format!("{name}/slugs")).await
    }
}
