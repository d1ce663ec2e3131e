use serde::de::DeserializeOwned;

use crate::client::ResourceClient;
use crate::error::Error;
use crate::types::{Author, ContentPagination};

/// Accessor for the v2 `/authors` resource.
#[derive(Debug, Clone)]
pub struct Authors {
    client: ResourceClient,
}

impl Authors {
    pub(crate) fn new(http: reqwest::Client, base: &str) -> Result<Self, Error> {
        Ok(Self {
            client: ResourceClient::new(http, base, "authors")?,
        })
    }

    /// Fetch every author in the organization.
    pub async fn list(&self) -> Result<Vec<Author>, Error> {
        self.client.get("").await
    }

    /// Fetch one page of an author's content items by author name.
    pub async fn list_paginated<T: DeserializeOwned>(
        &self,
        name: &str,
        limit: u32,
        page: u32,
    ) -> Result<ContentPagination<T>, Error> {
        self.client
            .get_with_params(
                name,
                &[("limit", limit.to_string()), ("page", page.to_string())],
            )
            .await
    }
}
