use serde::de::DeserializeOwned;

use crate::client::ResourceClient;
use crate::error::Error;
use crate::types::ContentSingle;

/// Accessor for fetching a single post by slug without naming its
/// collection (v2 only). Routes under `/content/content/{slug}`.
#[derive(Debug, Clone)]
pub struct Posts {
    client: ResourceClient,
}

impl Posts {
    pub(crate) fn new(http: reqwest::Client, base: &str) -> Result<Self, Error> {
        Ok(Self {
            client: ResourceClient::new(http, base, "content")?,
        })
    }

    /// Fetch a post by slug. `page`/`limit` paginate the comment tree
    /// and are only sent when given.
    pub async fn get<T: DeserializeOwned>(
        &self,
        slug: &str,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<ContentSingle<T>, Error> {
        let mut params = Vec::new();
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(page) = page {
            params.push(("page", page.to_string()));
        }

        self.client
            .get_with_params(&format!("content/{slug}"), &params)
            .await
    }
}
