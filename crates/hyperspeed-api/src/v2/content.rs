use serde::de::DeserializeOwned;

use crate::client::{ResourceClient, encode_component};
use crate::error::Error;
use crate::types::{Category, Content, ContentPagination, ContentSingle, SlugLookup};

/// Accessor for content items within v2 collections.
///
/// Listing methods are generic over `T`, the caller-defined shape of
/// the collection's custom fields (surfaced as each item's `data`);
/// use [`serde_json::Value`] when the shape is unknown.
#[derive(Debug, Clone)]
pub struct Contents {
    client: ResourceClient,
}

impl Contents {
    pub(crate) fn new(http: reqwest::Client, base: &str) -> Result<Self, Error> {
        Ok(Self {
            client: ResourceClient::new(http, base, "collections")?,
        })
    }

    /// Fetch all content items in a collection, unpaginated.
    pub async fn list<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<Content<T>>, Error> {
        self.client.get(&format!("{name}/content")).await
    }

    /// Fetch one page of content items from a collection.
    ///
    /// Page-boundary semantics live server-side: the envelope's
    /// `next_page`/`prev_page` are `None` at the respective edge.
    pub async fn list_paginated<T: DeserializeOwned>(
        &self,
        name: &str,
        limit: u32,
        page: u32,
    ) -> Result<ContentPagination<T>, Error> {
        self.client
            .get_with_params(
                &format!("{name}/paginated"),
                &[("limit", limit.to_string()), ("page", page.to_string())],
            )
            .await
    }

    /// Fetch one page of content items from a single category within a
    /// collection.
    pub async fn list_paginated_by_category<T: DeserializeOwned>(
        &self,
        name: &str,
        category: &str,
        limit: u32,
        page: u32,
    ) -> Result<ContentPagination<T>, Error> {
        self.client
            .get_with_params(
                &format!("{name}/category/{category}"),
                &[("limit", limit.to_string()), ("page", page.to_string())],
            )
            .await
    }

    /// Full-text search across the organization's content.
    ///
    /// The query term is percent-encoded here (space → `%20`) and sent
    /// as the `q` parameter without further encoding.
    pub async fn search<T: DeserializeOwned>(
        &self,
        query: &str,
        limit: u32,
        page: u32,
    ) -> Result<ContentPagination<T>, Error> {
        let q = encode_component(query);
        self.client
            .get_with_raw_query("search", &format!("limit={limit}&page={page}&q={q}"))
            .await
    }

    /// Fetch the categories defined on a collection.
    pub async fn list_categories(&self, name: &str) -> Result<Vec<Category>, Error> {
        self.client.get(&format!("{name}/category")).await
    }

    /// Fetch a single content item by slug, with everything attached
    /// for page rendering. `page`/`limit` paginate the item's comment
    /// tree and are only sent when given.
    pub async fn get<T: DeserializeOwned>(
        &self,
        name: &str,
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
            .get_with_params(&format!("{name}/{slug}"), &params)
            .await
    }

    /// Look up a slug and collection path prefix from a content id,
    /// for expanding shortlinks.
    pub async fn slug_from_id(&self, id: u64) -> Result<SlugLookup, Error> {
        self.client.get(&format!("content/{id}")).await
    }

    /// Fetch `limit` content items sampled without bias, optionally
    /// excluding one slug (e.g. the item currently being viewed).
    /// Randomness is server-side; no uniqueness or seed guarantee.
    pub async fn list_random<T: DeserializeOwned>(
        &self,
        name: &str,
        limit: u32,
        exclude: Option<&str>,
    ) -> Result<Vec<Content<T>>, Error> {
        let mut params = vec![("limit", limit.to_string())];
        if let Some(exclude) = exclude {
            params.push(("exclude", exclude.to_owned()));
        }

        self.client
            .get_with_params(&format!("{name}/random"), &params)
            .await
    }
}
