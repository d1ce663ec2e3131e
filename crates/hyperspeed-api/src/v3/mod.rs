// Prisma-like v3 surface of the Hyperspeed API.
//
// Every resource exposes find_first/find_many, forwarding a free-form
// query description as the POST body. The client performs no local
// filtering, sorting, or validation of that object.

mod query;
mod resources;

pub use query::{CreateArgs, QueryArgs};
pub use resources::{AuthorsV3, CategoriesV3, CollectionsV3, CommentsV3, ContentV3, LinksV3};

use crate::config::{ApiVersion, HyperspeedConfig};
use crate::error::Error;

/// Facade over the v3 resource set.
///
/// v3 is the only surface with `categories` and `links`; `messages`
/// and `posts` exist only on [`HyperspeedV2`](crate::HyperspeedV2).
#[derive(Debug, Clone)]
pub struct HyperspeedV3 {
    pub collections: CollectionsV3,
    pub content: ContentV3,
    pub authors: AuthorsV3,
    pub comments: CommentsV3,
    pub categories: CategoriesV3,
    pub links: LinksV3,
}

impl HyperspeedV3 {
    /// Build the v3 resource set from `config`.
    ///
    /// Ignores `config.version`; use [`Hyperspeed::new`](crate::Hyperspeed::new)
    /// for version dispatch.
    pub fn new(config: &HyperspeedConfig) -> Result<Self, Error> {
        let headers = config.default_headers()?;
        let http = config.transport.build_client_with_headers(headers)?;
        let base = config.base_url_for(ApiVersion::V3);

        Ok(Self {
            collections: CollectionsV3::new(http.clone(), &base)?,
            content: ContentV3::new(http.clone(), &base)?,
            authors: AuthorsV3::new(http.clone(), &base)?,
            comments: CommentsV3::new(http.clone(), &base)?,
            categories: CategoriesV3::new(http.clone(), &base)?,
            links: LinksV3::new(http, &base)?,
        })
    }
}
