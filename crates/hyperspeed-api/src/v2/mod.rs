// REST-style v2 surface of the Hyperspeed API.
//
// One accessor per resource, each scoped to its sub-path under the v2
// base URL. All accessors share the facade's reqwest::Client.

mod authors;
mod collections;
mod comments;
mod content;
mod messages;
mod posts;

pub use authors::Authors;
pub use collections::Collections;
pub use comments::Comments;
pub use content::Contents;
pub use messages::Messages;
pub use posts::Posts;

use crate::config::{ApiVersion, HyperspeedConfig};
use crate::error::Error;

/// Facade over the v2 resource set.
///
/// v2 is the only surface with `messages` and `posts`; `categories`
/// and `links` exist only on [`HyperspeedV3`](crate::HyperspeedV3).
#[derive(Debug, Clone)]
pub struct HyperspeedV2 {
    pub collections: Collections,
    pub content: Contents,
    pub authors: Authors,
    pub comments: Comments,
    pub messages: Messages,
    pub posts: Posts,
}

impl HyperspeedV2 {
    /// Build the v2 resource set from `config`.
    ///
    /// Ignores `config.version`; use [`Hyperspeed::new`](crate::Hyperspeed::new)
    /// for version dispatch.
    pub fn new(config: &HyperspeedConfig) -> Result<Self, Error> {
        let headers = config.default_headers()?;
        let http = config.transport.build_client_with_headers(headers)?;
        let base = config.base_url_for(ApiVersion::V2);

        Ok(Self {
            collections: Collections::new(http.clone(), &base)?,
            content: Contents::new(http.clone(), &base)?,
            authors: Authors::new(http.clone(), &base)?,
            comments: Comments::new(http.clone(), &base)?,
            messages: Messages::new(http.clone(), &base)?,
            posts: Posts::new(http, &base)?,
        })
    }
}
