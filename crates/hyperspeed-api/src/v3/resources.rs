use serde::de::DeserializeOwned;

use crate::client::ResourceClient;
use crate::error::Error;
use crate::v3::query::{CreateArgs, QueryArgs};

/// Declares a v3 accessor: a struct scoped to one resource sub-path
/// with the query-forwarding `find_first`/`find_many` pair.
macro_rules! v3_resource {
    ($(#[$doc:meta])* $name:ident, $path:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            client: ResourceClient,
        }

        impl $name {
            pub(crate) fn new(http: reqwest::Client, base: &str) -> Result<Self, Error> {
                Ok(Self {
                    client: ResourceClient::new(http, base, $path)?,
                })
            }

            /// Fetch the first record matching `args`, or `None` when
            /// the server answers with JSON `null`.
            pub async fn find_first<T: DeserializeOwned>(
                &self,
                args: &QueryArgs,
            ) -> Result<Option<T>, Error> {
                self.client.post("find-first", args).await
            }

            /// Fetch every record matching `args`.
            pub async fn find_many<T: DeserializeOwned>(
                &self,
                args: &QueryArgs,
            ) -> Result<Vec<T>, Error> {
                self.client.post("find-many", args).await
            }
        }
    };
}

v3_resource!(
    /// v3 accessor for collections.
    CollectionsV3,
    "collections"
);

v3_resource!(
    /// v3 accessor for content items.
    ContentV3,
    "content"
);

v3_resource!(
    /// v3 accessor for authors.
    AuthorsV3,
    "authors"
);

v3_resource!(
    /// v3 accessor for comments; the one v3 resource that also creates.
    CommentsV3,
    "comments"
);

v3_resource!(
    /// v3 accessor for categories.
    CategoriesV3,
    "categories"
);

v3_resource!(
    /// v3 accessor for links.
    LinksV3,
    "links"
);

impl CommentsV3 {
    /// Create a comment from a Prisma-style creation description and
    /// return the created record as the server shaped it.
    pub async fn create<T: DeserializeOwned>(&self, args: &CreateArgs) -> Result<T, Error> {
        self.client.post("create", args).await
    }
}
