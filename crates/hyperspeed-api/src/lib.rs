//! Async Rust client for the Hyperspeed headless CMS REST API.
//!
//! Two API surfaces coexist: v2 (REST-style accessors for collections,
//! content, authors, comments, messages, and posts) and v3 (Prisma-like
//! query forwarding for collections, content, authors, comments,
//! categories, and links). [`Hyperspeed::new`] selects one at
//! construction time; the two capability sets are mutually exclusive.
//!
//! Every request carries `Authorization: Bearer <api_key>`,
//! `Organization-Id`, and `Content-Type: application/json`. Failures
//! normalize into [`Error`]: the server's `error` message verbatim when
//! the body carries one, the transport failure otherwise.
//!
//! ```no_run
//! use hyperspeed_api::{ApiVersion, Hyperspeed, HyperspeedConfig};
//!
//! # async fn run() -> Result<(), hyperspeed_api::Error> {
//! let config = HyperspeedConfig::new("my-api-key", 42).with_version(ApiVersion::V2);
//! let client = Hyperspeed::new(&config)?;
//!
//! let v2 = client.v2().expect("configured for v2");
//! let page = v2
//!     .content
//!     .list_paginated::<serde_json::Value>("blog", 10, 1)
//!     .await?;
//! println!("{} items, {} pages", page.data.len(), page.total_pages);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;
pub mod v2;
pub mod v3;

pub use config::{ApiVersion, HyperspeedConfig};
pub use error::Error;
pub use transport::TransportConfig;
pub use v2::HyperspeedV2;
pub use v3::HyperspeedV3;

/// Version-dispatching facade over the Hyperspeed API.
///
/// The variant is chosen once from [`HyperspeedConfig::version`] and is
/// immutable thereafter; there is no migration or dual-write between
/// versions. Callers needing a capability only one surface has (v2
/// `messages`/`posts`, v3 `categories`/`links`) can construct
/// [`HyperspeedV2`] or [`HyperspeedV3`] directly.
#[derive(Debug, Clone)]
pub enum Hyperspeed {
    V2(HyperspeedV2),
    V3(HyperspeedV3),
}

impl Hyperspeed {
    /// Build the resource set for `config.version`.
    pub fn new(config: &HyperspeedConfig) -> Result<Self, Error> {
        match config.version {
            ApiVersion::V2 => Ok(Self::V2(HyperspeedV2::new(config)?)),
            ApiVersion::V3 => Ok(Self::V3(HyperspeedV3::new(config)?)),
        }
    }

    /// The API version this facade was built for.
    pub fn version(&self) -> ApiVersion {
        match self {
            Self::V2(_) => ApiVersion::V2,
            Self::V3(_) => ApiVersion::V3,
        }
    }

    /// The v2 resource set, if this facade was built for v2.
    pub fn v2(&self) -> Option<&HyperspeedV2> {
        match self {
            Self::V2(v2) => Some(v2),
            Self::V3(_) => None,
        }
    }

    /// The v3 resource set, if this facade was built for v3.
    pub fn v3(&self) -> Option<&HyperspeedV3> {
        match self {
            Self::V2(_) => None,
            Self::V3(v3) => Some(v3),
        }
    }
}
