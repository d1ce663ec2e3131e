//! Payload and response shapes for the Hyperspeed API.
//!
//! All entities are read-only snapshots of what the server returned;
//! the client passes them through without validation. Wire field names
//! are snake_case. Fields absent from older server payloads carry
//! `#[serde(default)]` so they still parse.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Data payload helpers ─────────────────────────────────────────────

/// An image field inside a content item's custom `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
}

/// An image-gallery field inside custom `data`.
pub type ImageGallery = Vec<Image>;

/// A trait/value attribute pair inside custom `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub value: String,
    pub trait_type: String,
}

/// A free-form string map inside custom `data`.
pub type CustomData = HashMap<String, String>;

// ── Collections ──────────────────────────────────────────────────────

/// A named grouping of content items (e.g. "blog").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub organization_id: u64,
    /// Whether items in this collection render as full pages.
    pub page_content: bool,
    #[serde(default)]
    pub authors_enabled: bool,
    #[serde(default)]
    pub comments_enabled: bool,
    #[serde(default)]
    pub ratings_enabled: bool,
    /// URL prefix prepended to item slugs when rendering links.
    #[serde(default)]
    pub path_prefix: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The Prisma-style `_count` include on a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionCount {
    #[serde(rename = "_count")]
    pub count: ContentsCount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentsCount {
    pub contents: u64,
}

// ── Content items ────────────────────────────────────────────────────

/// Author summary embedded on a content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAuthor {
    pub name: String,
    #[serde(default)]
    pub featured_image: Option<Image>,
}

/// A single record within a collection.
///
/// `T` is the caller-defined shape of the collection's custom fields,
/// surfaced via `data`; leave it as [`serde_json::Value`] for fully
/// dynamic access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content<T = Value> {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub author: Option<ContentAuthor>,
    #[serde(default)]
    pub categories: Vec<Category>,
    pub data: T,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Rendered block content on a page-rendering content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlocks {
    #[serde(rename = "type")]
    pub block_type: String,
    pub content: Vec<Value>,
}

/// A single content item fetched by slug, with everything the server
/// attaches for page rendering: draft/archive state, rendered blocks
/// and HTML, the comment tree, and the owning collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSingle<T = Value> {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub draft: bool,
    pub archive: bool,
    pub comments_enabled: bool,
    pub collection_id: u64,
    pub data: T,
    #[serde(default)]
    pub blocks: Option<ContentBlocks>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub comments: Vec<CommentNode>,
    #[serde(default)]
    pub author: Option<ContentAuthor>,
    pub collection: Collection,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Pagination envelope for content listings (plain, by-category, and
/// search all share this shape).
///
/// `next_page`/`prev_page` are `None` at the respective boundary;
/// both consistency with `total_pages` and page sizing are enforced
/// server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPagination<T = Value> {
    pub next_page: Option<u32>,
    pub prev_page: Option<u32>,
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: u64,
    pub data: Vec<Content<T>>,
}

/// A bare slug, from the collection slug listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSlug {
    pub slug: String,
}

/// Slug + collection path prefix looked up from a content id, for
/// expanding shortlinks like `https://example.com/?id=14563`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlugLookup {
    pub collection: SlugLookupCollection,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlugLookupCollection {
    pub path_prefix: Option<String>,
}

// ── Authors ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub organization_id: u64,
    #[serde(default)]
    pub media_id: u64,
    #[serde(default)]
    pub featured_image: Option<Image>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ── Categories ───────────────────────────────────────────────────────

/// A category within a collection. `parent_id` forms a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub parent_id: Option<u64>,
    pub collection_id: u64,
}

// ── Comments ─────────────────────────────────────────────────────────

/// One comment in a content item's reply tree.
///
/// `parent_id`, when set, references another comment on the same
/// content item (server-enforced).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentNode {
    pub id: u64,
    pub text: String,
    pub author: String,
    #[serde(default)]
    pub rating: Option<f64>,
    pub parent_id: Option<u64>,
    #[serde(default)]
    pub replies: Vec<CommentNode>,
}

/// Body for posting a new comment on a content item.
///
/// `parent_id` travels as an explicit `null` for a top-level comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentPayload {
    pub author: String,
    pub email: String,
    pub parent_id: Option<u64>,
    pub comment: String,
}

// ── Messages ─────────────────────────────────────────────────────────

/// Body for submitting a contact-form message. Only `email` is
/// required; unset fields are omitted from the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessagePayload {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_fields: Option<Vec<HashMap<String, String>>>,
}

/// Submission outcome for comments and messages, returned verbatim.
///
/// A 2xx body carrying `error` is a *successful* call returning the
/// [`MessageResponse::Error`] variant, not an `Err`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageResponse {
    Success { success: bool, message: String },
    Error { error: String },
}
