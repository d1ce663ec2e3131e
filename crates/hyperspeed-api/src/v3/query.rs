//! Opaque query descriptions forwarded to the v3 API.
//!
//! The shapes mirror a Prisma-style query builder; every field is
//! caller-defined free-form JSON and unset fields are omitted from the
//! wire. The server interprets them — the client never looks inside.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query description for `find_first`/`find_many`.
///
/// ```
/// use hyperspeed_api::v3::QueryArgs;
/// use serde_json::json;
///
/// let args = QueryArgs {
///     r#where: Some(json!({ "slug": "hello-world" })),
///     take: Some(json!(10)),
///     ..QueryArgs::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#where: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct: Option<Value>,
}

/// Creation description for [`CommentsV3::create`](super::CommentsV3::create).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<Value>,
}
