#![allow(clippy::unwrap_used)]
// Tests for the version-dispatching facade.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hyperspeed_api::{ApiVersion, Hyperspeed, HyperspeedConfig};

#[test]
fn test_version_2_exposes_the_v2_resource_set() {
    let config = HyperspeedConfig::new("test-key", 7).with_version(ApiVersion::V2);
    let client = Hyperspeed::new(&config).unwrap();

    assert_eq!(client.version(), ApiVersion::V2);
    assert!(client.v3().is_none());

    // messages and posts exist only under v2.
    let v2 = client.v2().unwrap();
    let _ = &v2.messages;
    let _ = &v2.posts;
}

#[test]
fn test_version_3_exposes_the_v3_resource_set() {
    let config = HyperspeedConfig::new("test-key", 7).with_version(ApiVersion::V3);
    let client = Hyperspeed::new(&config).unwrap();

    assert_eq!(client.version(), ApiVersion::V3);
    assert!(client.v2().is_none());

    // categories and links exist only under v3.
    let v3 = client.v3().unwrap();
    let _ = &v3.categories;
    let _ = &v3.links;
}

#[test]
fn test_default_version_is_v3() {
    let config = HyperspeedConfig::new("test-key", 7);
    let client = Hyperspeed::new(&config).unwrap();

    assert_eq!(client.version(), ApiVersion::V3);
    assert!(client.v3().is_some());
}

#[tokio::test]
async fn test_facade_calls_route_through_the_selected_version() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = HyperspeedConfig::new("test-key", 7)
        .with_version(ApiVersion::V2)
        .with_base_url(server.uri());
    let client = Hyperspeed::new(&config).unwrap();

    let collections = client.v2().unwrap().collections.list().await.unwrap();
    assert!(collections.is_empty());
}
