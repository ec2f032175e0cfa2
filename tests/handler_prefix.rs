mod common;

use axum_test::TestServer;
use serde_json::json;

fn operations_server() -> TestServer {
    TestServer::new(common::operations_app(common::create_test_state())).unwrap()
}

#[tokio::test]
async fn test_update_prefix_with_slash() {
    let server = operations_server();

    let response = server
        .put("/update-prefix")
        .add_query_param("domain_prefix", "http://shaw.ty/")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["old_prefix"], common::TEST_PREFIX);
    assert_eq!(json["new_prefix"], "https://shaw.ty/");
}

#[tokio::test]
async fn test_update_prefix_without_slash() {
    let server = operations_server();

    let response = server
        .put("/update-prefix")
        .add_query_param("domain_prefix", "http://shaw.ty")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["new_prefix"], "https://shaw.ty/");
}

#[tokio::test]
async fn test_update_prefix_invalid_url() {
    let server = operations_server();

    let response = server
        .put("/update-prefix")
        .add_query_param("domain_prefix", "4242")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["detail"],
        "the provided domain prefix '4242' is not a valid URL. please conform to a valid URL format with preceeding http or https schemas, see https://www.w3.org/Addressing/URL/url-spec.txt"
    );
}

#[tokio::test]
async fn test_update_prefix_overlong_input() {
    let server = operations_server();

    // Valid URL shape, 25 characters.
    let overlong = "https://visit-mysites.com";

    let response = server
        .put("/update-prefix")
        .add_query_param("domain_prefix", overlong)
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["detail"],
        format!(
            "the provided domain prefix '{overlong}' seems to be longer than the maximum of 20 characters."
        )
    );
}

#[tokio::test]
async fn test_existing_records_keep_their_prefix() {
    let server = operations_server();

    let valid_urls = ["https://uno.es", "https://deux.it/", "http://trois.fr"];

    for url in valid_urls {
        let response = server.post("/encode").json(&json!({ "long_url": url })).await;
        response.assert_status_ok();
    }

    let update = server
        .put("/update-prefix")
        .add_query_param("domain_prefix", "http://brief.ly")
        .await;
    update.assert_status_ok();

    let update = update.json::<serde_json::Value>();
    assert_eq!(update["new_prefix"], "https://brief.ly/");
    let old_prefix = update["old_prefix"].as_str().unwrap().to_string();

    // Already encoded URLs come back from the registry with their original
    // short URL under the old prefix.
    for url in valid_urls {
        let response = server.post("/encode").json(&json!({ "long_url": url })).await;
        let json = response.json::<serde_json::Value>();
        assert!(json["short_url"].as_str().unwrap().starts_with(&old_prefix));
    }

    // New URLs are encoded under the new prefix.
    for url in ["https://oans.de", "https://zwoa.de/", "http://drei.de"] {
        let response = server.post("/encode").json(&json!({ "long_url": url })).await;
        let json = response.json::<serde_json::Value>();
        assert!(
            json["short_url"]
                .as_str()
                .unwrap()
                .starts_with("https://brief.ly/")
        );
    }
}
