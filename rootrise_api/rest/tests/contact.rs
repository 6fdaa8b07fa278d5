use std::net::SocketAddr;

use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use rootrise_core_contact_contracts::{
    ContactSubmissionInput, ContactSubmitError, MockContactFeatureService,
};
use rootrise_core_contact_impl::ContactFeatureServiceImpl;
use serde_json::{json, Value};

mod common;

const REQUIRED: &str = "Name, email, and message are required.";

async fn start() -> (SocketAddr, tempfile::TempDir) {
    let bundle = common::bundle();
    let addr = common::start_server(ContactFeatureServiceImpl, bundle.path()).await;
    (addr, bundle)
}

async fn post_json(addr: SocketAddr, body: Value) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/contact"))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn accepted() {
    let (addr, _bundle) = start().await;

    let (status, body) = post_json(
        addr,
        json!({ "name": "Sam", "email": "s@x.com", "message": "hi" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn empty_email() {
    let (addr, _bundle) = start().await;

    let (status, body) =
        post_json(addr, json!({ "name": "Sam", "email": "", "message": "hi" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "error": REQUIRED }));
}

#[tokio::test]
async fn missing_or_blank_fields() {
    let (addr, _bundle) = start().await;

    for payload in [
        json!({}),
        json!({ "email": "s@x.com", "message": "hi" }),
        json!({ "name": "Sam", "message": "hi" }),
        json!({ "name": "Sam", "email": "s@x.com" }),
        json!({ "name": "   ", "email": "s@x.com", "message": "hi" }),
        json!({ "name": "Sam", "email": "s@x.com", "message": null }),
    ] {
        let (status, body) = post_json(addr, payload.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert_eq!(body, json!({ "success": false, "error": REQUIRED }), "{payload}");
    }
}

#[tokio::test]
async fn email_format_is_not_validated() {
    let (addr, _bundle) = start().await;

    let (status, body) = post_json(
        addr,
        json!({ "name": "Sam", "email": "definitely not an email", "message": "hi" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn unreadable_body_counts_as_empty() {
    let (addr, _bundle) = start().await;
    let client = reqwest::Client::new();
    let url = format!("http://{addr}/api/contact");

    for request in [
        client.post(&url),
        client
            .post(&url)
            .header("content-type", "application/json")
            .body("{not json"),
        client
            .post(&url)
            .header("content-type", "text/plain")
            .body("name=Sam"),
        client.post(&url).json(&json!([])),
        client.post(&url).json(&json!("x")),
        client.post(&url).json(&json!(null)),
        client
            .post(&url)
            .json(&json!({ "name": 1, "email": "s@x.com", "message": "hi" })),
        client
            .post(&url)
            .json(&json!({ "name": "Sam", "email": ["s@x.com"], "message": "hi" })),
    ] {
        let response = request.send().await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "success": false, "error": REQUIRED }));
    }
}

#[tokio::test]
async fn fields_are_passed_to_service() {
    let bundle = common::bundle();
    let contact = MockContactFeatureService::new().with_submit(
        ContactSubmissionInput {
            name: Some("Sam".into()),
            email: None,
            message: Some("hi".into()),
        },
        Err(ContactSubmitError::Validation),
    );
    let addr = common::start_server(contact, bundle.path()).await;

    let (status, body) = post_json(addr, json!({ "name": "Sam", "message": "hi" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "error": REQUIRED }));
}

#[tokio::test]
async fn internal_error() {
    let bundle = common::bundle();
    let contact = MockContactFeatureService::new().with_submit(
        ContactSubmissionInput {
            name: Some("Sam".into()),
            email: Some("s@x.com".into()),
            message: Some("hi".into()),
        },
        Err(anyhow::anyhow!("log sink unavailable").into()),
    );
    let addr = common::start_server(contact, bundle.path()).await;

    let (status, body) = post_json(
        addr,
        json!({ "name": "Sam", "email": "s@x.com", "message": "hi" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Internal server error" })
    );
}

#[tokio::test]
async fn responses_carry_request_id() {
    let (addr, _bundle) = start().await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/contact"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    let request_id = response.headers().get("x-request-id").unwrap();
    assert!(!request_id.is_empty());
}
