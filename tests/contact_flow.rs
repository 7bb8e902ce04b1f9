//! End-to-end tests of the submission pipeline over real HTTP.

mod common;

use std::time::Duration;

use serde_json::{json, Value};

use common::{spawn_app, test_config};

#[tokio::test]
async fn health_reports_ok_and_uptime() {
    let app = spawn_app(test_config()).await;

    let response = reqwest::get(app.url("/api/health")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["ok"], json!(true));
    assert!(body["uptime"].is_u64());
}

#[tokio::test]
async fn health_stays_ok_when_the_transport_is_broken() {
    let app = spawn_app(test_config()).await;
    app.mailer.fail_next_sends();

    let response = reqwest::get(app.url("/api/health")).await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn valid_submission_relays_exactly_one_email() {
    let app = spawn_app(test_config()).await;

    let response = reqwest::Client::new()
        .post(app.url("/api/contact"))
        .json(&json!({
            "name": "Ann",
            "email": "ann@x.com",
            "message": "Hello, this is long enough."
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "ok": true }));

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].name, "Ann");
    assert_eq!(sent[0].email, "ann@x.com");
    assert_eq!(sent[0].message, "Hello, this is long enough.");
}

#[tokio::test]
async fn all_validation_reasons_come_back_in_one_body() {
    let app = spawn_app(test_config()).await;

    let response = reqwest::Client::new()
        .post(app.url("/api/contact"))
        .json(&json!({ "name": "", "email": "ann@x.com", "message": "short" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body = response.text().await.unwrap();
    assert!(body.contains("Name is required"), "body: {body}");
    assert!(body.contains("Message must be at least 10 characters"), "body: {body}");

    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn missing_fields_report_required_reasons() {
    let app = spawn_app(test_config()).await;

    let response = reqwest::Client::new()
        .post(app.url("/api/contact"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body = response.text().await.unwrap();
    for reason in ["Name is required", "Email is required", "Message is required"] {
        assert!(body.contains(reason), "body: {body}");
    }
}

#[tokio::test]
async fn non_textual_fields_are_a_type_error() {
    let app = spawn_app(test_config()).await;

    let response = reqwest::Client::new()
        .post(app.url("/api/contact"))
        .json(&json!({ "name": 42, "email": "ann@x.com", "message": "long enough message" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "Invalid input types");
}

#[tokio::test]
async fn oversized_fields_are_rejected() {
    let app = spawn_app(test_config()).await;

    let response = reqwest::Client::new()
        .post(app.url("/api/contact"))
        .json(&json!({
            "name": "A".repeat(101),
            "email": "ann@x.com",
            "message": "Hello, this is long enough."
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "Input values are too long");
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn invalid_email_syntax_is_rejected() {
    let app = spawn_app(test_config()).await;

    let response = reqwest::Client::new()
        .post(app.url("/api/contact"))
        .json(&json!({
            "name": "Ann",
            "email": "not-an-email",
            "message": "Hello, this is long enough."
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert!(response.text().await.unwrap().contains("Please enter a valid email"));
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let app = spawn_app(test_config()).await;

    let response = reqwest::Client::new()
        .post(app.url("/api/contact"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn injection_payload_never_reaches_the_mail() {
    let app = spawn_app(test_config()).await;

    let response = reqwest::Client::new()
        .post(app.url("/api/contact"))
        .json(&json!({
            "name": "Ann",
            "email": "ann@x.com",
            "message": "watch ${evil} and <script>alert(1)</script> go away"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert!(!sent[0].message.contains("${"));
    assert!(!sent[0].message.contains("<script>"));
}

#[tokio::test]
async fn transport_failure_maps_to_generic_500() {
    let app = spawn_app(test_config()).await;
    app.mailer.fail_next_sends();

    let response = reqwest::Client::new()
        .post(app.url("/api/contact"))
        .json(&json!({
            "name": "Ann",
            "email": "ann@x.com",
            "message": "Hello, this is long enough."
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(response.text().await.unwrap(), "Failed to send email");
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn unknown_paths_fall_through_to_the_static_site() {
    let app = spawn_app(test_config()).await;

    // No such asset in the working directory; the fallback answers,
    // not the API.
    let response = reqwest::get(app.url("/no-such-page.html")).await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn over_cap_submissions_get_429_until_the_window_turns() {
    let mut config = test_config();
    config.rate_limit.max_requests = 3;
    config.rate_limit.window_secs = 1;
    let app = spawn_app(config).await;

    let client = reqwest::Client::new();
    let payload = json!({
        "name": "Ann",
        "email": "ann@x.com",
        "message": "Hello, this is long enough."
    });

    for _ in 0..3 {
        let response = client
            .post(app.url("/api/contact"))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }

    let response = client
        .post(app.url("/api/contact"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 429);
    assert!(response
        .text()
        .await
        .unwrap()
        .contains("please try again later"));
    assert_eq!(app.mailer.sent().len(), 3);

    // A fresh window admits the same address again.
    tokio::time::sleep(Duration::from_millis(1100)).await;
    let response = client
        .post(app.url("/api/contact"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}
