//! End-to-end tests for the scan API, driving the router directly with a
//! deterministic gateway stub in place of the Anthropic client.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use server_core::kernel::ModelGateway;
use server_core::server::build_app;

struct StubGateway {
    reply: Result<String, String>,
}

#[async_trait]
impl ModelGateway for StubGateway {
    async fn send_prompt(&self, _prompt: &str) -> Result<String> {
        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(message) => Err(anyhow!("{message}")),
        }
    }
}

fn app_replying(reply: &str) -> Router {
    let gateway: Arc<dyn ModelGateway> = Arc::new(StubGateway {
        reply: Ok(reply.to_owned()),
    });
    build_app(gateway, "http://localhost:3000").expect("app should build")
}

fn app_failing(message: &str) -> Router {
    let gateway: Arc<dyn ModelGateway> = Arc::new(StubGateway {
        reply: Err(message.to_owned()),
    });
    build_app(gateway, "http://localhost:3000").expect("app should build")
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn phone_scan_passes_model_verdict_and_heuristic_reports() {
    let app = app_replying(
        r#"{"risk":"danger","score":95,"explanation":"This caller ID is a known spam pattern."}"#,
    );

    let (status, body) = post_json(
        app,
        "/api/scan/phone",
        json!({"phone": "SPAM LIKELY 555-0199"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk"], "danger");
    assert_eq!(body["score"], 95);
    assert_eq!(
        body["explanation"],
        "This caller ID is a known spam pattern."
    );
    assert_eq!(body["reports"], 5);
}

#[tokio::test]
async fn email_scan_extracts_json_from_prose_wrapped_reply() {
    let app = app_replying(
        "Sure! Here you go: {\"risk\":\"safe\",\"score\":3,\"explanation\":\"ok\",\"indicators\":[]}  Hope that helps!",
    );

    let (status, body) = post_json(
        app,
        "/api/scan/email",
        json!({"text": "Hi Grandma, see you Sunday!"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk"], "safe");
    assert_eq!(body["score"], 3);
    assert_eq!(body["indicators"], json!([]));
}

#[tokio::test]
async fn email_scan_gateway_failure_yields_degraded_result() {
    let app = app_failing("connection refused");

    let (status, body) = post_json(
        app,
        "/api/scan/email",
        json!({"text": "You have won a prize!"}),
    )
    .await;

    // The caller still gets a verdict, never a raw error
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk"], "suspicious");
    assert_eq!(body["score"], 50);
    assert_eq!(body["indicators"], json!(["Analysis incomplete"]));
    let explanation = body["explanation"].as_str().unwrap();
    assert!(explanation.contains("We couldn't complete the analysis"));
    assert!(explanation.contains("connection refused"));
}

#[tokio::test]
async fn link_scan_fills_heuristic_fields() {
    let app = app_replying(
        r#"{"risk":"suspicious","score":72,"explanation":"This domain looks like a prize scam."}"#,
    );

    let (status, body) = post_json(
        app,
        "/api/scan/link",
        json!({"url": "http://free-prize.xyz/claim"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk"], "suspicious");
    assert_eq!(body["score"], 72);
    assert_eq!(body["domain_age"], "Recently registered (suspicious)");
    assert_eq!(body["ssl_valid"], false);
}

#[tokio::test]
async fn out_of_range_score_is_clamped_in_response() {
    let app = app_replying(r#"{"risk":"danger","score":400,"explanation":"bad"}"#);

    let (status, body) = post_json(app, "/api/scan/link", json!({"url": "https://a.example"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 100);
}

#[tokio::test]
async fn empty_input_is_rejected_with_detail() {
    let app = app_replying("{}");

    let (status, body) = post_json(app, "/api/scan/email", json!({"text": "   "})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "text must not be empty");
}

#[tokio::test]
async fn missing_field_is_a_client_error() {
    let app = app_replying("{}");

    let (status, _body) = post_json(app, "/api/scan/phone", json!({"number": "555"})).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn banner_and_health_endpoints() {
    let (status, body) = get_json(app_replying("{}"), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Halo Gate API - Anti-Scam Security Toolkit");

    let (status, body) = get_json(app_replying("{}"), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
