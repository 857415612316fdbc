//! HTTP tests for the form server, run against an in-process axum instance
//! on an ephemeral port.

use std::sync::Arc;

use jscodebot::connector::web::page::{escape_html, CODE_HEADING};
use jscodebot::connector::web::{build_router, AppState};
use jscodebot::{GenerateCodeUseCase, MockChatClient, EMPTY_QUERY_WARNING, JAVASCRIPT_INSTRUCTION};
use serde_json::{json, Value};
use tokio::net::TcpListener;

const REPLY: &str = "const reverse = (s) => s.split('').reverse().join('');";

async fn spawn_app(client: Arc<MockChatClient>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");
    let state = AppState::new(GenerateCodeUseCase::new(client));

    tokio::spawn(async move {
        axum::serve(listener, build_router(state))
            .await
            .expect("Server failed");
    });

    format!("http://{addr}")
}

async fn submit_form(base: &str, query: &str) -> String {
    let response = reqwest::Client::new()
        .post(format!("{base}/"))
        .form(&[("query", query)])
        .send()
        .await
        .expect("Form post failed");
    assert!(response.status().is_success());
    response.text().await.expect("No body")
}

#[tokio::test]
async fn index_renders_empty_form() {
    let base = spawn_app(Arc::new(MockChatClient::new())).await;

    let response = reqwest::get(format!("{base}/")).await.unwrap();
    assert!(response.status().is_success());
    let html = response.text().await.unwrap();

    assert!(html.contains("JavaScript Coding Bot"));
    assert!(html.contains("Your Query:"));
    assert!(!html.contains(CODE_HEADING));
}

#[tokio::test]
async fn form_submission_shows_generated_code() {
    let client = Arc::new(MockChatClient::with_reply(REPLY));
    let base = spawn_app(client.clone()).await;

    let html = submit_form(&base, "create a function to reverse a string").await;

    assert!(html.contains(CODE_HEADING));
    assert!(html.contains(&format!(
        "<code class=\"language-javascript\" data-language=\"javascript\">{}</code>",
        escape_html(REPLY)
    )));
    assert!(html.contains("create a function to reverse a string</textarea>"));

    let sent = client.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].messages()[0].content(),
        format!("create a function to reverse a string{JAVASCRIPT_INSTRUCTION}")
    );
}

#[tokio::test]
async fn blank_submission_warns_without_calling_model() {
    let client = Arc::new(MockChatClient::new());
    let base = spawn_app(client.clone()).await;

    let html = submit_form(&base, "   ").await;

    assert!(html.contains(EMPTY_QUERY_WARNING));
    assert!(!html.contains(CODE_HEADING));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn failure_replaces_result_and_next_submission_recovers() {
    let client = Arc::new(MockChatClient::with_reply(REPLY));
    let base = spawn_app(client.clone()).await;

    let first = submit_form(&base, "reverse a string").await;
    assert!(first.contains(CODE_HEADING));

    client.fail_next("request timed out");
    let failed = submit_form(&base, "reverse a string").await;
    assert!(failed.contains("An error occurred: request timed out"));
    assert!(!failed.contains(CODE_HEADING));

    let recovered = submit_form(&base, "reverse a string").await;
    assert!(recovered.contains(CODE_HEADING));
    assert!(!recovered.contains("An error occurred"));
    assert_eq!(client.call_count(), 3);
}

#[tokio::test]
async fn json_api_returns_tagged_outcome() {
    let client = Arc::new(MockChatClient::with_reply(REPLY));
    let base = spawn_app(client).await;
    let http = reqwest::Client::new();

    let code: Value = http
        .post(format!("{base}/api/generate"))
        .json(&json!({ "query": "reverse a string" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(code["status"], "code");
    assert_eq!(code["language"], "javascript");
    assert_eq!(code["text"], REPLY);

    let warning: Value = http
        .post(format!("{base}/api/generate"))
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(warning["status"], "warning");
    assert_eq!(warning["message"], EMPTY_QUERY_WARNING);
}

#[tokio::test]
async fn health_probe() {
    let base = spawn_app(Arc::new(MockChatClient::new())).await;

    let body = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(body, "ok");
}
