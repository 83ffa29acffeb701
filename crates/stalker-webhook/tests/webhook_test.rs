//! End-to-end webhook tests.
//!
//! A real server on an ephemeral port answers webhook POSTs while httpmock
//! stands in for the GitHub API, so the full path is exercised:
//! HTTP body -> dispatcher -> GitHub client -> formatted reply.

use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use serde_json::{json, Value};
use stalker_core::WebhookReply;
use stalker_github::GithubClient;
use stalker_webhook::{router, Dispatcher, DEFAULT_REPLY, INVALID_WEBHOOK_MESSAGE};

/// Spin up the webhook server against a mocked GitHub upstream and return
/// its base URL.
async fn spawn_app(github: &MockServer) -> String {
    let client = GithubClient::with_base_url(
        github.base_url(),
        Some("test-token".to_string()),
        Duration::from_secs(5),
    );
    let dispatcher = Dispatcher::new(Arc::new(client));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router(dispatcher))
            .await
            .expect("server run");
    });

    format!("http://{}", addr)
}

fn webhook_body(action: &str, user: &str) -> Value {
    json!({
        "result": {
            "action": action,
            "parameters": { "user": user },
            "contexts": []
        },
        "originalRequest": { "source": "google" }
    })
}

#[tokio::test]
async fn test_missing_result_is_rejected_with_exact_message() {
    let github = MockServer::start_async().await;
    let app = spawn_app(&github).await;

    let response = reqwest::Client::new()
        .post(&app)
        .json(&json!({ "status": { "code": 200 } }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(response.text().await.unwrap(), INVALID_WEBHOOK_MESSAGE);
}

#[tokio::test]
async fn test_non_json_body_is_rejected_with_exact_message() {
    let github = MockServer::start_async().await;
    let app = spawn_app(&github).await;

    let response = reqwest::Client::new()
        .post(&app)
        .body("definitely not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(response.text().await.unwrap(), INVALID_WEBHOOK_MESSAGE);
}

#[tokio::test]
async fn test_missing_action_is_rejected() {
    let github = MockServer::start_async().await;
    let app = spawn_app(&github).await;

    let response = reqwest::Client::new()
        .post(&app)
        .json(&json!({ "result": { "parameters": {} } }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn test_profile_intent_end_to_end() {
    let github = MockServer::start_async().await;
    github
        .mock_async(|when, then| {
            when.method(GET)
                .path("/users/octocat")
                .query_param("access_token", "test-token");
            then.status(200).json_body(json!({
                "name": "The Octocat",
                "created_at": "2011-01-25T18:44:36Z",
                "public_repos": 8,
                "bio": "GitHub mascot"
            }));
        })
        .await;
    let app = spawn_app(&github).await;

    let response = reqwest::Client::new()
        .post(&app)
        .json(&webhook_body("user", "octocat"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let reply: WebhookReply = response.json().await.unwrap();
    assert_eq!(
        reply.speech,
        "The name of this user is The Octocat. Registered since \
         January 25, 2011, 6:44:36 PM, he has 8 public repositories. \
         He is a github mascot"
    );
    assert_eq!(reply.speech, reply.display_text);
}

#[tokio::test]
async fn test_followers_intent_end_to_end() {
    let github = MockServer::start_async().await;
    github
        .mock_async(|when, then| {
            when.method(GET).path("/users/octocat/followers");
            then.status(200)
                .json_body(json!([{"login": "a"}, {"login": "b"}]));
        })
        .await;
    let app = spawn_app(&github).await;

    let response = reqwest::Client::new()
        .post(&app)
        .json(&webhook_body("user.followers", "octocat"))
        .send()
        .await
        .unwrap();

    let reply: WebhookReply = response.json().await.unwrap();
    assert_eq!(reply.speech, "The guy has 2 followers. Here are they: a, b");
    assert_eq!(reply.display_text, reply.speech);
}

#[tokio::test]
async fn test_unknown_intent_gets_default_reply() {
    let github = MockServer::start_async().await;
    let upstream = github
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({}));
        })
        .await;
    let app = spawn_app(&github).await;

    let response = reqwest::Client::new()
        .post(&app)
        .json(&webhook_body("foo.bar", "octocat"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let reply: WebhookReply = response.json().await.unwrap();
    assert_eq!(reply, WebhookReply::text(DEFAULT_REPLY));
    // The default handler never touches the upstream.
    assert_eq!(upstream.hits_async().await, 0);
}

#[tokio::test]
async fn test_upstream_failure_still_returns_a_reply() {
    let github = MockServer::start_async().await;
    github
        .mock_async(|when, then| {
            when.method(GET).path("/users/octocat/repos");
            then.status(500).body("upstream on fire");
        })
        .await;
    let app = spawn_app(&github).await;

    let response = reqwest::Client::new()
        .post(&app)
        .json(&webhook_body("user.repos", "octocat"))
        .send()
        .await
        .unwrap();

    // Errors past initial validation are replies, never 5xx.
    assert_eq!(response.status().as_u16(), 200);
    let reply: WebhookReply = response.json().await.unwrap();
    assert!(reply.speech.starts_with("API error: 500"));
    assert_eq!(reply.speech, reply.display_text);
}

#[tokio::test]
async fn test_identical_requests_get_identical_replies() {
    let github = MockServer::start_async().await;
    github
        .mock_async(|when, then| {
            when.method(GET).path("/users/octocat/starred");
            then.status(200).json_body(json!([{"name": "linux"}]));
        })
        .await;
    let app = spawn_app(&github).await;

    let client = reqwest::Client::new();
    let body = webhook_body("user.starred", "octocat");

    let first = client
        .post(&app)
        .json(&body)
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let second = client
        .post(&app)
        .json(&body)
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(first, second);
}
