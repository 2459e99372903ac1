// tests/chat_api.rs
// End-to-end tests for POST /api/chat through the real router, with stub
// upstream servers where wire behavior matters.


use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use serde_json::{Value, json};

use layali::api::error::{GENERIC_ERROR, NOT_CONFIGURED_ERROR};
use layali::chat::language::{APOLOGY_AR, APOLOGY_EN};
use layali::chat::validator::{REASON_EMPTY, REASON_MARKUP, REASON_TOO_LONG};
use layali::content::ContentSnapshot;
use layali::prompt::{self, RESTAURANT_NAME};

use test_helpers::{
    FailingContent, StaticContent, completion_reply, get_json, post_chat, post_raw,
    sample_snapshot, spawn_recording_upstream, spawn_upstream, test_app, test_state,
};

// Base URL for tests that must never reach an upstream.
const UNREACHABLE: &str = "http://127.0.0.1:9";

#[tokio::test]
async fn missing_credential_is_a_500_before_validation() {
    let state = test_state(UNREACHABLE, None, Arc::new(StaticContent(sample_snapshot())));

    let (status, body) = post_chat(
        test_app(state.clone()),
        json!({ "message": "Do you have tables?" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], NOT_CONFIGURED_ERROR);

    // Even an invalid message reports the credential problem, not a 400.
    let (status, body) = post_chat(test_app(state), json!({ "message": "<script>" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], NOT_CONFIGURED_ERROR);
}

#[tokio::test]
async fn rejected_messages_get_a_400_with_the_reason() {
    let state = test_state(
        UNREACHABLE,
        Some("sk-test"),
        Arc::new(StaticContent(sample_snapshot())),
    );

    let cases: Vec<(Value, &str)> = vec![
        (json!({ "message": "" }), REASON_EMPTY),
        (json!({ "message": "   " }), REASON_EMPTY),
        (json!({}), REASON_EMPTY),
        (json!({ "message": 7 }), REASON_EMPTY),
        (json!({ "message": null }), REASON_EMPTY),
        (json!({ "message": "a".repeat(501) }), REASON_TOO_LONG),
        (
            json!({ "message": "hi <script>alert(1)</script>" }),
            REASON_MARKUP,
        ),
    ];

    for (body, reason) in cases {
        let (status, reply) = post_chat(test_app(state.clone()), body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(reply["error"], reason, "body: {}", body);
    }
}

#[tokio::test]
async fn malformed_json_bodies_get_a_json_400() {
    let state = test_state(
        UNREACHABLE,
        Some("sk-test"),
        Arc::new(StaticContent(sample_snapshot())),
    );

    let (status, body) = post_raw(test_app(state), "{not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn valid_chat_returns_the_completion_text() {
    let upstream = spawn_upstream(
        StatusCode::OK,
        completion_reply("We do have tables tonight, book through the reservations page."),
    )
    .await;
    let state = test_state(
        &upstream,
        Some("sk-test"),
        Arc::new(StaticContent(sample_snapshot())),
    );

    let (status, body) = post_chat(
        test_app(state),
        json!({ "message": "Do you have tables?", "messagesHistory": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["response"],
        "We do have tables tonight, book through the reservations page."
    );
}

#[tokio::test]
async fn upstream_failure_is_a_generic_500() {
    let upstream = spawn_upstream(
        StatusCode::BAD_GATEWAY,
        json!({ "error": { "message": "overloaded" } }),
    )
    .await;
    let state = test_state(
        &upstream,
        Some("sk-test"),
        Arc::new(StaticContent(sample_snapshot())),
    );

    let (status, body) = post_chat(
        test_app(state),
        json!({ "message": "Do you have tables?" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], GENERIC_ERROR);
}

#[tokio::test]
async fn empty_choices_fall_back_to_the_apology() {
    let upstream = spawn_upstream(StatusCode::OK, json!({ "choices": [] })).await;
    let state = test_state(
        &upstream,
        Some("sk-test"),
        Arc::new(StaticContent(sample_snapshot())),
    );

    let (status, body) = post_chat(
        test_app(state.clone()),
        json!({ "message": "Do you have tables?" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], APOLOGY_EN);

    // An Arabic message gets the Arabic apology.
    let (status, body) = post_chat(
        test_app(state),
        json!({ "message": "هل عندكم طاولات؟" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], APOLOGY_AR);
}

#[tokio::test]
async fn upstream_request_is_system_then_history_then_user() {
    let seen = Arc::new(Mutex::new(None));
    let upstream =
        spawn_recording_upstream(StatusCode::OK, completion_reply("done"), seen.clone()).await;
    let state = test_state(
        &upstream,
        Some("sk-test"),
        Arc::new(StaticContent(sample_snapshot())),
    );

    let (status, _) = post_chat(
        test_app(state),
        json!({
            "message": "Can I book for four?",
            "messagesHistory": [
                { "role": "user", "content": "Are you open on Friday?" },
                { "role": "assistant", "content": "Yes, from 12:00 noon." }
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let request = seen.lock().unwrap().take().expect("upstream saw a request");
    assert_eq!(request["model"], "test-model");
    assert_eq!(request["max_tokens"], 500);
    assert_eq!(request["temperature"], 0.7);
    assert_eq!(request["top_p"], 0.9);

    let messages = request["messages"].as_array().expect("messages array");
    assert_eq!(messages.len(), 4);

    let system = messages[0]["content"].as_str().expect("system content");
    assert_eq!(messages[0]["role"], "system");
    assert!(system.contains(RESTAURANT_NAME));
    assert!(system.contains("Menu (all prices in QR):"));
    assert!(system.contains("Lamb kebab"));

    assert_eq!(
        messages[1],
        json!({ "role": "user", "content": "Are you open on Friday?" })
    );
    assert_eq!(
        messages[2],
        json!({ "role": "assistant", "content": "Yes, from 12:00 noon." })
    );
    assert_eq!(
        messages[3],
        json!({ "role": "user", "content": "Can I book for four?" })
    );
}

#[tokio::test]
async fn content_outage_degrades_to_the_static_prompt() {
    let seen = Arc::new(Mutex::new(None));
    let upstream =
        spawn_recording_upstream(StatusCode::OK, completion_reply("hello"), seen.clone()).await;
    let state = test_state(&upstream, Some("sk-test"), Arc::new(FailingContent));

    let (status, body) = post_chat(
        test_app(state),
        json!({ "message": "Where are you located?" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "hello");

    let request = seen.lock().unwrap().take().expect("upstream saw a request");
    let system = request["messages"][0]["content"].as_str().expect("system content");
    assert_eq!(system, prompt::static_prompt());
    assert!(system.contains(RESTAURANT_NAME));
}

#[tokio::test]
async fn health_reports_ok_and_the_model() {
    let state = test_state(
        UNREACHABLE,
        None,
        Arc::new(StaticContent(ContentSnapshot::default())),
    );

    let (status, body) = get_json(test_app(state), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model"], "test-model");
    assert!(body["version"].is_string());
    assert!(body["timestamp"].is_string());
}
