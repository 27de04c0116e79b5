//! End-to-end tests for the gateway's HTTP surface, driven through the
//! actual axum router with a scripted `MockAdapter` standing in for a live
//! model.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use explore_agent::SessionStore;
use explore_gateway::server::build_router;
use explore_gateway::state::AppState;
use explore_llm::MockAdapter;
use explore_tools::create_default_registry;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

fn test_state(use_ai_model: bool) -> Arc<AppState> {
    Arc::new(AppState::new(
        Arc::new(SessionStore::new()),
        Arc::new(create_default_registry()),
        Arc::new(MockAdapter::echo()),
        use_ai_model,
    ))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_endpoints_report_ok() {
    let router = build_router(test_state(false));

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health/alive")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("\"alive\""));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/health/available")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn conversation_stream_rejects_empty_text_message() {
    let router = build_router(test_state(false));
    let request = Request::builder()
        .method("POST")
        .uri("/v1/conversation/stream")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"messageType":"text","message":""}"#))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("event: connected"));
    assert!(body.contains("event: error"));
}

#[tokio::test]
async fn conversation_stream_runs_full_turn_without_live_model() {
    let router = build_router(test_state(false));
    let request = Request::builder()
        .method("POST")
        .uri("/v1/conversation/stream")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"messageType":"text","message":"银杏树为什么会变黄","userAge":9}"#,
        ))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("event: connected"));
    assert!(body.contains("event: message"));
    assert!(body.contains("event: done"));
    assert!(!body.contains("event: error"));
}

#[tokio::test]
async fn cards_endpoint_returns_three_cards_without_live_model() {
    let router = build_router(test_state(false));
    let request = Request::builder()
        .method("POST")
        .uri("/v1/cards")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"objectName":"银杏","objectCategory":"自然类","age":9}"#,
        ))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["cards"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn cards_endpoint_rejects_out_of_range_age() {
    let router = build_router(test_state(false));
    let request = Request::builder()
        .method("POST")
        .uri("/v1/cards")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"objectName":"银杏","objectCategory":"自然类","age":99}"#,
        ))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
