//! Backend API Integration Tests
//!
//! Tests for the Axum HTTP endpoints using Router::oneshot pattern. Routers
//! built from one [`AppState`] share the same game, so a clone per request
//! plays a sequence of moves.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use backend::api::{self, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn post_move(from: &str, to: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/move")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "from": from, "to": to }).to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_index_returns_banner() {
    let app = api::router();
    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&body).contains("/api/move"));
}

#[tokio::test]
async fn test_opening_move_succeeds() {
    let app = api::router();
    let (status, body) = send(&app, post_move("e2", "e4")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "success", "turn": "black", "captured": null })
    );
}

#[tokio::test]
async fn test_state_reflects_played_moves() {
    let app = api::router_with_state(AppState::default());
    send(&app, post_move("e2", "e4")).await;

    let (status, body) = send(&app, get("/api/state")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["turn"], "black");

    let pieces = body["pieces"].as_array().unwrap();
    assert_eq!(pieces.len(), 32);
    let pawn = pieces
        .iter()
        .find(|p| p["square"] == "e4")
        .expect("pawn on e4");
    assert_eq!(pawn["color"], "white");
    assert_eq!(pawn["piece_type"], "pawn");
    assert_eq!(pawn["has_moved"], true);
    assert!(pieces.iter().all(|p| p["square"] != "e2"));
}

#[tokio::test]
async fn test_wrong_side_is_rejected() {
    let app = api::router();
    let (status, body) = send(&app, post_move("e7", "e5")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "rejected");
    assert!(body["reason"].as_str().unwrap().contains("e7"));
}

#[tokio::test]
async fn test_unreachable_destination_is_rejected() {
    let app = api::router();
    let (_, body) = send(&app, post_move("b1", "b3")).await;
    assert_eq!(body["status"], "rejected");

    // the failed attempt left white to move with nothing selected
    let (_, body) = send(&app, post_move("b1", "c3")).await;
    assert_eq!(body["status"], "success");
}

#[tokio::test]
async fn test_capture_is_reported() {
    let app = api::router();
    send(&app, post_move("e2", "e4")).await;
    send(&app, post_move("d7", "d5")).await;
    let (_, body) = send(&app, post_move("e4", "d5")).await;

    assert_eq!(
        body,
        json!({ "status": "success", "turn": "black", "captured": "pawn" })
    );
}

#[tokio::test]
async fn test_bad_notation_is_rejected() {
    let app = api::router();
    let (status, body) = send(&app, post_move("e2", "e0")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "rejected");
}

#[tokio::test]
async fn test_malformed_body_is_client_error() {
    let app = api::router();
    let request = Request::builder()
        .method("POST")
        .uri("/api/move")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"from":"e2"}"#))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert!(status.is_client_error());
}
