//! Integration tests for diet HTTP endpoints.
//!
//! Drives the full router in-process: authentication header, JSON bodies,
//! goal resolution, the safety gate and ranking.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use health_compass::adapters::http::{api_router, AppState, USER_ID_HEADER};
use health_compass::domain::diet::DietCatalog;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    let state = AppState::new(Arc::new(DietCatalog::builtin().clone()));
    api_router(state, Duration::from_secs(5))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn recommend(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/diets/recommendations")
        .header("content-type", "application/json")
        .header(USER_ID_HEADER, "user-42")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn suggestion_keys(body: &Value) -> Vec<String> {
    body["recommendation"]["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["key"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Catalog listing
// =============================================================================

#[tokio::test]
async fn lists_full_catalog() {
    let request = Request::builder()
        .uri("/api/diets")
        .header(USER_ID_HEADER, "user-42")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), DietCatalog::builtin().len());
    assert_eq!(body[0]["key"], "mediterranean");
}

#[tokio::test]
async fn lists_catalog_filtered_by_goal() {
    let request = Request::builder()
        .uri("/api/diets?goal=weight_gain")
        .header(USER_ID_HEADER, "user-42")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    let keys: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["bulking", "mass_gainer", "high_carb"]);
}

#[tokio::test]
async fn catalog_requires_user_header() {
    let request = Request::builder()
        .uri("/api/diets")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

// =============================================================================
// Recommendations
// =============================================================================

#[tokio::test]
async fn ranks_by_preferences_with_declaration_order_ties() {
    let (status, body) = send(recommend(json!({
        "profile": {"goal": "Weight loss", "bmi": 24.0},
        "preferences": {"vegetarian": true, "light": true}
    })))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["effective_goal"], "weight_loss");
    assert_eq!(body["bmi_category"], "normal");
    assert_eq!(body["recommendation"]["status"], "suggested");
    assert_eq!(
        suggestion_keys(&body),
        vec!["mediterranean", "plant_based", "intermittent_fasting"]
    );
    assert_eq!(body["recommendation"]["suggestions"][0]["score"], 9);
    assert_eq!(body["recommendation"]["suggestions"][2]["score"], 7);
}

#[tokio::test]
async fn equal_scores_keep_catalog_order() {
    let (status, body) = send(recommend(json!({"goal_override": "Weight gain"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        suggestion_keys(&body),
        vec!["bulking", "mass_gainer", "high_carb"]
    );
    for suggestion in body["recommendation"]["suggestions"].as_array().unwrap() {
        assert_eq!(suggestion["score"], 5);
    }
    assert!(body["bmi"].is_null());
    assert!(body["bmi_category"].is_null());
}

#[tokio::test]
async fn underweight_weight_loss_is_blocked() {
    let (status, body) = send(recommend(json!({
        "profile": {"goal": "Weight loss"},
        "height_cm": 180.0,
        "weight_kg": 55.0
    })))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bmi_category"], "underweight");
    assert_eq!(body["recommendation"]["status"], "blocked");
    assert_eq!(body["recommendation"]["reason"], "weight_loss_while_underweight");
    assert!(body["recommendation"].get("suggestions").is_none());
}

#[tokio::test]
async fn overweight_weight_gain_is_blocked() {
    let (_, body) = send(recommend(json!({
        "profile": {"goal": "Weight gain", "bmi": 31.2}
    })))
    .await;

    assert_eq!(body["recommendation"]["status"], "blocked");
    assert_eq!(body["recommendation"]["reason"], "weight_gain_while_overweight");
}

#[tokio::test]
async fn custom_goal_uses_override() {
    let (status, body) = send(recommend(json!({
        "profile": {"goal": "Other", "goal_other": "Climb Kilimanjaro"},
        "goal_override": "improve_health"
    })))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["effective_goal"], "improve_health");
    assert_eq!(suggestion_keys(&body).len(), 3);
}

#[tokio::test]
async fn missing_goal_is_unprocessable() {
    let (status, body) = send(recommend(json!({
        "profile": {"goal": "Other", "goal_other": "Climb Kilimanjaro"}
    })))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "MISSING_GOAL");
    assert_eq!(body["field"], "goal");
}

#[tokio::test]
async fn unknown_override_is_unprocessable() {
    let (status, body) = send(recommend(json!({"goal_override": "Get shredded"}))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "UNKNOWN_GOAL");
    assert_eq!(body["field"], "goal_override");
}

#[tokio::test]
async fn invalid_height_is_unprocessable() {
    let (status, body) = send(recommend(json!({
        "goal_override": "weight_loss",
        "height_cm": -170.0,
        "weight_kg": 70.0
    })))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_MEASUREMENT");
    assert_eq!(body["field"], "height_cm");
}

#[tokio::test]
async fn health_check_needs_no_user() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}
