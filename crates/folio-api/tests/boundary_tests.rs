//! Boundary rejection tests: bad payloads must be rejected before any engine
//! or storage work happens, so none of these need a database.

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::common::{TestClient, test_app};

#[tokio::test]
async fn invalid_rating_is_rejected_at_the_boundary() {
    let client = TestClient::new(test_app());
    let user_id = Uuid::new_v4();
    let card_id = Uuid::new_v4();

    let response = client
        .post_json(
            &format!("/users/{user_id}/review/{card_id}"),
            &json!({ "rating": "medium" }),
        )
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn missing_rating_is_rejected() {
    let client = TestClient::new(test_app());
    let user_id = Uuid::new_v4();
    let card_id = Uuid::new_v4();

    let response = client
        .post_json(&format!("/users/{user_id}/review/{card_id}"), &json!({}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn empty_book_title_fails_validation() {
    let client = TestClient::new(test_app());
    let user_id = Uuid::new_v4();

    let response = client
        .post_json(&format!("/users/{user_id}/books"), &json!({ "title": "" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json();
    assert!(
        body["error"].as_str().unwrap_or_default().contains("invalid request"),
        "expected a validation error body, got {body}"
    );
}

#[tokio::test]
async fn empty_generated_card_batch_fails_validation() {
    let client = TestClient::new(test_app());
    let chapter_id = Uuid::new_v4();

    let response = client
        .post_json(
            &format!("/chapters/{chapter_id}/cards"),
            &json!({ "cards": [] }),
        )
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_card_type_is_rejected_by_serde() {
    let client = TestClient::new(test_app());
    let chapter_id = Uuid::new_v4();

    let response = client
        .post_json(
            &format!("/chapters/{chapter_id}/cards"),
            &json!({
                "cards": [{
                    "front": "What is syntopical reading?",
                    "back": "Comparative reading across several books on one subject.",
                    "card_type": "trivia",
                    "difficulty": "medium"
                }]
            }),
        )
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
