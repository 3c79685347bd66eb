use axum::http::StatusCode;

use crate::common::{TestClient, test_app};

#[tokio::test]
async fn health_endpoint_responds_ok() {
    let client = TestClient::new(test_app());
    let response = client.get("/health").await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_falls_back_to_404() {
    let client = TestClient::new(test_app());
    let response = client.get("/no/such/route").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn review_route_requires_uuid_path_params() {
    let client = TestClient::new(test_app());
    let response = client
        .post_json(
            "/users/not-a-uuid/review/also-not-a-uuid",
            &serde_json::json!({ "rating": "good" }),
        )
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
