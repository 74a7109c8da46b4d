//! Integration tests for the deal catalog endpoints.
//!
//! Run with: cargo test --test deals_integration

mod common;

use axum::http::StatusCode;
use common::{create_test_app, get_request, parse_response_body};
use tower::ServiceExt;

#[tokio::test]
async fn test_list_deals_returns_fixture_catalog() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/api/v1/deals")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["count"], 3);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data[0]["id"], "1");
    assert_eq!(data[0]["status"], "ready");
    assert_eq!(data[1]["id"], "2");
    assert_eq!(data[1]["status"], "processing");
    assert_eq!(data[2]["date"], "2024-11-10");
    assert!(data.iter().all(|d| d["source"] == "bitrix"));
}

#[tokio::test]
async fn test_list_deals_with_covers_uses_first_photo() {
    let app = create_test_app();

    let response = app
        .oneshot(get_request("/api/v1/deals/covers"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["count"], 3);

    for deal in body["data"].as_array().unwrap() {
        let cover = deal["cover_url"].as_str().unwrap();
        assert!(cover.contains("w=400"));
    }
}

#[tokio::test]
async fn test_get_deal_returns_description() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/api/v1/deals/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["id"], "1");
    assert_eq!(body["title"], "Семейная фотосессия в студии");
    assert!(body["description"].as_str().unwrap().len() > 0);
}

#[tokio::test]
async fn test_get_unknown_deal_is_not_found() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/api/v1/deals/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "Photo session not found");
}

#[tokio::test]
async fn test_list_deal_photos_preserves_source_order() {
    let app = create_test_app();

    let response = app
        .oneshot(get_request("/api/v1/deals/1/photos"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["count"], 5);

    let data = body["data"].as_array().unwrap();
    for (i, photo) in data.iter().enumerate() {
        assert_eq!(photo["id"], format!("photo-1-{}", i + 1));
        assert!(photo["url"].as_str().unwrap().contains("w=1200"));
        assert!(photo["thumbnail_url"].as_str().unwrap().contains("w=400"));
    }
}

#[tokio::test]
async fn test_list_photos_of_unknown_deal_is_empty() {
    let app = create_test_app();

    let response = app
        .oneshot(get_request("/api/v1/deals/99/photos"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/api/v1/deals")).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
