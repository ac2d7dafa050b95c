// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use engagement_service::error::AppError;

mod common;

#[tokio::test]
async fn test_not_found_keeps_details() {
    let response = AppError::NotFound("User u1 not found".to_string()).into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["details"], "User u1 not found");
}

#[tokio::test]
async fn test_internal_errors_hide_details() {
    let response = AppError::Internal(anyhow::anyhow!("connection reset by peer")).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "internal_error");
    assert!(body.get("details").is_none());

    let response = AppError::Database("deadline exceeded".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "database_error");
    assert!(body.get("details").is_none());
}

#[test]
fn test_auth_errors_are_unauthorized() {
    assert_eq!(
        AppError::Unauthorized.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        AppError::InvalidToken.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
}
