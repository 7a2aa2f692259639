use crate::ApiError;

use gk_db::DbError;
use gk_router::RouterError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_bad_request_returns_400_with_json_body() {
    let error = ApiError::BadRequest {
        message: "Expected a command envelope".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert_eq!(json["error"]["message"], "Expected a command envelope");
}

#[tokio::test]
async fn test_timeout_returns_504_with_retry_hint() {
    let error = ApiError::Timeout {
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "TIMEOUT");
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("try again")
    );
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Command dispatch failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_router_error_converts_to_internal_without_storage_detail() {
    let db_err = DbError::Migration {
        message: "users table missing".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = RouterError::from(db_err).into();

    match api_err {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Command dispatch failed");
            assert!(!message.contains("users table"));
        }
        _ => panic!("Expected Internal error"),
    }
}
