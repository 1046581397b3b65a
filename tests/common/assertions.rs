//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert JSON response has expected status field
pub fn assert_json_status(response: &TestResponse, expected_status: u16) {
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected_status as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected_status,
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
}

/// Assert an error response: HTTP status, JSON body with status and message
pub fn assert_api_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let content_type = response
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());
    assert_eq!(
        content_type,
        Some("application/json"),
        "Expected JSON error body, got: {}",
        response.text()
    );
    assert_json_status(response, expected.as_u16());
    let json: serde_json::Value = response.json();
    assert!(json["error"].is_string(), "Expected error message: {json}");
}

/// Assert a match payload names the expected palette and shade
pub fn assert_match(json: &serde_json::Value, palette: &str, shade: u64) {
    assert_eq!(
        (json["paletteName"].as_str(), json["shade"].as_u64()),
        (Some(palette), Some(shade)),
        "Unexpected match: {json}"
    );
}
