//! Integration tests for the HTTP sort API
//!
//! Drives the full router: request parsing, algorithm dispatch, engine,
//! statistics and error mapping.

use super::common::http::{get, post_json, test_app, test_app_with};
use axum::http::StatusCode;
use serde_json::json;
use sortviz::Config;

fn final_array(body: &serde_json::Value) -> serde_json::Value {
    body["history"]
        .as_array()
        .and_then(|history| history.last())
        .map(|step| step["array"].clone())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_bubble_sort_scenario() {
    let (status, body) = post_json(
        test_app(),
        "/sort",
        &json!({ "array": [5, 3, 8, 1], "algorithm": "bubble" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["history"][0]["array"], json!([5, 3, 8, 1]));
    assert_eq!(final_array(&body), json!([1, 3, 5, 8]));
    assert!(body["stats"]["comparisons"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_step_wire_format() {
    let (_, body) = post_json(
        test_app(),
        "/sort",
        &json!({ "array": [2, 1], "algorithm": "selection" }),
    )
    .await;

    let step = &body["history"][0];
    for key in [
        "array",
        "comparingIndices",
        "sortedIndices",
        "selectedIndices",
        "pivotIndices",
    ] {
        assert!(step.get(key).is_some(), "missing {}", key);
    }
}

#[tokio::test]
async fn test_every_algorithm_over_http() {
    let input = json!([170, 45, 75, 90, 802, 24, 2, 66]);
    for algorithm in [
        "bubble",
        "selection",
        "insertion",
        "merge",
        "quick",
        "heap",
        "radix",
        "bucket",
    ] {
        let (status, body) = post_json(
            test_app(),
            "/sort",
            &json!({ "array": input.clone(), "algorithm": algorithm }),
        )
        .await;

        assert_eq!(status, StatusCode::OK, "{}", algorithm);
        assert_eq!(
            final_array(&body),
            json!([2, 24, 45, 66, 75, 90, 170, 802]),
            "{}",
            algorithm
        );
    }
}

#[tokio::test]
async fn test_quick_sort_terminal_step() {
    let (_, body) = post_json(
        test_app(),
        "/sort",
        &json!({ "array": [3, 1, 2], "algorithm": "quick" }),
    )
    .await;

    let last = body["history"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["array"], json!([1, 2, 3]));
    assert_eq!(last["sortedIndices"], json!([0, 1, 2]));
    assert_eq!(last["comparingIndices"], json!([]));
    assert_eq!(last["selectedIndices"], json!([]));
    assert_eq!(last["pivotIndices"], json!([]));
}

#[tokio::test]
async fn test_empty_array_returns_single_step() {
    let (status, body) = post_json(
        test_app(),
        "/sort",
        &json!({ "array": [], "algorithm": "merge" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["history"].as_array().unwrap().len(), 1);
    assert_eq!(body["stats"], json!({ "comparisons": 0, "swaps": 0 }));
}

#[tokio::test]
async fn test_unsupported_algorithm_is_bad_request() {
    let (status, body) = post_json(
        test_app(),
        "/sort",
        &json!({ "array": [1, 2], "algorithm": "bogo" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Algorithm bogo not supported");
    assert!(body.get("history").is_none());
}

#[tokio::test]
async fn test_non_integer_elements_are_unprocessable() {
    let (status, _) = post_json(
        test_app(),
        "/sort",
        &json!({ "array": [1, "two", 3], "algorithm": "bubble" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_fractional_elements_are_unprocessable() {
    let (status, _) = post_json(
        test_app(),
        "/sort",
        &json!({ "array": [1.5, 2], "algorithm": "bubble" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_missing_field_is_unprocessable() {
    let (status, _) = post_json(test_app(), "/sort", &json!({ "array": [1, 2] })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_radix_rejects_negative_values() {
    let (status, body) = post_json(
        test_app(),
        "/sort",
        &json!({ "array": [3, -4, 1], "algorithm": "radix" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("non-negative"));
}

#[tokio::test]
async fn test_oversized_array_is_rejected() {
    let app = test_app_with(Config::default().with_max_array_len(3));
    let (status, _) = post_json(
        app,
        "/sort",
        &json!({ "array": [4, 3, 2, 1], "algorithm": "bubble" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_algorithms() {
    let (status, body) = get(test_app(), "/algorithms").await;

    assert_eq!(status, StatusCode::OK);
    let algorithms = body["algorithms"].as_array().unwrap();
    assert_eq!(algorithms.len(), 8);
    assert_eq!(algorithms[0]["id"], "bubble");
    assert_eq!(algorithms[0]["isStable"], true);
}

#[tokio::test]
async fn test_get_algorithm_by_id() {
    let (status, body) = get(test_app(), "/algorithms/heap").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Heap Sort");
    assert_eq!(body["isStable"], false);

    let (status, _) = get(test_app(), "/algorithms/bogo").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_random_array_endpoint() {
    let (status, body) = get(test_app(), "/random?size=12&max=9").await;

    assert_eq!(status, StatusCode::OK);
    let values = body["array"].as_array().unwrap();
    assert_eq!(values.len(), 12);
    assert!(values
        .iter()
        .all(|v| (1..=9).contains(&v.as_i64().unwrap())));
}

#[tokio::test]
async fn test_random_array_defaults_and_limits() {
    let (status, body) = get(test_app(), "/random").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["array"].as_array().unwrap().len(), 20);

    let (status, _) = get(test_app(), "/random?max=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let app = test_app_with(Config::default().with_max_array_len(5));
    let (status, _) = get(app, "/random?size=6").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_random_array_kinds() {
    let (status, body) = get(test_app(), "/random?size=6&kind=reversed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["array"], json!([6, 5, 4, 3, 2, 1]));

    let (status, body) = get(test_app(), "/random?size=30&kind=nearly-sorted").await;
    assert_eq!(status, StatusCode::OK);
    let mut values: Vec<i64> = body["array"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect();
    values.sort_unstable();
    assert_eq!(values, (1..=30).collect::<Vec<i64>>());

    let (status, _) = get(test_app(), "/random?kind=shuffled").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
