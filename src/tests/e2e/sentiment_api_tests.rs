use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use crate::shell::config::AllowedOrigins;
use crate::shell::http::router;
use crate::tests::fixtures::state::{STATS_CAPACITY, make_test_state};

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn predictions_show_up_in_stats_newest_first() {
    let workspace = TempDir::new().unwrap();
    let app = router(make_test_state(workspace.path()).await, &AllowedOrigins::Any);

    let (status, _) = call(&app, post_json("/predict", json!({"text": "Всё плохо"}))).await;
    assert_eq!(status, StatusCode::OK);
    let (status, batch) = call(
        &app,
        post_json("/predict_batch", json!({"texts": ["Спасибо", "Обычный день"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(batch["predictions"].as_array().unwrap().len(), 2);

    let (_, stats) = call(&app, get("/stats")).await;
    assert_eq!(stats["total_predictions"], 3);
    let recent: Vec<&str> = stats["recent_predictions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["text"].as_str().unwrap())
        .collect();
    assert_eq!(recent, vec!["Обычный день", "Спасибо", "Всё плохо"]);

    let distribution = stats["label_distribution"].as_object().unwrap();
    let sum: f64 = distribution.values().map(|v| v.as_f64().unwrap()).sum();
    assert!((sum - 1.0).abs() < 1e-9);
    assert!((distribution["negative"].as_f64().unwrap() - 1.0 / 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn a_bad_batch_item_records_nothing() {
    let workspace = TempDir::new().unwrap();
    let app = router(make_test_state(workspace.path()).await, &AllowedOrigins::Any);

    let (status, body) = call(
        &app,
        post_json("/predict_batch", json!({"texts": ["хорошо", ""]})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "text must not be empty");

    let (_, stats) = call(&app, get("/stats")).await;
    assert_eq!(stats["total_predictions"], 0);
}

#[tokio::test]
async fn history_and_feedback_survive_a_restart() {
    let workspace = TempDir::new().unwrap();
    {
        let app = router(make_test_state(workspace.path()).await, &AllowedOrigins::Any);
        for i in 0..STATS_CAPACITY + 2 {
            let (status, _) = call(
                &app,
                post_json("/predict", json!({"text": format!("отзыв {i}")})),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }
        let (status, created) = call(
            &app,
            post_json(
                "/feedback",
                json!({"text": "Ошибка при входе", "predicted_label": "neutral", "user_label": "negative"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["status"], "ok");
    }

    let app = router(make_test_state(workspace.path()).await, &AllowedOrigins::Any);

    let (_, stats) = call(&app, get("/stats")).await;
    assert_eq!(stats["total_predictions"], (STATS_CAPACITY + 2) as u64);
    let recent = stats["recent_predictions"].as_array().unwrap();
    assert_eq!(recent.len(), STATS_CAPACITY);
    assert_eq!(recent[0]["text"], format!("отзыв {}", STATS_CAPACITY + 1));

    let (_, listed) = call(&app, get("/feedback?limit=5")).await;
    assert_eq!(listed["total_items"], 1);
    assert_eq!(listed["items"][0]["user_label"], "negative");

    let (_, after) = call(&app, post_json("/predict", json!({"text": "после рестарта"}))).await;
    assert!(after["label"].is_string());
    let (_, stats) = call(&app, get("/stats?limit=1")).await;
    let newest = stats["recent_predictions"][0]["timestamp"].as_str().unwrap().to_string();
    let (_, full) = call(&app, get("/stats")).await;
    let previous = full["recent_predictions"][1]["timestamp"].as_str().unwrap().to_string();
    assert!(newest >= previous);
}

#[tokio::test]
async fn the_model_endpoint_describes_the_classifier() {
    let workspace = TempDir::new().unwrap();
    let app = router(make_test_state(workspace.path()).await, &AllowedOrigins::Any);

    let (status, body) = call(&app, get("/model")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["classes"], json!(["negative", "neutral", "positive"]));
}

#[tokio::test]
async fn graphql_and_rest_share_the_same_stores() {
    let workspace = TempDir::new().unwrap();
    let app = router(make_test_state(workspace.path()).await, &AllowedOrigins::Any);

    let (status, body) = call(
        &app,
        post_json(
            "/graphql",
            json!({"query": "mutation { predict(text: \"Люблю это приложение\") { label } }"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["predict"]["label"], "positive");

    let (_, stats) = call(&app, get("/stats")).await;
    assert_eq!(stats["total_predictions"], 1);
    assert_eq!(stats["recent_predictions"][0]["label"], "positive");
}
