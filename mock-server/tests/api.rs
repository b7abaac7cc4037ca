use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, ChangeName};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn rename_request(old: &str, new: &str) -> Request<String> {
    json_request(
        "POST",
        "/changeName",
        &serde_json::json!({
            "old_exercise_name": old,
            "new_exercise_name": new,
        })
        .to_string(),
    )
}

async fn seed(app: &axum::Router, name: &str) {
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/exercises",
            &serde_json::json!({ "name": name }).to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
}

async fn exercises(app: &axum::Router) -> Vec<String> {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/exercises")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await
}

// --- catalog ---

#[tokio::test]
async fn list_exercises_empty() {
    let app = app();
    let names = exercises(&app).await;
    assert!(names.is_empty());
}

#[tokio::test]
async fn add_exercise_appears_in_sorted_list() {
    let app = app();
    seed(&app, "Squats").await;
    seed(&app, "Assisted Dips").await;

    let names = exercises(&app).await;
    assert_eq!(names, vec!["Assisted Dips", "Squats"]);
}

// --- changeName ---

#[tokio::test]
async fn change_name_returns_status_ok() {
    let app = app();
    seed(&app, "Assisted Dips").await;

    let resp = app
        .clone()
        .oneshot(rename_request("Assisted Dips", "Dips"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn change_name_applies_the_rename() {
    let app = app();
    seed(&app, "Assisted Dips").await;

    app.clone()
        .oneshot(rename_request("Assisted Dips", "Dips"))
        .await
        .unwrap();

    let names = exercises(&app).await;
    assert_eq!(names, vec!["Dips"]);
}

#[tokio::test]
async fn change_name_unknown_old_name_returns_404_not_found() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(rename_request("Squats", "Smith Machine Squats"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_bytes(resp).await.as_ref(), b"not found");
}

#[tokio::test]
async fn change_name_malformed_json_returns_422() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/changeName", r#"{"old_exercise_name":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- request log ---

#[tokio::test]
async fn requests_are_recorded_in_order_including_failures() {
    let app = app();
    seed(&app, "Assisted Dips").await;

    app.clone()
        .oneshot(rename_request("Assisted Dips", "Dips"))
        .await
        .unwrap();
    // Unknown old name: 404, but still recorded.
    app.clone()
        .oneshot(rename_request("Squats", "Smith Machine Squats"))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/requests")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let log: Vec<ChangeName> = body_json(resp).await;
    assert_eq!(
        log,
        vec![
            ChangeName {
                old_exercise_name: "Assisted Dips".to_string(),
                new_exercise_name: "Dips".to_string(),
            },
            ChangeName {
                old_exercise_name: "Squats".to_string(),
                new_exercise_name: "Smith Machine Squats".to_string(),
            },
        ]
    );
}
