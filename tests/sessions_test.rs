mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_reports_ok() {
    let app = common::create_test_app(common::setup_test_db());

    let response = app.oneshot(common::get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
    assert!(body["git_version"].is_string());
}

#[tokio::test]
async fn test_create_session_accepts_timestamp_dates() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());

    let response = app
        .oneshot(common::post_json(
            "/api/sessions",
            json!({
                "date": "2024-01-01T18:45:00.000Z",
                "exercises": [{
                    "muscleGroup": "Chest",
                    "exercise": "Bench Press",
                    "sets": [{"reps": 10, "weight": 100}, {"reps": 8, "weight": 110}]
                }]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = common::body_json(response).await;
    assert_eq!(body["date"], "2024-01-01");
    assert_eq!(body["exercises"][0]["exercise"], "Bench Press");
    assert_eq!(body["exercises"][0]["sets"][1]["weight"], 110.0);
}

#[tokio::test]
async fn test_create_session_rejects_incomplete_exercise() {
    let app = common::create_test_app(common::setup_test_db());

    let response = app
        .oneshot(common::post_json(
            "/api/sessions",
            json!({
                "date": "2024-01-01",
                "exercises": [{"muscleGroup": "Chest", "exercise": "Bench Press", "sets": []}]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_string(response).await;
    assert!(body.contains("at least one set"));
}

#[tokio::test]
async fn test_create_session_rejects_empty_session() {
    let app = common::create_test_app(common::setup_test_db());

    let response = app
        .oneshot(common::post_json(
            "/api/sessions",
            json!({"date": "2024-01-01", "exercises": []}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_sessions_newest_first() {
    let pool = common::setup_test_db();
    let date = |d| chrono::NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
    let bench = common::entry("Chest", "Bench Press", &[(5, 100.0)]);
    let curl = common::entry("Biceps", "Curl", &[(12, 15.0)]);
    common::create_test_workout(&pool, date(1), vec![bench]).await;
    common::create_test_workout(&pool, date(3), vec![curl]).await;

    let app = common::create_test_app(pool);
    let response = app.oneshot(common::get("/api/sessions")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    let sessions = body.as_array().unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0]["date"], "2024-01-03");
    assert_eq!(sessions[1]["exercises"][0]["muscleGroup"], "Chest");
}

#[tokio::test]
async fn test_create_session_rejects_overflowing_volume() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());

    let response = app
        .oneshot(common::post_json(
            "/api/sessions",
            json!({
                "date": "2024-01-01",
                "exercises": [{
                    "muscleGroup": "Chest",
                    "exercise": "Bench Press",
                    "sets": [{"reps": 10, "weight": 1e308}]
                }]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::create_test_app(pool);
    let response = app
        .oneshot(common::get("/api/progress?item=Bench%20Press&range=all"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["series"], json!([]));
}

#[tokio::test]
async fn test_create_session_rejects_unknown_muscle_group() {
    let app = common::create_test_app(common::setup_test_db());

    let response = app
        .oneshot(common::post_json(
            "/api/sessions",
            json!({
                "date": "2024-01-01",
                "exercises": [{
                    "muscleGroup": "Back",
                    "exercise": "Row",
                    "sets": [{"reps": 10, "weight": 50}]
                }]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_string(response).await;
    assert!(body.contains("unknown muscle group"));
}

#[tokio::test]
async fn test_show_session_by_id() {
    let pool = common::setup_test_db();
    let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let bench = common::entry("Chest", "Bench Press", &[(5, 100.0)]);
    let session = common::create_test_workout(&pool, date, vec![bench]).await;

    let app = common::create_test_app(pool);
    let response = app
        .oneshot(common::get(&format!("/api/sessions/{}", session.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["id"], session.id);
    assert_eq!(body["exercises"][0]["sets"][0]["reps"], 5);
}

#[tokio::test]
async fn test_show_missing_session_is_404() {
    let app = common::create_test_app(common::setup_test_db());

    let response = app
        .oneshot(common::get("/api/sessions/nonexistent"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_summary_counts_sessions_and_shows_latest() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());

    let response = app
        .oneshot(common::get("/api/sessions/summary"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["sessionCount"], 0);
    assert!(body["latest"].is_null());

    let date = |d| chrono::NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
    let bench = common::entry("Chest", "Bench Press", &[(5, 100.0)]);
    let curl = common::entry("Biceps", "Curl", &[(12, 15.0)]);
    common::create_test_workout(&pool, date(5), vec![bench]).await;
    common::create_test_workout(&pool, date(2), vec![curl]).await;

    let app = common::create_test_app(pool);
    let response = app
        .oneshot(common::get("/api/sessions/summary"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["sessionCount"], 2);
    assert_eq!(body["latest"]["date"], "2024-01-05");
}
