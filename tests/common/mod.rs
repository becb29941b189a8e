#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use secrecy::SecretString;

use liftprogress::catalog::NinjaCatalogClient;
use liftprogress::db::{create_memory_pool, DbPool};
use liftprogress::handlers::{custom_exercises, health, progress, sessions};
use liftprogress::migrations::run_migrations_for_tests;
use liftprogress::models::{CreateWorkoutSession, ExerciseEntry, SetEntry, WorkoutSession};
use liftprogress::repositories::{CustomExerciseRepository, WorkoutRepository};
use liftprogress::service::ProgressService;

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

/// App whose remote catalog has no API key and therefore contributes nothing.
pub fn create_test_app(pool: DbPool) -> Router {
    let catalog = NinjaCatalogClient::new("http://127.0.0.1:9", None, Duration::from_secs(1))
        .expect("Failed to build catalog client");
    build_app(pool, catalog)
}

/// App whose remote catalog points at `base_url` (e.g. a wiremock server).
pub fn create_test_app_with_catalog(pool: DbPool, base_url: &str) -> Router {
    let catalog = NinjaCatalogClient::new(
        base_url,
        Some(SecretString::from("test-key".to_string())),
        Duration::from_secs(2),
    )
    .expect("Failed to build catalog client");
    build_app(pool, catalog)
}

fn build_app(pool: DbPool, catalog: NinjaCatalogClient) -> Router {
    let workout_repo = WorkoutRepository::new(pool.clone());
    let custom_repo = CustomExerciseRepository::new(pool.clone());

    let service = ProgressService::new(
        Arc::new(workout_repo.clone()),
        Arc::new(catalog),
        Arc::new(custom_repo.clone()),
    );

    liftprogress::routes::create_router(
        health::HealthState { pool },
        sessions::SessionsState { workout_repo },
        custom_exercises::CustomExercisesState { custom_repo },
        progress::ProgressState { service },
    )
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&body).to_string()
}

// Test data creation helpers
pub async fn create_test_workout(
    pool: &DbPool,
    date: chrono::NaiveDate,
    exercises: Vec<ExerciseEntry>,
) -> WorkoutSession {
    let workout_repo = WorkoutRepository::new(pool.clone());
    workout_repo
        .create_session(&CreateWorkoutSession { date, exercises })
        .await
        .unwrap()
}

pub fn entry(muscle_group: &str, exercise: &str, sets: &[(i32, f64)]) -> ExerciseEntry {
    ExerciseEntry::new(
        muscle_group,
        exercise,
        sets.iter()
            .map(|&(reps, weight)| SetEntry::new(reps, weight))
            .collect(),
    )
}

pub async fn create_test_custom_exercise(pool: &DbPool, muscle_group: &str, name: &str) {
    let custom_repo = CustomExerciseRepository::new(pool.clone());
    custom_repo.create(muscle_group, name).await.unwrap();
}
