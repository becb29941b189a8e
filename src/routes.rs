use axum::{routing::get, Router};

use crate::handlers::{custom_exercises, health, progress, sessions};

pub fn create_router(
    health_state: health::HealthState,
    sessions_state: sessions::SessionsState,
    custom_exercises_state: custom_exercises::CustomExercisesState,
    progress_state: progress::ProgressState,
) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state)
        // Session ingest
        .route("/api/sessions", get(sessions::list).post(sessions::create))
        .route("/api/sessions/summary", get(sessions::summary))
        .route("/api/sessions/{id}", get(sessions::show))
        .with_state(sessions_state)
        // Custom exercises
        .route(
            "/api/custom-exercises",
            get(custom_exercises::list).post(custom_exercises::create),
        )
        .with_state(custom_exercises_state)
        // Analytics
        .route("/api/progress", get(progress::show))
        .route("/api/catalog", get(progress::catalog))
        .with_state(progress_state)
}
