use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{CreateWorkoutSession, WorkoutSession};
use crate::repositories::WorkoutRepository;

#[derive(Clone)]
pub struct SessionsState {
    pub workout_repo: WorkoutRepository,
}

pub async fn list(State(state): State<SessionsState>) -> Result<Json<Vec<WorkoutSession>>> {
    let sessions = state.workout_repo.find_all_sessions().await?;
    Ok(Json(sessions))
}

pub async fn show(
    State(state): State<SessionsState>,
    Path(id): Path<String>,
) -> Result<Json<WorkoutSession>> {
    let session = state
        .workout_repo
        .find_session_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    Ok(Json(session))
}

/// Home screen figures: how many sessions exist and the latest one.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    session_count: i64,
    latest: Option<WorkoutSession>,
}

pub async fn summary(State(state): State<SessionsState>) -> Result<Json<SessionSummary>> {
    let session_count = state.workout_repo.count_sessions().await?;
    let latest = state.workout_repo.find_latest_session().await?;

    Ok(Json(SessionSummary {
        session_count,
        latest,
    }))
}

pub async fn create(
    State(state): State<SessionsState>,
    Json(form): Json<CreateWorkoutSession>,
) -> Result<(StatusCode, Json<WorkoutSession>)> {
    form.validate()?;

    let session = state.workout_repo.create_session(&form).await?;
    tracing::info!(
        "Logged session {} on {} with {} exercises",
        session.id,
        session.date,
        session.exercises.len()
    );

    Ok((StatusCode::CREATED, Json(session)))
}
