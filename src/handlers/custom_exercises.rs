use std::collections::BTreeMap;

use axum::{extract::State, http::StatusCode, Json};

use crate::error::{AppError, Result};
use crate::models::{muscle_group, CreateCustomExercise, CustomExercise};
use crate::repositories::CustomExerciseRepository;

#[derive(Clone)]
pub struct CustomExercisesState {
    pub custom_repo: CustomExerciseRepository,
}

/// Custom exercise names grouped by muscle group.
pub async fn list(
    State(state): State<CustomExercisesState>,
) -> Result<Json<BTreeMap<String, Vec<String>>>> {
    let exercises = state.custom_repo.find_all().await?;

    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for exercise in exercises {
        grouped
            .entry(exercise.muscle_group)
            .or_default()
            .push(exercise.name);
    }

    Ok(Json(grouped))
}

pub async fn create(
    State(state): State<CustomExercisesState>,
    Json(form): Json<CreateCustomExercise>,
) -> Result<(StatusCode, Json<CustomExercise>)> {
    let muscle_group = form.muscle_group.trim();
    let name = form.exercise_name.trim();

    if muscle_group.is_empty() {
        return Err(AppError::Validation("Muscle group is required".to_string()));
    }
    if !muscle_group::is_accepted(muscle_group) {
        return Err(AppError::Validation(format!(
            "Unknown muscle group {muscle_group}"
        )));
    }
    if name.is_empty() {
        return Err(AppError::Validation("Exercise name is required".to_string()));
    }

    let exercise = state.custom_repo.create(muscle_group, name).await?;

    Ok((StatusCode::CREATED, Json(exercise)))
}
