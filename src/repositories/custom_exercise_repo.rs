use chrono::Utc;
use rusqlite::OptionalExtension;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{CustomExercise, FromSqliteRow};

#[derive(Clone)]
pub struct CustomExerciseRepository {
    pool: DbPool,
}

impl CustomExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Save a custom exercise. Saving the same (muscle group, name) twice
    /// returns the existing record.
    pub async fn create(&self, muscle_group: &str, name: &str) -> Result<CustomExercise> {
        let pool = self.pool.clone();
        let muscle_group = muscle_group.to_string();
        let name = name.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO custom_exercises (id, muscle_group, name, created_at)
                 VALUES (?, ?, ?, ?)
                 ON CONFLICT(muscle_group, name) DO NOTHING",
                rusqlite::params![Uuid::new_v4().to_string(), muscle_group, name, Utc::now()],
            )?;

            let mut stmt =
                conn.prepare("SELECT * FROM custom_exercises WHERE muscle_group = ? AND name = ?")?;
            let exercise = stmt
                .query_row([&muscle_group, &name], CustomExercise::from_row)
                .optional()?;
            exercise.ok_or_else(|| AppError::Internal("Custom exercise was not saved".to_string()))
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_all(&self) -> Result<Vec<CustomExercise>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT * FROM custom_exercises
                 ORDER BY muscle_group, created_at, rowid",
            )?;
            let exercises = stmt
                .query_map([], CustomExercise::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Names saved for one muscle group, oldest first.
    pub async fn find_names_by_muscle_group(&self, muscle_group: &str) -> Result<Vec<String>> {
        let pool = self.pool.clone();
        let muscle_group = muscle_group.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT name FROM custom_exercises
                 WHERE muscle_group = ?
                 ORDER BY created_at, rowid",
            )?;
            let names = stmt
                .query_map([&muscle_group], |row| row.get(0))?
                .collect::<rusqlite::Result<Vec<String>>>()?;
            Ok(names)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
