use chrono::{NaiveDate, Utc};
use rusqlite::{OptionalExtension, Row};
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{CreateWorkoutSession, ExerciseEntry, SetEntry, WorkoutSession};

#[derive(Clone)]
pub struct WorkoutRepository {
    pool: DbPool,
}

/// One row of the session/entry/set join. Entry and set columns are NULL
/// for sessions without entries and entries without sets.
struct SessionRow {
    session_id: String,
    date: NaiveDate,
    entry_id: Option<String>,
    muscle_group: Option<String>,
    exercise_name: Option<String>,
    reps: Option<i32>,
    weight: Option<f64>,
}

impl SessionRow {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            session_id: row.get("session_id")?,
            date: row.get("date")?,
            entry_id: row.get("entry_id")?,
            muscle_group: row.get("muscle_group")?,
            exercise_name: row.get("exercise_name")?,
            reps: row.get("reps")?,
            weight: row.get("weight")?,
        })
    }
}

const SESSIONS_QUERY: &str = "SELECT ws.id AS session_id, ws.date,
            ee.id AS entry_id, ee.muscle_group, ee.exercise_name,
            es.reps, es.weight
     FROM workout_sessions ws
     LEFT JOIN exercise_entries ee ON ee.session_id = ws.id
     LEFT JOIN exercise_sets es ON es.entry_id = ee.id";

const SESSIONS_ORDER: &str =
    "ORDER BY ws.date DESC, ws.created_at DESC, ws.id, ee.position, es.position";

/// Fold ordered join rows back into nested sessions.
fn assemble(rows: Vec<SessionRow>) -> Vec<WorkoutSession> {
    let mut sessions: Vec<WorkoutSession> = Vec::new();
    let mut current_entry: Option<String> = None;

    for row in rows {
        let is_new_session = sessions
            .last()
            .map(|session| session.id != row.session_id)
            .unwrap_or(true);
        if is_new_session {
            sessions.push(WorkoutSession {
                id: row.session_id,
                date: row.date,
                exercises: Vec::new(),
            });
            current_entry = None;
        }

        let Some(session) = sessions.last_mut() else {
            continue;
        };
        let Some(entry_id) = row.entry_id else {
            continue;
        };

        if current_entry.as_deref() != Some(entry_id.as_str()) {
            session.exercises.push(ExerciseEntry::new(
                row.muscle_group.unwrap_or_default(),
                row.exercise_name.unwrap_or_default(),
                Vec::new(),
            ));
            current_entry = Some(entry_id);
        }

        if let (Some(entry), Some(reps), Some(weight)) =
            (session.exercises.last_mut(), row.reps, row.weight)
        {
            entry.sets.push(SetEntry::new(reps, weight));
        }
    }

    sessions
}

impl WorkoutRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create_session(&self, input: &CreateWorkoutSession) -> Result<WorkoutSession> {
        let session = WorkoutSession {
            id: Uuid::new_v4().to_string(),
            date: input.date,
            exercises: input.exercises.clone(),
        };
        let session_clone = session.clone();

        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let mut conn = pool.get()?;
            let tx = conn.transaction()?;

            tx.execute(
                "INSERT INTO workout_sessions (id, date, created_at) VALUES (?, ?, ?)",
                rusqlite::params![session_clone.id, session_clone.date, Utc::now()],
            )?;

            for (entry_position, entry) in session_clone.exercises.iter().enumerate() {
                let entry_id = Uuid::new_v4().to_string();
                tx.execute(
                    "INSERT INTO exercise_entries
                        (id, session_id, position, muscle_group, exercise_name)
                     VALUES (?, ?, ?, ?, ?)",
                    rusqlite::params![
                        entry_id,
                        session_clone.id,
                        entry_position as i64,
                        entry.muscle_group,
                        entry.exercise_name
                    ],
                )?;

                for (set_position, set) in entry.sets.iter().enumerate() {
                    tx.execute(
                        "INSERT INTO exercise_sets (id, entry_id, position, reps, weight)
                         VALUES (?, ?, ?, ?, ?)",
                        rusqlite::params![
                            Uuid::new_v4().to_string(),
                            entry_id,
                            set_position as i64,
                            set.reps,
                            set.weight
                        ],
                    )?;
                }
            }

            tx.commit()?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        Ok(session)
    }

    /// All sessions, newest first, with entries and sets in logged order.
    pub async fn find_all_sessions(&self) -> Result<Vec<WorkoutSession>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(&format!("{SESSIONS_QUERY} {SESSIONS_ORDER}"))?;
            let rows = stmt
                .query_map([], SessionRow::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(assemble(rows))
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_session_by_id(&self, id: &str) -> Result<Option<WorkoutSession>> {
        let pool = self.pool.clone();
        let id = id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt =
                conn.prepare(&format!("{SESSIONS_QUERY} WHERE ws.id = ? {SESSIONS_ORDER}"))?;
            let rows = stmt
                .query_map([&id], SessionRow::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(assemble(rows).into_iter().next())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Most recent session by the same ordering as [`Self::find_all_sessions`].
    pub async fn find_latest_session(&self) -> Result<Option<WorkoutSession>> {
        let pool = self.pool.clone();
        let latest_id: Option<String> = tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let id = conn
                .query_row(
                    "SELECT id FROM workout_sessions
                     ORDER BY date DESC, created_at DESC, id
                     LIMIT 1",
                    [],
                    |row| row.get(0),
                )
                .optional()?;
            Ok::<_, AppError>(id)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        match latest_id {
            Some(id) => self.find_session_by_id(&id).await,
            None => Ok(None),
        }
    }

    pub async fn count_sessions(&self) -> Result<i64> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let count: i64 =
                conn.query_row("SELECT COUNT(*) FROM workout_sessions", [], |row| row.get(0))?;
            Ok(count)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
