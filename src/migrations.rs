//! Schema migrations compiled into the binary.
//!
//! Each migration runs inside its own transaction together with the row that
//! records it, so a failed file leaves no half-applied schema behind.

use crate::db::DbPool;

pub struct Migration {
    pub name: &'static str,
    pub sql: &'static str,
}

macro_rules! migration {
    ($file:literal) => {
        Migration {
            name: $file,
            sql: include_str!(concat!("../migrations/", $file)),
        }
    };
}

pub const MIGRATIONS: &[Migration] = &[
    migration!("001_create_workout_sessions.sql"),
    migration!("002_create_exercise_entries.sql"),
    migration!("003_create_custom_exercises.sql"),
];

/// Apply pending migrations and return how many were applied.
pub fn run_migrations(pool: &DbPool) -> anyhow::Result<usize> {
    let mut conn = pool.get()?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS _migrations (
            name TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    )?;

    let mut applied = 0;
    for migration in MIGRATIONS {
        let done: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM _migrations WHERE name = ?)",
            [migration.name],
            |row| row.get(0),
        )?;
        if done {
            tracing::debug!("Migration {} already applied", migration.name);
            continue;
        }

        let tx = conn.transaction()?;
        tx.execute_batch(migration.sql)?;
        tx.execute("INSERT INTO _migrations (name) VALUES (?)", [migration.name])?;
        tx.commit()?;

        tracing::info!("Applied migration {}", migration.name);
        applied += 1;
    }

    tracing::info!(
        "Schema up to date ({} of {} migrations newly applied)",
        applied,
        MIGRATIONS.len()
    );
    Ok(applied)
}

/// Apply every migration untracked, for fresh in-memory test databases.
pub fn run_migrations_for_tests(pool: &DbPool) -> Result<(), Box<dyn std::error::Error>> {
    let conn = pool.get()?;
    for migration in MIGRATIONS {
        conn.execute_batch(migration.sql)?;
    }
    Ok(())
}
