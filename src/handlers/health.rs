use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::db::DbPool;
use crate::version::GIT_VERSION;

#[derive(Clone)]
pub struct HealthState {
    pub pool: DbPool,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: &'static str,
    git_version: &'static str,
}

/// Liveness plus a round trip through the connection pool. Responds 503
/// when the database cannot be reached.
pub async fn health_check(
    State(state): State<HealthState>,
) -> (StatusCode, Json<HealthResponse>) {
    let pool = state.pool.clone();
    let reachable = tokio::task::spawn_blocking(move || database_reachable(&pool))
        .await
        .unwrap_or(false);

    let (code, status, database) = if reachable {
        (StatusCode::OK, "ok", "ok")
    } else {
        tracing::warn!("Health check could not reach the database");
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
    };

    (
        code,
        Json(HealthResponse {
            status,
            database,
            git_version: GIT_VERSION,
        }),
    )
}

fn database_reachable(pool: &DbPool) -> bool {
    let Ok(conn) = pool.get() else {
        return false;
    };
    conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0)).is_ok()
}
