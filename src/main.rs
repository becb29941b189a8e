use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use liftprogress::catalog::NinjaCatalogClient;
use liftprogress::config::Config;
use liftprogress::handlers::{custom_exercises, health, progress, sessions};
use liftprogress::repositories::{CustomExerciseRepository, WorkoutRepository};
use liftprogress::service::ProgressService;
use liftprogress::{db, migrations, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "liftprogress=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database: {}", config.database_url);

    let pool = db::create_pool(&config.database_url)?;
    migrations::run_migrations(&pool)?;

    if config.catalog_api_key.is_none() {
        tracing::warn!(
            "CATALOG_API_KEY not set, exercise options will come from \
             custom exercises only"
        );
    }
    let catalog = NinjaCatalogClient::new(
        &config.catalog_base_url,
        config.catalog_api_key.clone(),
        config.catalog_timeout,
    )?;

    let workout_repo = WorkoutRepository::new(pool.clone());
    let custom_repo = CustomExerciseRepository::new(pool.clone());

    let service = ProgressService::new(
        Arc::new(workout_repo.clone()),
        Arc::new(catalog),
        Arc::new(custom_repo.clone()),
    );

    let app = routes::create_router(
        health::HealthState { pool: pool.clone() },
        sessions::SessionsState { workout_repo },
        custom_exercises::CustomExercisesState { custom_repo },
        progress::ProgressState { service },
    );

    let addr = config.server_addr();
    tracing::info!("Starting server at http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutting down");
}
