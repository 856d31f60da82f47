use anyhow::{Context, Result};
use product::{handler::AppRouter, state::AppState};
use shared::{
    config::{Config, ConnectionManager, ConnectionPool},
    utils::{Telemetry, init_logger, run_metrics_collector},
};
use tracing::{error, info, warn};

const SERVICE_NAME: &str = "product-service";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = match config.otel_endpoint.as_deref() {
        Some(endpoint) => Some(
            Telemetry::init(SERVICE_NAME, endpoint).context("Failed to initialize telemetry")?,
        ),
        None => None,
    };

    let _log_guard = init_logger(
        telemetry.as_ref().map(Telemetry::logger_provider),
        SERVICE_NAME,
        &config.log,
    );

    if telemetry.is_none() {
        warn!("⚠️ OTEL_ENDPOINT not set, telemetry export disabled");
    }

    info!("🚀 Starting Product Service initialization...");

    let db_pool = ConnectionManager::new_pool(&config.database_url, config.db_max_conn)
        .await
        .context("Failed to initialize database pool")?;

    if config.run_migrations {
        info!("📦 Running database migrations...");
        run_migrations(&db_pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = AppState::new(db_pool);
    let collector = tokio::spawn(run_metrics_collector(state.system_metrics.clone()));

    info!("✅ Application setup completed successfully.");

    let result = AppRouter::serve(config.port, state).await;

    collector.abort();

    if let Some(telemetry) = telemetry {
        if let Err(e) = telemetry.shutdown() {
            error!("Failed to shutdown telemetry: {e}");
        }
    }

    info!("✅ Product Service shutdown complete.");

    result
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
