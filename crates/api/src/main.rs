use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use customers_api::config::{ServerConfig, StoreKind};
use customers_api::router::build_app_router;
use customers_api::state::AppState;
use customers_api::telemetry;
use customers_db::store::{CustomerStore, MemoryCustomerStore, PgCustomerStore};
use customers_db::DbPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ServerConfig::from_env()?;

    // --- Tracing ---
    telemetry::init(config.log_format);
    tracing::info!(
        host = %config.host,
        port = config.port,
        store = ?config.store,
        "Loaded server configuration"
    );

    // --- Store ---
    let (store, pool) = open_store(&config).await?;

    // --- Router ---
    let state = AppState::new(store, config.clone());
    let app = build_app_router(state)?;

    // --- Start server ---
    let host: IpAddr = config
        .host
        .parse()
        .with_context(|| format!("Invalid HOST address {:?}", config.host))?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // --- Post-shutdown cleanup ---
    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }
    tracing::info!("Graceful shutdown complete");

    Ok(())
}

/// Build the process-wide customer store.
///
/// For PostgreSQL the pool connects lazily. One connection attempt (health
/// check plus migrations) is made up front; if it fails the error is logged
/// and the server starts anyway, so requests fail individually until the
/// database becomes reachable.
async fn open_store(
    config: &ServerConfig,
) -> anyhow::Result<(Arc<dyn CustomerStore>, Option<DbPool>)> {
    match config.store {
        StoreKind::Memory => {
            tracing::warn!("Using in-memory customer store; data is lost on restart");
            let store: Arc<dyn CustomerStore> = Arc::new(MemoryCustomerStore::new());
            Ok((store, None))
        }
        StoreKind::Postgres => {
            let pool =
                customers_db::create_lazy_pool(&config.database_url, config.db_max_connections)
                    .context("Invalid DATABASE_URL")?;

            match bootstrap_database(&pool).await {
                Ok(()) => tracing::info!("Database is connected"),
                Err(err) => tracing::error!(
                    error = %format_args!("{err:#}"),
                    "Database unavailable at startup; requests will fail until it is reachable"
                ),
            }

            let store: Arc<dyn CustomerStore> = Arc::new(PgCustomerStore::new(pool.clone()));
            Ok((store, Some(pool)))
        }
    }
}

async fn bootstrap_database(pool: &DbPool) -> anyhow::Result<()> {
    customers_db::health_check(pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    customers_db::run_migrations(pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
