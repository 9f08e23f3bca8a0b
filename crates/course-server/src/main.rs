//! Course management server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p course-server
//! ```
//!
//! Configuration is loaded from environment variables (with `.env` support).
//! The process opens the database pool, applies schema auto-migration, then
//! waits for SIGINT/SIGTERM and closes the pool before exiting.

use course_common::{try_init_tracing, AppConfig};
use course_db::{auto_migrate, create_pool, ping, DatabaseConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Startup failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting course management server...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        host = %config.database.host,
        dbname = %config.database.dbname,
        "Configuration loaded"
    );

    // Connect, migrate, and verify connectivity; any failure here is fatal
    let db_config = DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config).await?;
    auto_migrate(&pool).await?;
    ping(&pool).await?;
    info!("Database initialized");

    // Block until the process is asked to stop
    shutdown_signal().await;

    info!("Shutdown signal received, closing database pool");
    pool.close().await;
    info!("Shutdown complete");

    Ok(())
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
