use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use employee_records::{api, config::ServerConfig, db::Database};

#[derive(Parser)]
#[command(name = "employee-records")]
#[command(about = "Employee record service with a JSON HTTP API")]
struct Cli {
    #[command(flatten)]
    config: ServerConfig,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "employee_records=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.config;
    tracing::info!("Opening employee database at {}", config.database);

    let db = Database::open_location(&config.database)?;
    db.init_schema()?;

    let app = api::create_router(db.clone());

    let listener = tokio::net::TcpListener::bind(config.socket_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.socket_addr()))?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    match db.close() {
        Ok(()) => tracing::info!("Database connection closed"),
        Err(e) => tracing::warn!("Failed to close database cleanly: {:#}", e),
    }

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM. In-flight requests finish before the
/// server future returns.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        },
    }
}
