//! # eventsd — events daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`eventsd.toml`, env vars)
//! - Initialize tracing
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct the event service, injecting repositories via port traits
//! - Spawn the periodic cost job
//! - Build the axum router, injecting the event service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use eventsproject_adapter_http_axum::state::AppState;
use eventsproject_adapter_storage_sqlite_sqlx::{
    SqliteEventRepository, SqliteLogisticsRepository, SqliteParticipantRepository,
};
use eventsproject_app::cost_scheduler::CostScheduler;
use eventsproject_app::services::event_service::EventService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    let (filter, filter_error) = match config.logging.env_filter() {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new("info"), Some(err)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
    if let Some(err) = filter_error {
        tracing::warn!(
            filter = %config.logging.filter,
            error = %err,
            "invalid log filter, falling back to info"
        );
    }

    // Database
    let db = eventsproject_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let participant_repo = SqliteParticipantRepository::new(pool.clone());
    let event_repo = SqliteEventRepository::new(pool.clone());
    let logistics_repo = SqliteLogisticsRepository::new(pool);

    // Services
    let event_service = Arc::new(EventService::new(
        participant_repo,
        event_repo,
        logistics_repo,
    ));

    // Cost job
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let scheduler = if config.cost.enabled {
        let scheduler = CostScheduler::new(
            Arc::clone(&event_service),
            config.cost.organizer.clone(),
            config.cost.interval(),
        );
        Some(tokio::spawn(scheduler.run(shutdown_rx)))
    } else {
        tracing::info!("cost scheduler disabled");
        None
    };

    // HTTP
    let app = eventsproject_adapter_http_axum::router::build(AppState::from_arc(event_service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "eventsd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let _ = shutdown_tx.send(true);
    if let Some(handle) = scheduler {
        handle.await?;
    }
    tracing::info!("eventsd stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
