//! Taskify server: the kanban JSON API over axum.
//!
//! # Usage
//!
//! ```bash
//! # In-memory stores on the default address 0.0.0.0:3000
//! cargo run --bin taskify-server
//!
//! # PostgreSQL stores, closing the gap a moved task leaves behind
//! DATABASE_URL=postgres://taskify@localhost/taskify \
//!     cargo run --bin taskify-server -- --compact-vacated true
//! ```

use std::sync::Arc;

use clap::Parser;
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use taskify::board::adapters::{memory::InMemoryBoardRepository, postgres::PostgresBoardRepository};
use taskify::config::{TaskifyCliArgs, TaskifyConfig};
use taskify::http::{self, AppState};
use taskify::identity::{IdentityVerifier, adapters::StaticTokenVerifier};
use taskify::task::adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository};
use taskify::user::adapters::{memory::InMemoryUserRepository, postgres::PostgresUserRepository};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = TaskifyCliArgs::parse();
    let config = TaskifyConfig::load(&cli)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let verifier = StaticTokenVerifier::new(config.tokens.clone())?
        .with_expired(config.expired_tokens.iter().cloned());
    let state = build_state(&config, Arc::new(verifier))?;

    if config.seed_templates {
        let seeded = state.boards.seed_templates().await?;
        info!(seeded, "template boards ready");
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(
        addr = %listener.local_addr()?,
        compact_vacated = config.positions.compact_vacated,
        validate_columns = config.positions.validate_columns,
        "taskify server listening"
    );
    axum::serve(listener, http::router(state, &config.allowed_origins))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("taskify server stopped");
    Ok(())
}

fn build_state(
    config: &TaskifyConfig,
    identity: Arc<dyn IdentityVerifier>,
) -> Result<AppState, BoxError> {
    let Some(url) = config.database_url.as_deref() else {
        info!("using in-memory stores");
        return Ok(AppState::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryBoardRepository::new()),
            Arc::new(InMemoryTaskRepository::new()),
            identity,
            config.positions,
        ));
    };

    let pool = Pool::builder()
        .max_size(config.max_connections)
        .build(ConnectionManager::<PgConnection>::new(url))?;
    info!(max_connections = config.max_connections, "using PostgreSQL stores");
    Ok(AppState::new(
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(PostgresBoardRepository::new(pool.clone())),
        Arc::new(PostgresTaskRepository::new(pool)),
        identity,
        config.positions,
    ))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
