//! Roster server binary: wires configuration, storage, and routes, then
//! serves HTTP.

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use roster_core::{FileStore, SqliteUsersRepository};
use sqlx::sqlite::SqlitePoolOptions;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_server::{AppState, infra::config::Config, routes};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "roster-server")]
#[command(about = "User-management CRUD web server with image uploads")]
struct Cli {
    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Database URL (overrides config)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Directory for uploaded images (overrides config)
    #[arg(long, env = "UPLOAD_DIR")]
    upload_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(host) = cli.host {
        config.server_host = host;
    }
    if let Some(port) = cli.port {
        config.server_port = port;
    }
    if let Some(database_url) = cli.database_url {
        config.database_url = database_url;
    }
    if let Some(upload_dir) = cli.upload_dir {
        config.upload_dir = upload_dir;
    }
    config
        .ensure_directories()
        .context("failed to create upload directory")?;

    let pool = SqlitePoolOptions::new()
        .connect(&config.database_url)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;
    roster_core::MIGRATOR
        .run(&pool)
        .await
        .context("failed to run database migrations")?;

    let files = FileStore::new(config.upload_dir.clone()).context("failed to open upload directory")?;
    let users = Arc::new(SqliteUsersRepository::new(pool));

    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port)
        .parse()
        .context("invalid server address")?;

    let state = AppState::new(users, files, config);
    let app = routes::create_router(state);

    info!("Starting Roster server (HTTP) on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
