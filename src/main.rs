//! attendance-engine HTTP server
//!
//! Loads `settings.yaml` from the configuration directory and serves the
//! calculation API.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "attendance-engine", version, about = "Attendance time-calculation API")]
struct Args {
    /// Directory containing settings.yaml
    #[arg(long, default_value = "./config/default")]
    config: PathBuf,

    /// Socket address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("attendance_engine=info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();

    let args = Args::parse();

    let config = ConfigLoader::load(&args.config)
        .with_context(|| format!("loading configuration from {}", args.config.display()))?;
    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("binding {}", args.addr))?;
    info!(addr = %args.addr, "attendance-engine listening");

    axum::serve(listener, router).await.context("HTTP server failed")?;
    Ok(())
}
