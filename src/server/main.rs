//! Tool server for the disaster-response agents.
//!
//! Loads the datasets once, then serves the facility, flood, and tip tools
//! over HTTP.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use daas::api::{create_router, AppState};
use daas::catalog::load_catalog;
use daas::config::Config;
use daas::Toolkit;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "daas-server")]
#[command(about = "Disaster-response tool server")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address (overrides config)
    #[arg(short, long)]
    listen: Option<String>,

    /// Places dataset (overrides config)
    #[arg(long)]
    places: Option<PathBuf>,

    /// Facilities dataset (overrides config)
    #[arg(long)]
    facilities: Option<PathBuf>,

    /// Safety tips dataset (overrides config)
    #[arg(long)]
    tips: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(listen) = args.listen {
        config.server.listen = listen;
    }
    if let Some(places) = args.places {
        config.datasets.places = places;
    }
    if let Some(facilities) = args.facilities {
        config.datasets.facilities = facilities;
    }
    if let Some(tips) = args.tips {
        config.datasets.tips = tips;
    }

    info!("DAAS Tool Server");

    // Datasets must be fully loaded before the first request is served
    let catalog = load_catalog(&config.datasets).context("Failed to load datasets")?;
    let toolkit = Toolkit::new(catalog, config.locator.clone());
    let state = Arc::new(AppState::new(toolkit));

    let app = create_router(state);

    info!("Starting server on {}", config.server.listen);

    let listener = tokio::net::TcpListener::bind(&config.server.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
