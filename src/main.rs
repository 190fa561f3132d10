//! YearMaps Server
//!
//! Run with: cargo run -- --config yearmaps.toml
//!
//! # Configuration
//!
//! Settings are layered, later sources winning:
//! 1. Built-in defaults
//! 2. `yearmaps.toml` (or the file given with `--config`)
//! 3. `YEARMAPS_*` environment variables
//! 4. `--host` / `--port` flags
//!
//! `RUST_LOG` overrides the configured log level.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yearmaps::config::{generate_default_config, Config, LoggingConfig};
use yearmaps::{serve, AppState, Catalog};

#[derive(Parser)]
#[command(name = "yearmaps")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve generated year heat-maps to the YearMaps gallery")]
struct Cli {
    /// Host to listen on
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Path to config file (default: ./yearmaps.toml when present)
    #[arg(short = 'f', long)]
    config: Option<PathBuf>,

    /// Print a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default()?,
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;

    init_tracing(&config.logging);

    tracing::info!("Starting YearMaps v{}", env!("CARGO_PKG_VERSION"));
    match &cli.config {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config location with environment overrides"),
    }
    tracing::info!("Image directory: {}", config.gallery.image_dir);

    std::fs::create_dir_all(&config.gallery.image_dir)
        .with_context(|| format!("creating image directory {}", config.gallery.image_dir))?;

    if config.providers.is_empty() {
        tracing::warn!("No providers configured, the gallery will be empty");
    }

    let catalog = Arc::new(Catalog::new(config.gallery.clone(), config.providers.clone()));
    let published = catalog.refresh().await?;
    tracing::info!(
        "Publishing {} of {} configured heat-maps",
        published,
        config.providers.len()
    );

    let refresh_handle = catalog.start_background_refresh();

    if let Some(dir) = &config.server.static_dir {
        tracing::info!("Serving front-end from {}", dir);
    }

    serve(AppState::new(catalog, config.server)).await?;

    if let Some(handle) = refresh_handle {
        handle.abort();
    }
    tracing::info!("YearMaps stopped");

    Ok(())
}

/// Initialize tracing with the configured level and format
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("yearmaps={},tower_http=debug", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
