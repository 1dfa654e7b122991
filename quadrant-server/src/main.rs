//! quadrantd — HTTP server for the quadrant classification service.

mod api;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use quadrant_core::QuadrantConfig;
use quadrant_router::ClassificationService;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "quadrantd")]
#[command(author, version, about = "Eisenhower quadrant classification service", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "quadrant.toml")]
    config: String,

    /// HTTP listen address
    #[arg(long, default_value = "0.0.0.0:8090")]
    addr: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = if Path::new(&cli.config).exists() {
        info!("loading configuration from {}", cli.config);
        QuadrantConfig::load(&cli.config)?
    } else {
        info!("no configuration file, using defaults");
        QuadrantConfig::default()
    };

    // Service setup builds blocking HTTP clients and may touch the
    // corpus file; keep it off the async workers.
    let service = tokio::task::spawn_blocking(move || ClassificationService::new(config))
        .await
        .context("service startup task failed")??;
    let app = api::router(Arc::new(service));

    let listener = tokio::net::TcpListener::bind(&cli.addr)
        .await
        .with_context(|| format!("cannot bind {}", cli.addr))?;
    info!("listening on {}", cli.addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
