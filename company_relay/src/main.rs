use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use company_relay::cors::build_cors_layer;
use company_relay::{build_router, AppState, RelayConfig};
use company_relay_lib::Client;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "company-relay")]
#[command(about = "Relay company searches to the TruProxy registry and attach active officers")]
struct Cli {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:8000
    #[arg(long)]
    bind: Option<String>,

    /// Registry base URL
    #[arg(long)]
    upstream: Option<String>,

    /// Per-call upstream timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

fn load_config(cli: &Cli) -> Result<RelayConfig> {
    let mut config = match &cli.config {
        Some(path) => RelayConfig::from_toml_file(path)?,
        None => RelayConfig::default(),
    };
    config.apply_env()?;
    if let Some(bind) = &cli.bind {
        config.bind_addr = bind.clone();
    }
    if let Some(upstream) = &cli.upstream {
        config.upstream_base_url = upstream.clone();
    }
    if let Some(timeout) = cli.timeout {
        anyhow::ensure!(timeout > 0, "--timeout must be at least 1 second");
        config.request_timeout_secs = timeout;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "company_relay=info,company_relay_lib=info,tower_http=info".into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let client = Client::with_base_url(&config.upstream_base_url, config.request_timeout())
        .context("failed to build registry client")?;
    let app = build_router(AppState::new(client), build_cors_layer(&config.cors));

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;
    tracing::info!(
        "company-relay listening on {} (upstream {}, timeout {}s)",
        config.bind_addr,
        config.upstream_base_url,
        config.request_timeout_secs
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
