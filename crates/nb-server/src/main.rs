mod config;
mod error;
mod models;
mod routes;
mod service;
mod state;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nb_providers::OpenAIProvider;

use config::Config;
use service::NewsService;
use state::AppState;

#[derive(Parser)]
#[command(name = "newsbrief")]
#[command(author, version, about = "Agent-driven news summary service", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "newsbrief.toml")]
    config: String,

    /// Log filter when RUST_LOG is unset
    #[arg(long, default_value = "newsbrief=info,tower_http=info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let config = Config::load(&cli.config)?;

    let provider = Arc::new(
        OpenAIProvider::new(config.openai.api_key.clone())
            .with_default_model(config.openai.model.clone()),
    );
    let service = NewsService::new(provider, &config)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, model = %config.openai.model, "newsbrief listening");

    let app = routes::create_routes(AppState::new(config, service));
    axum::serve(listener, app).await?;

    Ok(())
}
