use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tubesearch::api::{AppState, create_router};
use tubesearch::client::UpstreamClient;
use tubesearch::config::Config;
use tubesearch::query::QueryBuilder;
use tubesearch::render::PageRenderer;

/// Serve YouTube search results as a plain HTML page.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Address to listen on (overrides BIND_ADDR)
    #[arg(long)]
    bind: Option<SocketAddr>,
    /// Search API endpoint (overrides YOUTUBE_API_URL)
    #[arg(long)]
    api_url: Option<String>,
    /// Upstream request timeout in seconds (overrides UPSTREAM_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (also picks up log crate records)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(secs) = cli.timeout_secs {
        config.upstream_timeout = Some(Duration::from_secs(secs));
    }

    let state = Arc::new(AppState {
        query_builder: QueryBuilder::new(&config.api_url, config.api_key.clone())?,
        client: UpstreamClient::new(config.upstream_timeout)?,
        renderer: PageRenderer::new().context("loading page templates")?,
    });
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding to {}", config.bind_addr))?;
    tracing::info!("listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("running server")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to install Ctrl+C handler: {:#}", e);
    }
}
