// SPDX-License-Identifier: MIT

mod aggregate;
mod api;
mod config;
mod error;
mod expiry;
mod feed;
mod names;
mod symbols;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use api::feed_client::FeedClient;
use api::AppState;

#[derive(Parser)]
#[command(about = "Serves the daily currency exchange rate feed as JSON")]
struct Cli {
    /// Override the configured listen address.
    #[arg(long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = config::load_config()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }

    let feed_tz = config.feed_tz()?;
    let feed_client = Arc::new(FeedClient::new(Duration::from_secs(
        config.fetch_timeout_secs,
    )));
    let listen_addr = config.listen_addr.clone();
    let state = Arc::new(AppState {
        config,
        feed_tz,
        feed_client,
    });

    let router = api::router(state);
    tracing::info!("Listening on {listen_addr}");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
