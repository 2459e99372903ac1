// src/main.rs

use clap::Parser;
use tracing::{Level, info};

use layali::api::http::build_router;
use layali::config::CONFIG;
use layali::state::AppState;

#[derive(Parser)]
#[command(name = "layali")]
#[command(about = "Chat concierge backend for the Layali Zaman website", long_about = None)]
struct Cli {
    /// Address to bind (overrides LAYALI_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides LAYALI_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        Level::DEBUG
    } else {
        CONFIG.log_level.parse().unwrap_or(Level::INFO)
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("Starting Layali chat concierge");
    info!("Model: {}", CONFIG.model);
    info!("Content store: {}", CONFIG.content_api_url);
    if CONFIG.openai_api_key.is_none() {
        info!("OPENAI_API_KEY not set; chat requests will be refused until it is");
    }

    let state = AppState::from_config();
    let app = build_router(state);

    let host = cli.host.unwrap_or_else(|| CONFIG.host.clone());
    let port = cli.port.unwrap_or(CONFIG.port);
    let bind_address = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
