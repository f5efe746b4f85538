//! Credits gateway server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request                ┌──────────────────────────────────────────────┐
//!     ──────────────────────────────┼─▶ http (axum)                                 │
//!                                   │     │                                        │
//!                                   │     ▼                                        │
//!                                   │  service::ConfigHandler                      │
//!                                   │     │                                        │
//!                                   │     ▼                                        │
//!                                   │  contract::ContractQueryHandler ◀──▶ cache   │
//!                                   │     │                                        │
//!                                   │     ▼                                        │
//!                                   │  blockchain::ProxyDataProvider ──────────────┼──▶ Gateway
//!                                   └──────────────────────────────────────────────┘    /vm-values/query
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::net::TcpListener;

use credits_gateway::config::loader::{load_or_default, CONFIG_PATH_ENV_VAR};
use credits_gateway::http::HttpServer;
use credits_gateway::lifecycle::{initialize, shutdown_signal};
use credits_gateway::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "credits-gateway")]
#[command(about = "Serves credits contract state over HTTP", long_about = None)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, env = CONFIG_PATH_ENV_VAR)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_or_default(args.config.as_deref())?;

    logging::init_logging(&config.observability.log_level)?;

    tracing::info!("credits-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        proxy_url = %config.blockchain.proxy_url,
        contract = %config.blockchain.contract_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Address already validated by the config loader.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let config_handler = initialize(&config)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(
        config_handler,
        Duration::from_secs(config.timeouts.request_secs),
    );
    server.run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
