//! Startup orchestration.
//!
//! Builds the component graph from a validated configuration:
//! provider → cache → contract query handler → config handler.
//! Any failure here is fatal.

use std::sync::Arc;
use thiserror::Error;

use crate::blockchain::{BlockchainDataProvider, ProxyDataProvider, TransportError};
use crate::cache::{Cacher, MemoryCache};
use crate::config::GatewayConfig;
use crate::contract::{ContractError, ContractHandler, ContractQueryHandler};
use crate::service::ConfigHandler;

/// Errors raised while wiring subsystems together.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to create gateway client: {0}")]
    Provider(#[from] TransportError),

    #[error("failed to create handler: {0}")]
    Handler(#[from] ContractError),
}

/// Wire a [`ConfigHandler`] on top of an existing provider and cache.
pub fn build_config_handler(
    config: &GatewayConfig,
    provider: Arc<dyn BlockchainDataProvider>,
    cache: Arc<dyn Cacher>,
) -> Result<Arc<ConfigHandler>, StartupError> {
    let contract_handler = ContractQueryHandler::builder()
        .provider(provider)
        .contract_address(config.blockchain.contract_address.clone())
        .cache(cache)
        .build()?;
    let contract_handler: Arc<dyn ContractHandler> = Arc::new(contract_handler);

    let config_handler = ConfigHandler::new(
        config.service.wallet_url.clone(),
        config.service.explorer_url.clone(),
        Some(contract_handler),
        config.service.minimum_balance,
    )?;

    Ok(Arc::new(config_handler))
}

/// Build every subsystem from configuration.
pub fn initialize(config: &GatewayConfig) -> Result<Arc<ConfigHandler>, StartupError> {
    let provider = Arc::new(ProxyDataProvider::new(config.blockchain.clone())?);
    let cache = Arc::new(MemoryCache::from_ttl_secs(config.cache.ttl_secs));

    tracing::info!(
        contract = %config.blockchain.contract_address,
        cache_ttl_secs = config.cache.ttl_secs,
        "Contract handlers initialized"
    );

    build_config_handler(config, provider, cache)
}
