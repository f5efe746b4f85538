//! Cached, fail-safe reads of the credits contract.
//!
//! # Responsibilities
//! - Build view-call requests (caller = contract itself, call value 0)
//! - Read-through caching of `isPaused` and `creditsPerEgld`
//! - Fail-safe interpretation of pause state: anything ambiguous reads as paused
//! - Uncached per-account credit lookups
//!
//! # Error policy
//! The pause check absorbs missing contracts and failed executions into
//! `Ok(true)`. The numeric reads have no safe default, so every failure is
//! returned to the caller. Only definitive results are cached.

use async_trait::async_trait;
use std::sync::Arc;

use crate::blockchain::provider::BlockchainDataProvider;
use crate::blockchain::types::{VmOutput, VmValueRequest, RETURN_CODE_CONTRACT_NOT_FOUND};
use crate::cache::{CacheKey, CacheValue, Cacher};
use crate::contract::decoder::{decode_u64, encode_u64_arg};
use crate::contract::handler::ContractHandler;
use crate::contract::types::{ContractError, ContractResult};
use crate::observability::metrics;

const IS_PAUSED_FUNC: &str = "isPaused";
const CREDITS_PER_EGLD_FUNC: &str = "getCreditsPerEgld";
const GET_CREDITS_FUNC: &str = "getCredits";

/// Reads contract state through a [`BlockchainDataProvider`], caching stable values.
#[derive(Clone)]
pub struct ContractQueryHandler {
    provider: Arc<dyn BlockchainDataProvider>,
    contract_address: String,
    cache: Arc<dyn Cacher>,
}

/// Builder for [`ContractQueryHandler`]; every field is required.
#[derive(Default)]
pub struct ContractQueryHandlerBuilder {
    provider: Option<Arc<dyn BlockchainDataProvider>>,
    contract_address: String,
    cache: Option<Arc<dyn Cacher>>,
}

impl ContractQueryHandlerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the VM query transport.
    pub fn provider(mut self, provider: Arc<dyn BlockchainDataProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the bech32 address of the credits contract.
    pub fn contract_address(mut self, address: impl Into<String>) -> Self {
        self.contract_address = address.into();
        self
    }

    /// Set the cache for `isPaused` / `creditsPerEgld`.
    pub fn cache(mut self, cache: Arc<dyn Cacher>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Build the handler, failing on any missing dependency.
    pub fn build(self) -> ContractResult<ContractQueryHandler> {
        let provider = self.provider.ok_or_else(|| {
            ContractError::InvalidArgument("missing blockchain data provider".to_string())
        })?;
        if self.contract_address.is_empty() {
            return Err(ContractError::InvalidArgument(
                "empty contract address".to_string(),
            ));
        }
        let cache = self
            .cache
            .ok_or_else(|| ContractError::InvalidArgument("missing cache".to_string()))?;

        Ok(ContractQueryHandler {
            provider,
            contract_address: self.contract_address,
            cache,
        })
    }
}

impl ContractQueryHandler {
    /// Create a handler from optional dependencies.
    ///
    /// Fails with [`ContractError::InvalidArgument`] when the provider or cache
    /// is absent or the address is empty.
    pub fn new(
        provider: Option<Arc<dyn BlockchainDataProvider>>,
        contract_address: &str,
        cache: Option<Arc<dyn Cacher>>,
    ) -> ContractResult<Self> {
        ContractQueryHandlerBuilder {
            provider,
            contract_address: contract_address.to_string(),
            cache,
        }
        .build()
    }

    pub fn builder() -> ContractQueryHandlerBuilder {
        ContractQueryHandlerBuilder::new()
    }

    /// Bech32 address of the queried contract.
    pub fn contract_address(&self) -> &str {
        &self.contract_address
    }

    fn view_request(&self, func_name: &str, args: Vec<String>) -> VmValueRequest {
        VmValueRequest {
            address: self.contract_address.clone(),
            func_name: func_name.to_string(),
            caller_addr: self.contract_address.clone(),
            call_value: "0".to_string(),
            args,
        }
    }

    /// Typed cache read; an entry of the wrong variant counts as a miss.
    fn cached<T>(&self, key: CacheKey, typed: impl FnOnce(CacheValue) -> Option<T>) -> Option<T> {
        let value = self.cache.get(key.as_str()).and_then(typed);
        metrics::record_cache_lookup(key.as_str(), value.is_some());
        value
    }

    /// Run a numeric view call, requiring a successful execution.
    async fn query_u64(&self, func_name: &str, args: Vec<String>) -> ContractResult<u64> {
        let request = self.view_request(func_name, args);
        let response = self.provider.execute_vm_query(&request).await?;
        let output = response
            .data
            .ok_or_else(|| ContractError::EmptyResponse(func_name.to_string()))?;

        if !output.is_ok() {
            return Err(ContractError::Execution {
                function: func_name.to_string(),
                code: output.return_code,
                message: output.return_message,
            });
        }

        Ok(decode_u64(&output.return_data)?)
    }
}

#[async_trait]
impl ContractHandler for ContractQueryHandler {
    async fn is_contract_paused(&self) -> ContractResult<bool> {
        if let Some(paused) = self.cached(CacheKey::IsPaused, |v| v.as_bool()) {
            tracing::debug!(paused, "Pause state served from cache");
            return Ok(paused);
        }

        let request = self.view_request(IS_PAUSED_FUNC, Vec::new());
        let response = self.provider.execute_vm_query(&request).await?;

        let output = match response.data {
            Some(output) if output.return_code != RETURN_CODE_CONTRACT_NOT_FOUND => output,
            _ => {
                tracing::warn!(
                    contract = %self.contract_address,
                    "Contract not found or empty response, treating as paused"
                );
                return Ok(true);
            }
        };

        if !output.is_ok() {
            tracing::warn!(
                contract = %self.contract_address,
                return_code = %output.return_code,
                return_message = %output.return_message,
                "isPaused did not execute successfully, treating as paused"
            );
            return Ok(true);
        }

        let paused = decode_paused(&output);
        self.cache.set(CacheKey::IsPaused.as_str(), paused.into());

        Ok(paused)
    }

    async fn get_credits_per_egld(&self) -> ContractResult<u64> {
        if let Some(rate) = self.cached(CacheKey::CreditsPerEgld, |v| v.as_u64()) {
            tracing::debug!(rate, "Credits per EGLD served from cache");
            return Ok(rate);
        }

        let rate = self.query_u64(CREDITS_PER_EGLD_FUNC, Vec::new()).await?;
        self.cache.set(CacheKey::CreditsPerEgld.as_str(), rate.into());

        Ok(rate)
    }

    async fn get_credits(&self, id: u64) -> ContractResult<u64> {
        self.query_u64(GET_CREDITS_FUNC, vec![encode_u64_arg(id)])
            .await
    }
}

impl std::fmt::Debug for ContractQueryHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractQueryHandler")
            .field("contract_address", &self.contract_address)
            .finish()
    }
}

/// Only a first byte of exactly 1 means paused.
fn decode_paused(output: &VmOutput) -> bool {
    output
        .return_data
        .first()
        .and_then(|value| value.first())
        .map(|b| *b == 1)
        .unwrap_or(false)
}
