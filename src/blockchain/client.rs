//! HTTP gateway client executing VM queries.
//!
//! # Responsibilities
//! - Serialize [`VmValueRequest`]s to the gateway's `/vm-values/query` endpoint
//! - Enforce the configured request timeout
//! - Map HTTP failures and gateway-reported errors to [`TransportError`]
//!
//! Exactly one request is sent per query; failures are surfaced to the caller as-is.

use async_trait::async_trait;
use std::time::{Duration, Instant};
use tokio::time::timeout;

use crate::blockchain::provider::BlockchainDataProvider;
use crate::blockchain::types::{
    BlockchainConfig, TransportError, TransportResult, VmValueRequest, VmValuesResponse,
    VmValuesResponseData,
};
use crate::observability::metrics;

const VM_QUERY_PATH: &str = "vm-values/query";

/// Gateway-backed [`BlockchainDataProvider`].
#[derive(Clone)]
pub struct ProxyDataProvider {
    http: reqwest::Client,
    /// Fully resolved query endpoint.
    endpoint: url::Url,
    /// Configuration.
    config: BlockchainConfig,
    /// Request timeout duration.
    timeout_duration: Duration,
}

impl ProxyDataProvider {
    /// Create a new provider for the gateway configured in `config`.
    ///
    /// No network traffic happens here; an unreachable gateway only shows up on the first query.
    pub fn new(config: BlockchainConfig) -> TransportResult<Self> {
        let endpoint = query_endpoint(&config.proxy_url)?;
        let timeout_duration = Duration::from_secs(config.request_timeout_secs);

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| TransportError::Http(e.to_string()))?;

        tracing::info!(
            proxy_url = %config.proxy_url,
            timeout_secs = config.request_timeout_secs,
            "Gateway client initialized"
        );

        Ok(Self {
            http,
            endpoint,
            config,
            timeout_duration,
        })
    }

    async fn send(&self, request: &VmValueRequest) -> TransportResult<VmValuesResponseData> {
        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;
        let envelope: VmValuesResponse = serde_json::from_slice(&body)
            .map_err(|e| TransportError::InvalidResponse(e.to_string()))?;

        if !envelope.error.is_empty() {
            return Err(TransportError::Gateway {
                code: envelope.code,
                message: envelope.error,
            });
        }

        Ok(envelope.data.unwrap_or_default())
    }
}

#[async_trait]
impl BlockchainDataProvider for ProxyDataProvider {
    async fn execute_vm_query(
        &self,
        request: &VmValueRequest,
    ) -> TransportResult<VmValuesResponseData> {
        let start = Instant::now();
        let result = match timeout(self.timeout_duration, self.send(request)).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout(self.config.request_timeout_secs)),
        };

        match &result {
            Ok(_) => metrics::record_vm_query(&request.func_name, "ok", start),
            Err(e) => {
                tracing::warn!(function = %request.func_name, error = %e, "VM query failed");
                metrics::record_vm_query(&request.func_name, "error", start);
            }
        }

        result
    }
}

impl std::fmt::Debug for ProxyDataProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyDataProvider")
            .field("endpoint", &self.endpoint.as_str())
            .field("timeout_secs", &self.config.request_timeout_secs)
            .finish()
    }
}

fn query_endpoint(proxy_url: &str) -> TransportResult<url::Url> {
    let invalid = |reason: String| TransportError::InvalidUrl {
        url: proxy_url.to_string(),
        reason,
    };

    // A trailing slash keeps any path prefix of the gateway URL when joining.
    let base = if proxy_url.ends_with('/') {
        proxy_url.to_string()
    } else {
        format!("{proxy_url}/")
    };
    let base: url::Url = base.parse().map_err(|e: url::ParseError| invalid(e.to_string()))?;
    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
    }

    base.join(VM_QUERY_PATH).map_err(|e| invalid(e.to_string()))
}
