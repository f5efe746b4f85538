//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the credits gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Blockchain gateway and contract settings.
    pub blockchain: BlockchainConfig,

    /// Contract state cache settings.
    pub cache: CacheConfig,

    /// Static values published in the config snapshot.
    pub service: ServiceConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Blockchain integration configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BlockchainConfig {
    /// Gateway base URL exposing `/vm-values/query`.
    pub proxy_url: String,

    /// Bech32 address of the credits contract.
    pub contract_address: String,

    /// VM query timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for BlockchainConfig {
    fn default() -> Self {
        Self {
            proxy_url: "https://gateway.multiversx.com".to_string(),
            contract_address: String::new(),
            request_timeout_secs: 10,
        }
    }
}

/// Cache configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Lifetime of cached contract values in seconds (0 = until restart).
    pub ttl_secs: u64,
}

/// Values served verbatim in the config snapshot.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Web wallet URL.
    pub wallet_url: String,

    /// Block explorer URL.
    pub explorer_url: String,

    /// Minimum EGLD balance a client should hold.
    pub minimum_balance: f64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            wallet_url: "https://wallet.multiversx.com".to_string(),
            explorer_url: "https://explorer.multiversx.com".to_string(),
            minimum_balance: 0.05,
        }
    }
}

/// Timeout configuration for the HTTP API.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
