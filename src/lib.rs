//! Credits contract gateway library.
//!
//! Reads the state of a MultiversX "credits" smart contract through VM
//! queries, caches the stable values, and serves a configuration snapshot
//! and per-account credit balances over HTTP.

pub mod blockchain;
pub mod cache;
pub mod config;
pub mod contract;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod service;

pub use blockchain::{BlockchainDataProvider, ProxyDataProvider};
pub use cache::{CacheValue, Cacher, MemoryCache};
pub use config::GatewayConfig;
pub use contract::{ContractError, ContractHandler, ContractQueryHandler};
pub use http::HttpServer;
pub use service::{ConfigHandler, ConfigSnapshot};
