//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! ContractQueryHandler
//!     → provider.rs (BlockchainDataProvider trait)
//!     → client.rs (HTTP gateway, POST /vm-values/query with timeout)
//!     → types.rs (VmValueRequest out, VmValuesResponseData back)
//! ```
//!
//! # Constraints
//! - Read-only: only view functions are executed, nothing is signed or submitted
//! - Every gateway call has a deadline
//! - One request per query, no retries

pub mod client;
pub mod provider;
pub mod types;

pub use client::ProxyDataProvider;
pub use provider::BlockchainDataProvider;
pub use types::{
    BlockchainConfig, TransportError, TransportResult, VmOutput, VmValueRequest,
    VmValuesResponseData,
};
