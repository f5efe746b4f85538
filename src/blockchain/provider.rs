//! The `BlockchainDataProvider` trait, the seam between contract reads and the network.

use async_trait::async_trait;

use crate::blockchain::types::{TransportResult, VmValueRequest, VmValuesResponseData};

/// Executes read-only VM queries against a node or gateway.
///
/// Implementations must be `Send + Sync`; a single instance is shared by every handler.
/// Dropping the returned future cancels the query.
#[async_trait]
pub trait BlockchainDataProvider: Send + Sync {
    /// Execute a VM query and return its raw output.
    async fn execute_vm_query(&self, request: &VmValueRequest)
        -> TransportResult<VmValuesResponseData>;
}
