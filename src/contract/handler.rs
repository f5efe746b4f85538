//! The `ContractHandler` trait consumed by the service layer.

use async_trait::async_trait;

use crate::contract::types::ContractResult;

/// Typed read access to the credits contract.
#[async_trait]
pub trait ContractHandler: Send + Sync {
    /// Whether the contract is paused.
    ///
    /// An `Err` means the pause state could not be established and the
    /// contract must be treated as paused.
    async fn is_contract_paused(&self) -> ContractResult<bool>;

    /// Exchange rate between EGLD and credits.
    async fn get_credits_per_egld(&self) -> ContractResult<u64>;

    /// Credit balance of the account with the given numeric id.
    async fn get_credits(&self, id: u64) -> ContractResult<u64>;

    /// Pause state collapsed to a definitive answer, errors counting as paused.
    async fn is_paused_fail_safe(&self) -> bool {
        self.is_contract_paused().await.unwrap_or(true)
    }
}
