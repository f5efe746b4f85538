//! Public configuration snapshot served to wallets and front-ends.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::contract::handler::ContractHandler;
use crate::contract::types::{ContractError, ContractResult};

/// Point-in-time view of contract state plus static service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    #[serde(rename = "isContractPaused")]
    pub is_contract_paused: bool,
    #[serde(rename = "creditsPerEGLD")]
    pub credits_per_egld: u64,
    #[serde(rename = "walletURL")]
    pub wallet_url: String,
    #[serde(rename = "explorerURL")]
    pub explorer_url: String,
    #[serde(rename = "minimumBalance")]
    pub minimum_balance: f64,
}

/// Assembles [`ConfigSnapshot`]s from a contract handler and static settings.
#[derive(Clone)]
pub struct ConfigHandler {
    contract_handler: Arc<dyn ContractHandler>,
    wallet_url: String,
    explorer_url: String,
    minimum_balance: f64,
}

impl std::fmt::Debug for ConfigHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigHandler")
            .field("wallet_url", &self.wallet_url)
            .field("explorer_url", &self.explorer_url)
            .field("minimum_balance", &self.minimum_balance)
            .finish_non_exhaustive()
    }
}

impl ConfigHandler {
    /// Create a new config handler.
    ///
    /// URLs and the minimum balance are stored as given; only the contract
    /// handler is required.
    pub fn new(
        wallet_url: impl Into<String>,
        explorer_url: impl Into<String>,
        contract_handler: Option<Arc<dyn ContractHandler>>,
        minimum_balance: f64,
    ) -> ContractResult<Self> {
        let contract_handler = contract_handler.ok_or_else(|| {
            ContractError::InvalidArgument("missing contract handler".to_string())
        })?;

        Ok(Self {
            contract_handler,
            wallet_url: wallet_url.into(),
            explorer_url: explorer_url.into(),
            minimum_balance,
        })
    }

    /// Build a fresh snapshot. Either contract read failing aborts the whole snapshot.
    pub async fn get_config(&self) -> ContractResult<ConfigSnapshot> {
        let is_contract_paused = self.contract_handler.is_contract_paused().await?;
        let credits_per_egld = self.contract_handler.get_credits_per_egld().await?;

        Ok(ConfigSnapshot {
            is_contract_paused,
            credits_per_egld,
            wallet_url: self.wallet_url.clone(),
            explorer_url: self.explorer_url.clone(),
            minimum_balance: self.minimum_balance,
        })
    }

    /// The wrapped contract handler.
    pub fn contract_handler(&self) -> &Arc<dyn ContractHandler> {
        &self.contract_handler
    }
}
