//! Credits contract reads.
//!
//! # Data Flow
//! ```text
//! ContractHandler::{is_contract_paused, get_credits_per_egld}
//!     → Cacher (read-through on isPaused / creditsPerEgld)
//!     → BlockchainDataProvider::execute_vm_query (on miss)
//!     → decoder.rs (big-endian return data → u64)
//!     → Cacher::set (definitive results only)
//!
//! ContractHandler::get_credits(id)
//!     → BlockchainDataProvider::execute_vm_query (always, never cached)
//!     → decoder.rs
//! ```

pub mod decoder;
pub mod handler;
pub mod query;
pub mod types;

pub use decoder::decode_u64;
pub use handler::ContractHandler;
pub use query::{ContractQueryHandler, ContractQueryHandlerBuilder};
pub use types::{ContractError, ContractResult, DecodeError};
