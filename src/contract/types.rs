//! Contract read error definitions.

use thiserror::Error;

use crate::blockchain::types::TransportError;

/// Errors raised while decoding numeric return data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Returned integer does not fit in 64 bits. Carries the value as hex.
    #[error("value 0x{0} is not a uint64")]
    ValueOutOfRange(String),
}

/// Errors that can occur while reading contract state.
#[derive(Debug, Error)]
pub enum ContractError {
    /// A constructor received a missing or empty dependency.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The VM query could not be executed.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The returned value could not be decoded.
    #[error("decode failure: {0}")]
    Decode(#[from] DecodeError),

    /// The gateway answered without a VM output.
    #[error("empty VM query response for {0}")]
    EmptyResponse(String),

    /// The view function ran but did not succeed.
    #[error("{function} failed with return code '{code}': {message}")]
    Execution {
        function: String,
        code: String,
        message: String,
    },
}

/// Result type for contract reads.
pub type ContractResult<T> = Result<T, ContractError>;
