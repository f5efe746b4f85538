//! VM query wire types and transport error definitions.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

// Re-export BlockchainConfig from config module to avoid duplication
pub use crate::config::schema::BlockchainConfig;

/// Return code reported by the VM when a view call executed successfully.
pub const RETURN_CODE_OK: &str = "ok";

/// Return code reported by the VM when the target address holds no contract.
pub const RETURN_CODE_CONTRACT_NOT_FOUND: &str = "contract not found";

/// A read-only call into a smart contract view function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VmValueRequest {
    /// Bech32 address of the contract being queried.
    #[serde(rename = "scAddress")]
    pub address: String,
    /// Name of the view function.
    #[serde(rename = "funcName")]
    pub func_name: String,
    /// Bech32 address the call is issued from.
    #[serde(rename = "caller")]
    pub caller_addr: String,
    /// Value transferred with the call, as a decimal string.
    #[serde(rename = "value")]
    pub call_value: String,
    /// Hex-encoded arguments, in call order.
    pub args: Vec<String>,
}

/// Output of a VM query execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmOutput {
    /// Raw values returned by the function. The first one carries the scalar result.
    #[serde(default, deserialize_with = "decode_return_data")]
    pub return_data: Vec<Vec<u8>>,
    /// Execution status (`"ok"`, `"contract not found"`, ...).
    #[serde(default)]
    pub return_code: String,
    /// Human readable detail accompanying a failed return code.
    #[serde(default)]
    pub return_message: String,
}

impl VmOutput {
    /// Build a successful output carrying the given return data.
    pub fn ok(return_data: Vec<Vec<u8>>) -> Self {
        Self {
            return_data,
            return_code: RETURN_CODE_OK.to_string(),
            return_message: String::new(),
        }
    }

    /// Build an output with the given return code and no data.
    pub fn with_code(return_code: impl Into<String>) -> Self {
        Self {
            return_data: Vec::new(),
            return_code: return_code.into(),
            return_message: String::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.return_code == RETURN_CODE_OK
    }
}

/// Result of a VM query as handed back by a [`BlockchainDataProvider`].
///
/// `data` is `None` when the gateway answered without a VM output.
///
/// [`BlockchainDataProvider`]: crate::blockchain::BlockchainDataProvider
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VmValuesResponseData {
    #[serde(default)]
    pub data: Option<VmOutput>,
}

impl From<VmOutput> for VmValuesResponseData {
    fn from(output: VmOutput) -> Self {
        Self { data: Some(output) }
    }
}

/// Envelope returned by the gateway's `/vm-values/query` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VmValuesResponse {
    #[serde(default)]
    pub data: Option<VmValuesResponseData>,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub code: String,
}

fn decode_return_data<'de, D>(deserializer: D) -> Result<Vec<Vec<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    let encoded: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    encoded
        .unwrap_or_default()
        .into_iter()
        .map(|item| match item {
            Some(s) if !s.is_empty() => STANDARD.decode(s).map_err(serde::de::Error::custom),
            _ => Ok(Vec::new()),
        })
        .collect()
}

/// Errors that can occur while executing a VM query against a gateway.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection or request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Gateway answered with a non-success HTTP status.
    #[error("gateway returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Gateway answered 2xx but reported an error in the envelope.
    #[error("gateway error ({code}): {message}")]
    Gateway { code: String, message: String },

    /// Response body could not be decoded.
    #[error("invalid gateway response: {0}")]
    InvalidResponse(String),

    /// Request exceeded the configured deadline.
    #[error("VM query timed out after {0} seconds")]
    Timeout(u64),

    /// Gateway URL could not be parsed.
    #[error("invalid gateway URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
