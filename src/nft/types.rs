//! NFT collection request/response types

use ethers::types::{Address, Bytes, TxHash};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::config::ClientConfig;

/// Parameters of a new SPG NFT collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionParams {
    pub name: String,
    pub symbol: String,
    /// Base URI for token metadata. Empty when absent.
    #[serde(default, rename = "baseURI")]
    pub base_uri: Option<String>,
    #[serde(rename = "contractURI")]
    pub contract_uri: String,
    /// Collection owner. Defaults to the signing account.
    #[serde(default)]
    pub owner: Option<String>,
    /// Defaults to `u32::MAX` (effectively unbounded).
    #[serde(default)]
    pub max_supply: Option<u32>,
    /// Fee per mint in the token's smallest unit. The contract field is
    /// `uint256`, but fees above `i128::MAX` cannot be expressed here.
    #[serde(default)]
    pub mint_fee: Option<i128>,
    #[serde(default)]
    pub mint_fee_token: Option<String>,
    pub mint_fee_recipient: String,
    pub is_public_minting: bool,
    pub mint_open: bool,
}

/// Per-call transaction options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxOptions {
    /// Block until the transaction is confirmed.
    #[serde(default)]
    pub wait_for_transaction: bool,
    /// Return the encoded call instead of submitting. Takes precedence over `wait_for_transaction`.
    #[serde(default)]
    pub encoded_tx_data_only: bool,
    #[serde(default)]
    pub confirmations: Option<usize>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl TxOptions {
    pub fn wait() -> Self {
        Self { wait_for_transaction: true, ..Default::default() }
    }

    pub fn encode_only() -> Self {
        Self { encoded_tx_data_only: true, ..Default::default() }
    }
}

/// How a collection-creation call completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxMode {
    FireAndForget,
    WaitForConfirmation,
    EncodeOnly,
}

impl From<&TxOptions> for TxMode {
    fn from(options: &TxOptions) -> Self {
        match (options.encoded_tx_data_only, options.wait_for_transaction) {
            (true, _) => TxMode::EncodeOnly,
            (false, true) => TxMode::WaitForConfirmation,
            (false, false) => TxMode::FireAndForget,
        }
    }
}

/// Confirmation wait settings. The client holds one as its default and
/// resolves per-call overrides from `TxOptions` against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    pub confirmations: usize,
    pub timeout: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self { confirmations: 1, timeout: Duration::from_secs(120) }
    }
}

impl From<&ClientConfig> for WaitOptions {
    fn from(config: &ClientConfig) -> Self {
        Self { confirmations: config.confirmations, timeout: config.confirmation_timeout() }
    }
}

impl WaitOptions {
    /// Applies the per-call overrides in `tx_options` on top of `self`.
    pub fn resolve(&self, tx_options: &TxOptions) -> Self {
        Self {
            confirmations: tx_options.confirmations.unwrap_or(self.confirmations),
            timeout: tx_options.timeout_secs.map(Duration::from_secs).unwrap_or(self.timeout),
        }
    }
}

/// Raw call for external signing or relaying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedTxData {
    pub to: Address,
    pub data: Bytes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<TxHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spg_nft_contract: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded_tx_data: Option<EncodedTxData>,
}
