use async_trait::async_trait;
use ethers::types::{transaction::eip2718::TypedTransaction, Address, TransactionReceipt, TxHash, U256};

use crate::blockchain::contracts::{CollectionCreatedFilter, InitParams};
use crate::core::errors::NftError;
use crate::nft::types::{EncodedTxData, WaitOptions};

/// A simulated call, ready to be signed and broadcast.
#[derive(Debug, Clone)]
pub struct PreparedCall {
    pub tx: TypedTransaction,
}

/// Transaction capabilities of the registration workflows contract.
#[async_trait]
pub trait CollectionWorkflows: Send + Sync {
    /// The signing account; default owner of new collections.
    fn account(&self) -> Address;

    /// Dry-runs `createCollection`. Fails with `NftError::Simulation` if it would revert.
    async fn simulate_create_collection(
        &self,
        params: &InitParams,
    ) -> Result<PreparedCall, NftError>;

    /// Broadcasts a prepared call. Fails with `NftError::Submission`.
    async fn submit(&self, call: PreparedCall) -> Result<TxHash, NftError>;

    /// Suspends until `tx_hash` is mined. Fails with `NftError::Confirmation`
    /// on timeout or when the transaction is dropped.
    async fn await_confirmation(
        &self,
        tx_hash: TxHash,
        options: &WaitOptions,
    ) -> Result<TransactionReceipt, NftError>;

    /// Best-effort decoding of `CollectionCreated` logs emitted by the workflows contract.
    fn parse_collection_created(&self, receipt: &TransactionReceipt) -> Vec<CollectionCreatedFilter>;

    /// Encodes a `createCollection` call without touching the network.
    fn encode_create_collection(&self, params: &InitParams) -> Result<EncodedTxData, NftError>;
}

/// Read-only accessors of a deployed SPG NFT contract.
#[async_trait]
pub trait SpgNftReader: Send + Sync {
    async fn mint_fee_token(&self, spg_nft_contract: Address) -> Result<Address, NftError>;

    async fn mint_fee(&self, spg_nft_contract: Address) -> Result<U256, NftError>;
}
