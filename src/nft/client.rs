//! SPG NFT collection client

use ethers::types::{Address, TxHash, U256};
use std::sync::Arc;
use tracing::{debug, info};

use super::types::*;
use crate::blockchain::contracts::InitParams;
use crate::blockchain::traits::{CollectionWorkflows, SpgNftReader};
use crate::core::{
    errors::{NftError, INVALID_MINT_FEE_TOKEN},
    validation::{is_valid_token_address, parse_address},
};

pub struct NftClient {
    workflows: Arc<dyn CollectionWorkflows>,
    spg_nft: Arc<dyn SpgNftReader>,
    wait_defaults: WaitOptions,
}

impl NftClient {
    pub fn new(workflows: Arc<dyn CollectionWorkflows>, spg_nft: Arc<dyn SpgNftReader>) -> Self {
        Self { workflows, spg_nft, wait_defaults: WaitOptions::default() }
    }

    /// Uses one chain client for both the workflows contract and SPG NFT reads.
    pub fn from_chain_client<C>(client: Arc<C>) -> Self
    where
        C: CollectionWorkflows + SpgNftReader + 'static,
    {
        Self::new(client.clone(), client)
    }

    pub fn with_wait_defaults(mut self, wait_defaults: WaitOptions) -> Self {
        self.wait_defaults = wait_defaults;
        self
    }

    /// Creates a new SPG NFT collection.
    ///
    /// `tx_options` selects the completion mode: encode-only wins over
    /// wait-for-transaction, otherwise the hash is returned as soon as the
    /// transaction is broadcast. Every failure is reported as
    /// `NftError::CreateCollection`.
    pub async fn create_collection(
        &self,
        params: CollectionParams,
        tx_options: TxOptions,
    ) -> Result<CreationResult, NftError> {
        self.try_create_collection(&params, &tx_options)
            .await
            .map_err(NftError::create_collection)
    }

    async fn try_create_collection(
        &self,
        params: &CollectionParams,
        tx_options: &TxOptions,
    ) -> Result<CreationResult, NftError> {
        let init = self.init_params(params)?;
        let mode = TxMode::from(tx_options);
        info!(name = %params.name, symbol = %params.symbol, ?mode, "Creating SPG NFT collection");

        match mode {
            TxMode::EncodeOnly => {
                let encoded = self.workflows.encode_create_collection(&init)?;
                Ok(CreationResult { encoded_tx_data: Some(encoded), ..Default::default() })
            }
            TxMode::FireAndForget => {
                let tx_hash = self.send_create_collection(&init).await?;
                Ok(CreationResult { tx_hash: Some(tx_hash), ..Default::default() })
            }
            TxMode::WaitForConfirmation => {
                let tx_hash = self.send_create_collection(&init).await?;
                let wait = self.wait_defaults.resolve(tx_options);
                let receipt = self.workflows.await_confirmation(tx_hash, &wait).await?;
                let spg_nft_contract = self
                    .workflows
                    .parse_collection_created(&receipt)
                    .first()
                    .map(|event| event.spg_nft_contract);
                info!(tx_hash = ?tx_hash, spg_nft_contract = ?spg_nft_contract, "Collection transaction confirmed");
                Ok(CreationResult { tx_hash: Some(tx_hash), spg_nft_contract, encoded_tx_data: None })
            }
        }
    }

    async fn send_create_collection(&self, init: &InitParams) -> Result<TxHash, NftError> {
        let prepared = self.workflows.simulate_create_collection(init).await?;
        self.workflows.submit(prepared).await
    }

    /// Validates caller input and builds the on-chain init params.
    fn init_params(&self, params: &CollectionParams) -> Result<InitParams, NftError> {
        let mint_fee = params.mint_fee.unwrap_or(0);
        if mint_fee != 0 && !is_valid_token_address(params.mint_fee_token.as_deref()) {
            return Err(NftError::Validation(INVALID_MINT_FEE_TOKEN.to_string()));
        }
        if mint_fee < 0 {
            return Err(NftError::Validation("Invalid mint fee, must not be negative.".to_string()));
        }

        let mint_fee_token = match params.mint_fee_token.as_deref() {
            Some(token) => parse_address(token)?,
            None => Address::zero(),
        };
        let mint_fee_recipient = parse_address(&params.mint_fee_recipient)?;
        let owner = match params.owner.as_deref() {
            Some(owner) => parse_address(owner)?,
            None => self.workflows.account(),
        };
        debug!(owner = ?owner, mint_fee = %mint_fee, "Collection params validated");

        Ok(InitParams {
            name: params.name.clone(),
            symbol: params.symbol.clone(),
            base_uri: params.base_uri.clone().unwrap_or_default(),
            contract_uri: params.contract_uri.clone(),
            max_supply: params.max_supply.unwrap_or(u32::MAX),
            mint_fee: U256::from(mint_fee as u128),
            mint_fee_token,
            mint_fee_recipient,
            owner,
            mint_open: params.mint_open,
            is_public_minting: params.is_public_minting,
        })
    }

    /// Returns the ERC-20 token the collection charges its mint fee in.
    pub async fn get_mint_fee_token(&self, spg_nft_contract: &str) -> Result<Address, NftError> {
        let wrap = |e: NftError| NftError::GetMintFeeToken(Box::new(e));
        let contract = parse_address(spg_nft_contract).map_err(wrap)?;
        self.spg_nft.mint_fee_token(contract).await.map_err(wrap)
    }

    pub async fn get_mint_fee(&self, spg_nft_contract: &str) -> Result<U256, NftError> {
        let wrap = |e: NftError| NftError::GetMintFee(Box::new(e));
        let contract = parse_address(spg_nft_contract).map_err(wrap)?;
        self.spg_nft.mint_fee(contract).await.map_err(wrap)
    }
}
