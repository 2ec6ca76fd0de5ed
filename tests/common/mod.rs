#![allow(dead_code)]
//! Test double for the chain collaborator.

use async_trait::async_trait;
use ethers::types::{Address, Bytes, TransactionReceipt, TxHash, U256};
use spg_nft_client::blockchain::contracts::{CollectionCreatedFilter, InitParams};
use spg_nft_client::blockchain::{CollectionWorkflows, PreparedCall, SpgNftReader};
use spg_nft_client::nft::{CollectionParams, EncodedTxData, WaitOptions};
use spg_nft_client::NftError;
use std::sync::Mutex;

pub const TX_HASH: &str = "0x063834efe214f4199b1ad7181ce8c5ced3e15d271c8e866da7c89e86ee629cfb";
pub const MINT_FEE_TOKEN: &str = "0x1daAE3197Bc469Cb97B917aa460a12dD95c6627c";
pub const RECIPIENT: &str = "0x73fcb515cee99e4991465ef586cfe2b072ebb512";
pub const ACCOUNT: &str = "0x0E61B0679673Ed99EA1e71E62aFf62BDcDFc70E9";

pub fn tx_hash() -> TxHash {
    TX_HASH.parse().unwrap()
}

pub fn addr(s: &str) -> Address {
    s.parse().unwrap()
}

pub fn base_params() -> CollectionParams {
    CollectionParams {
        name: "name".to_string(),
        symbol: "symbol".to_string(),
        contract_uri: "test-uri".to_string(),
        max_supply: Some(1),
        mint_fee: Some(1),
        mint_fee_token: Some(MINT_FEE_TOKEN.to_string()),
        mint_fee_recipient: RECIPIENT.to_string(),
        is_public_minting: true,
        mint_open: true,
        ..Default::default()
    }
}

/// Records every capability call; failures and outputs are configured per test.
pub struct StubWorkflows {
    pub account: Address,
    pub tx_hash: TxHash,
    pub simulate_error: Option<String>,
    pub submit_error: Option<String>,
    pub confirm_error: Option<String>,
    pub created: Vec<Address>,
    pub encoded: EncodedTxData,
    pub mint_fee: U256,
    pub mint_fee_token: Address,
    pub calls: Mutex<Vec<&'static str>>,
    pub last_init: Mutex<Option<InitParams>>,
    pub waited: Mutex<Option<(TxHash, WaitOptions)>>,
}

impl Default for StubWorkflows {
    fn default() -> Self {
        Self {
            account: addr(ACCOUNT),
            tx_hash: tx_hash(),
            simulate_error: None,
            submit_error: None,
            confirm_error: None,
            created: Vec::new(),
            encoded: EncodedTxData {
                to: addr(ACCOUNT),
                data: Bytes::from(vec![0x12, 0x34]),
            },
            mint_fee: U256::zero(),
            mint_fee_token: Address::zero(),
            calls: Mutex::new(Vec::new()),
            last_init: Mutex::new(None),
            waited: Mutex::new(None),
        }
    }
}

impl StubWorkflows {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_init(&self) -> InitParams {
        self.last_init.lock().unwrap().clone().expect("no init params recorded")
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CollectionWorkflows for StubWorkflows {
    fn account(&self) -> Address {
        self.account
    }

    async fn simulate_create_collection(
        &self,
        params: &InitParams,
    ) -> Result<PreparedCall, NftError> {
        self.record("simulate");
        *self.last_init.lock().unwrap() = Some(params.clone());
        match &self.simulate_error {
            Some(msg) => Err(NftError::Simulation(msg.clone())),
            None => Ok(PreparedCall { tx: Default::default() }),
        }
    }

    async fn submit(&self, _call: PreparedCall) -> Result<TxHash, NftError> {
        self.record("submit");
        match &self.submit_error {
            Some(msg) => Err(NftError::Submission(msg.clone())),
            None => Ok(self.tx_hash),
        }
    }

    async fn await_confirmation(
        &self,
        tx_hash: TxHash,
        options: &WaitOptions,
    ) -> Result<TransactionReceipt, NftError> {
        self.record("await_confirmation");
        *self.waited.lock().unwrap() = Some((tx_hash, *options));
        match &self.confirm_error {
            Some(msg) => Err(NftError::Confirmation(msg.clone())),
            None => Ok(TransactionReceipt { transaction_hash: tx_hash, ..Default::default() }),
        }
    }

    fn parse_collection_created(&self, _receipt: &TransactionReceipt) -> Vec<CollectionCreatedFilter> {
        self.record("parse_collection_created");
        self.created
            .iter()
            .map(|spg_nft_contract| CollectionCreatedFilter { spg_nft_contract: *spg_nft_contract })
            .collect()
    }

    fn encode_create_collection(&self, params: &InitParams) -> Result<EncodedTxData, NftError> {
        self.record("encode");
        *self.last_init.lock().unwrap() = Some(params.clone());
        Ok(self.encoded.clone())
    }
}

#[async_trait]
impl SpgNftReader for StubWorkflows {
    async fn mint_fee_token(&self, _spg_nft_contract: Address) -> Result<Address, NftError> {
        self.record("mint_fee_token");
        Ok(self.mint_fee_token)
    }

    async fn mint_fee(&self, _spg_nft_contract: Address) -> Result<U256, NftError> {
        self.record("mint_fee");
        Ok(self.mint_fee)
    }
}
