use async_trait::async_trait;
use ethers::{
    contract::parse_log,
    providers::{Http, Middleware, PendingTransaction, Provider},
    signers::{LocalWallet, Signer},
    types::{Address, TransactionReceipt, TxHash, U256, U64},
    middleware::SignerMiddleware,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::chain::{chain_id_from_name, chain_name};
use super::contracts::{CollectionCreatedFilter, InitParams, RegistrationWorkflows, SpgNft};
use super::traits::{CollectionWorkflows, PreparedCall, SpgNftReader};
use crate::core::{config::ClientConfig, errors::NftError, validation::parse_address};
use crate::nft::types::{EncodedTxData, WaitOptions};

/// Signing middleware used by `EthereumWorkflowsClient::connect`.
pub type SignerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// `CollectionWorkflows` and `SpgNftReader` over any ethers middleware.
#[derive(Clone, Debug)]
pub struct EthereumWorkflowsClient<M: Middleware> {
    client: Arc<M>,
    workflows: RegistrationWorkflows<M>,
    account: Address,
}

impl EthereumWorkflowsClient<SignerClient> {
    pub async fn connect(config: &ClientConfig) -> Result<Self, NftError> {
        let provider = http_provider(config)?;

        let chain_id = provider
            .get_chainid()
            .await
            .map_err(|e| {
                NftError::Config(format!(
                    "Failed to get chain ID from {}: {}. Check the RPC URL and network access.",
                    config.rpc_url, e
                ))
            })?
            .as_u64();
        let expected = chain_id_from_name(&config.chain)?;
        if chain_id != expected {
            return Err(NftError::Config(format!(
                "RPC endpoint is on chain {} but '{}' ({}) is configured",
                chain_id, config.chain, expected
            )));
        }
        info!("Connected to {} (Chain ID: {})", chain_name(chain_id), chain_id);

        let private_key = config
            .private_key
            .as_deref()
            .ok_or_else(|| NftError::Config("SPG_WALLET_PRIVATE_KEY is not set".to_string()))?;
        let wallet = wallet_from_private_key(private_key, chain_id)?;
        let account = wallet.address();

        let workflows_address = parse_address(&config.registration_workflows_address)
            .map_err(|e| NftError::Config(format!("registration_workflows_address: {}", e)))?;

        let client = Arc::new(SignerMiddleware::new(provider, wallet));
        Ok(Self::new(client, workflows_address, account))
    }
}

/// Builds an HTTP provider with a request timeout; honours HTTPS_PROXY/HTTP_PROXY.
pub fn http_provider(config: &ClientConfig) -> Result<Provider<Http>, NftError> {
    let rpc_url = config.rpc_url.trim();
    let parsed_url = reqwest::Url::parse(rpc_url)
        .map_err(|e| NftError::Config(format!("Invalid RPC URL '{}': {}", rpc_url, e)))?;

    let mut builder = reqwest::Client::builder().timeout(config.request_timeout());
    if let Ok(proxy) = std::env::var("HTTPS_PROXY").or_else(|_| std::env::var("HTTP_PROXY")) {
        let p = reqwest::Proxy::all(proxy.as_str()).map_err(|e| {
            warn!(proxy = %proxy, "Proxy URL from environment does not parse");
            NftError::Config(format!("Invalid proxy URL '{}': {}", proxy, e))
        })?;
        builder = builder.proxy(p);
    }
    let http = builder
        .build()
        .map_err(|e| NftError::Config(format!("Failed to build HTTP client: {}", e)))?;

    Ok(Provider::new(Http::new_with_client(parsed_url, http)))
}

/// Hex private key (with or without 0x) to a chain-bound wallet. Never logs key material.
pub fn wallet_from_private_key(private_key: &str, chain_id: u64) -> Result<LocalWallet, NftError> {
    let key = private_key.trim();
    let bytes = hex::decode(key.strip_prefix("0x").unwrap_or(key))
        .map_err(|_| NftError::Config("Private key must be hex encoded".to_string()))?;
    if bytes.len() != 32 {
        return Err(NftError::Config("Private key must be 32 bytes".to_string()));
    }
    let wallet = LocalWallet::from_bytes(&bytes)
        .map_err(|e| NftError::Config(format!("Invalid private key: {}", e)))?
        .with_chain_id(chain_id);
    Ok(wallet)
}

impl EthereumWorkflowsClient<Provider<Http>> {
    /// Unsigned binding for encode-only use; never contacts the RPC endpoint.
    /// `account` only serves as the default collection owner.
    pub fn offline(config: &ClientConfig, account: Address) -> Result<Self, NftError> {
        let provider = http_provider(config)?;
        let workflows_address = parse_address(&config.registration_workflows_address)
            .map_err(|e| NftError::Config(format!("registration_workflows_address: {}", e)))?;
        Ok(Self::new(Arc::new(provider), workflows_address, account))
    }
}

impl<M: Middleware + 'static> EthereumWorkflowsClient<M> {
    pub fn new(client: Arc<M>, workflows_address: Address, account: Address) -> Self {
        let workflows = RegistrationWorkflows::new(workflows_address, client.clone());
        Self { client, workflows, account }
    }

    pub fn workflows_address(&self) -> Address {
        self.workflows.address()
    }
}

#[async_trait]
impl<M: Middleware + 'static> CollectionWorkflows for EthereumWorkflowsClient<M> {
    fn account(&self) -> Address {
        self.account
    }

    async fn simulate_create_collection(
        &self,
        params: &InitParams,
    ) -> Result<PreparedCall, NftError> {
        let call = self.workflows.create_collection(params.clone()).from(self.account);
        let predicted =
            call.call().await.map_err(|e| NftError::Simulation(e.to_string()))?;
        debug!(spg_nft_contract = ?predicted, "createCollection simulation succeeded");
        Ok(PreparedCall { tx: call.tx })
    }

    async fn submit(&self, call: PreparedCall) -> Result<TxHash, NftError> {
        let pending = self
            .client
            .send_transaction(call.tx, None)
            .await
            .map_err(|e| NftError::Submission(e.to_string()))?;
        let tx_hash = pending.tx_hash();
        info!(tx_hash = ?tx_hash, "Transaction sent");
        Ok(tx_hash)
    }

    async fn await_confirmation(
        &self,
        tx_hash: TxHash,
        options: &WaitOptions,
    ) -> Result<TransactionReceipt, NftError> {
        debug!(tx_hash = ?tx_hash, confirmations = options.confirmations, "Waiting for receipt");
        let pending = PendingTransaction::new(tx_hash, self.client.provider())
            .confirmations(options.confirmations);

        match tokio::time::timeout(options.timeout, pending).await {
            Err(_) => Err(NftError::Confirmation(format!(
                "Timed out after {:?} waiting for transaction {:?}",
                options.timeout, tx_hash
            ))),
            Ok(Err(e)) => Err(NftError::Confirmation(e.to_string())),
            Ok(Ok(receipt)) => check_receipt(tx_hash, receipt),
        }
    }

    fn parse_collection_created(&self, receipt: &TransactionReceipt) -> Vec<CollectionCreatedFilter> {
        let workflows = self.workflows.address();
        receipt
            .logs
            .iter()
            .filter(|log| log.address == workflows)
            .filter_map(|log| parse_log::<CollectionCreatedFilter>(log.clone()).ok())
            .collect()
    }

    fn encode_create_collection(&self, params: &InitParams) -> Result<EncodedTxData, NftError> {
        let call = self.workflows.create_collection(params.clone());
        let data = call
            .calldata()
            .ok_or_else(|| NftError::Encoding("createCollection produced no calldata".to_string()))?;
        Ok(EncodedTxData { to: self.workflows.address(), data })
    }
}

/// A missing receipt means the transaction was dropped; status 0 means it reverted.
fn check_receipt(
    tx_hash: TxHash,
    receipt: Option<TransactionReceipt>,
) -> Result<TransactionReceipt, NftError> {
    let receipt = receipt.ok_or_else(|| {
        NftError::Confirmation(format!("Transaction {:?} was dropped from the mempool", tx_hash))
    })?;
    if receipt.status == Some(U64::zero()) {
        warn!(tx_hash = ?tx_hash, "Transaction reverted");
        return Err(NftError::Confirmation(format!("Transaction {:?} reverted", tx_hash)));
    }
    Ok(receipt)
}

#[async_trait]
impl<M: Middleware + 'static> SpgNftReader for EthereumWorkflowsClient<M> {
    async fn mint_fee_token(&self, spg_nft_contract: Address) -> Result<Address, NftError> {
        SpgNft::new(spg_nft_contract, self.client.clone())
            .mint_fee_token()
            .call()
            .await
            .map_err(|e| NftError::Call(e.to_string()))
    }

    async fn mint_fee(&self, spg_nft_contract: Address) -> Result<U256, NftError> {
        SpgNft::new(spg_nft_contract, self.client.clone())
            .mint_fee()
            .call()
            .await
            .map_err(|e| NftError::Call(e.to_string()))
    }
}
