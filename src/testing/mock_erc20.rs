use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, PendingTransaction},
    types::{Address, TransactionReceipt, U256},
};
use std::sync::Arc;
use tracing::info;

use crate::blockchain::{
    chain::chain_id_from_name,
    contracts::MockErc20Token,
    ethereum::{http_provider, wallet_from_private_key, SignerClient},
};
use crate::core::{config::ClientConfig, errors::NftError, validation::parse_address};

/// Mock ERC-20 deployed on sepolia, used as a mint-fee token in integration tests.
pub const MOCK_ERC20_ADDRESS: &str = "0xB132A6B7AE652c974EE1557A3521D53d18F6739f";

/// 100 000 tokens at 6 decimals.
pub fn test_amount() -> U256 {
    U256::from(100_000u64) * U256::exp10(6)
}

/// Sepolia mock ERC-20 driven by the test wallet.
///
/// Reads `SEPOLIA_RPC_PROVIDER_URL`, `SEPOLIA_WALLET_PRIVATE_KEY` and
/// `SEPOLIA_TEST_WALLET_ADDRESS`.
pub struct MockErc20 {
    token: MockErc20Token<SignerClient>,
    recipient: Address,
}

impl MockErc20 {
    pub async fn connect() -> Result<Self, NftError> {
        let config = ClientConfig {
            rpc_url: required_env("SEPOLIA_RPC_PROVIDER_URL")?,
            chain: "sepolia".to_string(),
            ..Default::default()
        };
        let provider = http_provider(&config)?;
        let wallet = wallet_from_private_key(
            &required_env("SEPOLIA_WALLET_PRIVATE_KEY")?,
            chain_id_from_name(&config.chain)?,
        )?;
        let recipient = parse_address(&required_env("SEPOLIA_TEST_WALLET_ADDRESS")?)?;

        let client = Arc::new(SignerMiddleware::new(provider, wallet));
        let token = MockErc20Token::new(parse_address(MOCK_ERC20_ADDRESS)?, client);
        Ok(Self { token, recipient })
    }

    pub fn address(&self) -> Address {
        self.token.address()
    }

    /// Approves `spender` for `test_amount()` and waits for the receipt.
    pub async fn approve(&self, spender: Address) -> Result<TransactionReceipt, NftError> {
        let call = self.token.approve(spender, test_amount());
        call.call().await.map_err(|e| NftError::Simulation(e.to_string()))?;
        let pending = call.send().await.map_err(|e| NftError::Submission(e.to_string()))?;
        info!(spender = ?spender, tx_hash = ?pending.tx_hash(), "Mock ERC20 approve sent");
        confirm(pending).await
    }

    /// Mints `test_amount()` to the test wallet and waits for the receipt.
    pub async fn mint(&self) -> Result<TransactionReceipt, NftError> {
        let call = self.token.mint(self.recipient, test_amount());
        call.call().await.map_err(|e| NftError::Simulation(e.to_string()))?;
        let pending = call.send().await.map_err(|e| NftError::Submission(e.to_string()))?;
        info!(to = ?self.recipient, tx_hash = ?pending.tx_hash(), "Mock ERC20 mint sent");
        confirm(pending).await
    }
}

fn required_env(name: &str) -> Result<String, NftError> {
    std::env::var(name).map_err(|_| NftError::Config(format!("{} is not set", name)))
}

async fn confirm(pending: PendingTransaction<'_, Http>) -> Result<TransactionReceipt, NftError> {
    let tx_hash = pending.tx_hash();
    pending
        .await
        .map_err(|e| NftError::Confirmation(e.to_string()))?
        .ok_or_else(|| {
            NftError::Confirmation(format!("Transaction {:?} was dropped from the mempool", tx_hash))
        })
}
