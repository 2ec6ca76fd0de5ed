use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, time::Duration};

use crate::core::errors::NftError;

/// Client configuration.
///
/// Loaded from a TOML file and/or `SPG_*` environment variables. The signing
/// key is only ever taken from `SPG_WALLET_PRIVATE_KEY` and is never serialized.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// JSON-RPC endpoint.
    #[serde(default = "ClientConfig::default_rpc_url")]
    pub rpc_url: String,

    /// Chain name, see `blockchain::chain`.
    #[serde(default = "ClientConfig::default_chain")]
    pub chain: String,

    /// Address of the registration workflows contract on `chain`.
    #[serde(default)]
    pub registration_workflows_address: String,

    /// Confirmations required when waiting for a receipt.
    #[serde(default = "ClientConfig::default_confirmations")]
    pub confirmations: usize,

    /// Upper bound on a confirmation wait (seconds).
    #[serde(default = "ClientConfig::default_confirmation_timeout")]
    pub confirmation_timeout_secs: u64,

    /// HTTP timeout for individual RPC requests (seconds).
    #[serde(default = "ClientConfig::default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(skip)]
    pub private_key: Option<String>,
}

impl ClientConfig {
    fn default_rpc_url() -> String {
        "http://127.0.0.1:8545".to_string()
    }
    fn default_chain() -> String {
        "sepolia".to_string()
    }
    fn default_confirmations() -> usize {
        1
    }
    fn default_confirmation_timeout() -> u64 {
        120
    }
    fn default_request_timeout() -> u64 {
        10
    }

    /// Reads a TOML file, then applies environment overrides.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, NftError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: ClientConfig = toml::from_str(&content)?;
        config.apply_env()?;
        Ok(config)
    }

    /// Defaults plus environment overrides.
    pub fn from_env() -> Result<Self, NftError> {
        let mut config = ClientConfig::default();
        config.apply_env()?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<(), NftError> {
        if let Ok(v) = std::env::var("SPG_RPC_URL") {
            self.rpc_url = v;
        }
        if let Ok(v) = std::env::var("SPG_CHAIN") {
            self.chain = v;
        }
        if let Ok(v) = std::env::var("SPG_REGISTRATION_WORKFLOWS") {
            self.registration_workflows_address = v;
        }
        if let Ok(v) = std::env::var("SPG_CONFIRMATIONS") {
            self.confirmations = v
                .parse()
                .map_err(|e| NftError::Config(format!("SPG_CONFIRMATIONS: {}", e)))?;
        }
        if let Ok(v) = std::env::var("SPG_CONFIRMATION_TIMEOUT_SECS") {
            self.confirmation_timeout_secs = v
                .parse()
                .map_err(|e| NftError::Config(format!("SPG_CONFIRMATION_TIMEOUT_SECS: {}", e)))?;
        }
        if let Ok(v) = std::env::var("SPG_WALLET_PRIVATE_KEY") {
            self.private_key = Some(v);
        }
        Ok(())
    }

    pub fn confirmation_timeout(&self) -> Duration {
        Duration::from_secs(self.confirmation_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: Self::default_rpc_url(),
            chain: Self::default_chain(),
            registration_workflows_address: String::new(),
            confirmations: Self::default_confirmations(),
            confirmation_timeout_secs: Self::default_confirmation_timeout(),
            request_timeout_secs: Self::default_request_timeout(),
            private_key: None,
        }
    }
}

// Keeps the private key out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("rpc_url", &self.rpc_url)
            .field("chain", &self.chain)
            .field("registration_workflows_address", &self.registration_workflows_address)
            .field("confirmations", &self.confirmations)
            .field("confirmation_timeout_secs", &self.confirmation_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
