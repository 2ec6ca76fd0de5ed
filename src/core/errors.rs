use thiserror::Error;

/// Message used when a non-zero mint fee is paired with a missing or unusable token.
pub const INVALID_MINT_FEE_TOKEN: &str =
    "Invalid mint fee token address, mint fee is greater than 0.";

/// Error type for NFT client operations.
///
/// Leaf variants carry the collaborator's message verbatim so that the
/// operation-level wrappers produce `"<prefix>: <original message>"`.
#[derive(Debug, Error)]
pub enum NftError {
    /// Caller input is malformed. Never retried.
    #[error("{0}")]
    Validation(String),
    /// The contract call would revert.
    #[error("{0}")]
    Simulation(String),
    /// Broadcasting failed (network, wallet, nonce).
    #[error("{0}")]
    Submission(String),
    /// The transaction was not confirmed (timeout, dropped).
    #[error("{0}")]
    Confirmation(String),
    /// Calldata could not be produced.
    #[error("{0}")]
    Encoding(String),
    /// A read-only contract call failed.
    #[error("{0}")]
    Call(String),
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to create a SPG NFT collection: {0}")]
    CreateCollection(Box<NftError>),
    #[error("Failed to get mint fee token: {0}")]
    GetMintFeeToken(Box<NftError>),
    #[error("Failed to get mint fee: {0}")]
    GetMintFee(Box<NftError>),
}

impl NftError {
    /// Strips the operation wrappers and returns the error that caused the failure.
    pub fn root_cause(&self) -> &NftError {
        match self {
            NftError::CreateCollection(inner)
            | NftError::GetMintFeeToken(inner)
            | NftError::GetMintFee(inner) => inner.root_cause(),
            other => other,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.root_cause(), NftError::Validation(_))
    }

    /// Collaborator failures that a caller may choose to retry.
    /// A confirmation failure is excluded: the transaction may still be pending.
    pub fn is_retryable(&self) -> bool {
        matches!(self.root_cause(), NftError::Submission(_) | NftError::Call(_))
    }

    pub(crate) fn create_collection(self) -> Self {
        NftError::CreateCollection(Box::new(self))
    }
}

impl From<toml::de::Error> for NftError {
    fn from(err: toml::de::Error) -> Self {
        NftError::Config(err.to_string())
    }
}

impl From<std::io::Error> for NftError {
    fn from(err: std::io::Error) -> Self {
        NftError::Config(err.to_string())
    }
}
