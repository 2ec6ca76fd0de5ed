// src/lib.rs

pub mod blockchain;
pub mod core;
pub mod nft;

// Live-testnet helpers; compiled for unit tests or with the `test-env` feature.
#[cfg(any(test, feature = "test-env"))]
pub mod testing;

pub use crate::core::errors::NftError;
pub use nft::{CollectionParams, CreationResult, NftClient, TxOptions};
