//! SPG NFT collections
//!
//! Collection creation through the registration workflows contract and
//! mint-fee reads on deployed SPG NFT contracts.

pub mod client;
pub mod types;

pub use client::NftClient;
pub use types::*;
