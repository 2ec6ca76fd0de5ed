//! Helpers for integration tests against a live testnet.

pub mod mock_erc20;

pub use mock_erc20::MockErc20;
