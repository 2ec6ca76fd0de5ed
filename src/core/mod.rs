pub mod config;
pub mod errors;
pub mod validation;

pub use config::ClientConfig;
pub use errors::NftError;
