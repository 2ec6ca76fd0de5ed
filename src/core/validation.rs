use ethers::{types::Address, utils::to_checksum};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

use crate::core::errors::NftError;

static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("Hardcoded regex should always compile"));

/// Returns true when `address` is a 0x-prefixed 20-byte hex string.
/// Mixed-case input must carry a valid EIP-55 checksum; all-lower or all-upper is accepted.
pub fn is_address(address: &str) -> bool {
    if !ADDRESS_RE.is_match(address) {
        return false;
    }
    let body = &address[2..];
    let is_all_lower = body.chars().all(|c| !c.is_ascii_uppercase());
    let is_all_upper = body.chars().all(|c| !c.is_ascii_lowercase());
    if is_all_lower || is_all_upper {
        return true;
    }
    Address::from_str(address)
        .map(|parsed| to_checksum(&parsed, None) == address)
        .unwrap_or(false)
}

/// Parses an address, failing with the `Address "<input>" is invalid.` validation error.
pub fn parse_address(address: &str) -> Result<Address, NftError> {
    if !is_address(address) {
        return Err(NftError::Validation(format!("Address \"{}\" is invalid.", address)));
    }
    Address::from_str(address)
        .map_err(|_| NftError::Validation(format!("Address \"{}\" is invalid.", address)))
}

/// A usable ERC-20 token address: well formed and not the zero address.
pub fn is_valid_token_address(address: Option<&str>) -> bool {
    match address {
        Some(addr) => parse_address(addr).map(|a| !a.is_zero()).unwrap_or(false),
        None => false,
    }
}
