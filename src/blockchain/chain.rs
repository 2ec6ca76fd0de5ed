use crate::core::errors::NftError;

const CHAINS: &[(&str, u64)] = &[
    ("ethereum", 1),
    ("mainnet", 1),
    ("sepolia", 11155111),
    ("polygon", 137),
    ("story", 1514),
    ("aeneid", 1315),
    ("odyssey", 1516),
    ("iliad", 1513),
];

/// Resolves a chain name (case-insensitive) to its chain id.
pub fn chain_id_from_name(name: &str) -> Result<u64, NftError> {
    let wanted = name.trim().to_ascii_lowercase();
    CHAINS
        .iter()
        .find(|(n, _)| *n == wanted)
        .map(|(_, id)| *id)
        .ok_or_else(|| NftError::Config(format!("Unsupported chain: {}", name)))
}

pub fn chain_name(chain_id: u64) -> String {
    match chain_id {
        1 => "ethereum".to_string(),
        11155111 => "sepolia".to_string(),
        137 => "polygon".to_string(),
        1514 => "story".to_string(),
        1315 => "aeneid".to_string(),
        1516 => "odyssey".to_string(),
        1513 => "iliad".to_string(),
        _ => format!("ethereum-{}", chain_id),
    }
}
