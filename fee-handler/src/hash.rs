//! Hashing and EVM address helpers
//!
//! Oracle quotes are signed off-chain with standard Ethereum tooling, so the
//! digest and the signer identity follow EVM conventions:
//! - digest: `keccak256("\x19Ethereum Signed Message:\n32" ++ keccak256(message))`
//! - address: last 20 bytes of `keccak256(uncompressed_pubkey[1..])`

use tiny_keccak::{Hasher, Keccak};

/// EIP-191 prefix for a 32-byte personal message
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// 20-byte EVM account address
pub type EvmAddress = [u8; 20];

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Digest an oracle signs for `message` (EIP-191 personal message over its keccak hash).
pub fn eth_signed_message_hash(message: &[u8]) -> [u8; 32] {
    let inner = keccak256(message);
    let mut hasher = Keccak::v256();
    hasher.update(ETH_SIGNED_MESSAGE_PREFIX);
    hasher.update(&inner);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Derive the EVM address of a 65-byte uncompressed secp256k1 public key.
pub fn evm_address_from_pubkey(pubkey: &[u8]) -> Result<EvmAddress, &'static str> {
    if pubkey.len() != 65 || pubkey[0] != 0x04 {
        return Err("expected 65-byte uncompressed public key");
    }
    let hash = keccak256(&pubkey[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Ok(address)
}

/// Format an EVM address as lowercase `0x`-prefixed hex
pub fn evm_address_to_hex(address: &EvmAddress) -> String {
    format!("0x{}", hex::encode(address))
}

/// Parse hex string (with or without 0x prefix) to a 20-byte EVM address
pub fn parse_evm_address(hex_str: &str) -> Result<EvmAddress, &'static str> {
    let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    if hex_str.len() != 40 {
        return Err("Invalid hex length: expected 40 characters");
    }
    let mut address = [0u8; 20];
    hex::decode_to_slice(hex_str, &mut address).map_err(|_| "Invalid hex character")?;
    Ok(address)
}

/// Convert 32-byte value to hex string (for attributes)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
