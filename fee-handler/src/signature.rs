//! Oracle signature verification
//!
//! The oracle signs the 224-byte quote with a plain Ethereum key using
//! `personal_sign`. Verification recovers the signer through the chain's
//! secp256k1 host function and compares it with the configured oracle address.

use cosmwasm_std::Api;
use thiserror::Error;

use crate::fee_data::SIGNATURE_LENGTH;
use crate::hash::{eth_signed_message_hash, evm_address_from_pubkey, evm_address_to_hex, EvmAddress};

/// secp256k1 group order divided by two, big-endian
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SignatureError {
    #[error("expected 65-byte signature, got {got}")]
    InvalidLength { got: usize },

    #[error("invalid recovery id {v}")]
    InvalidRecoveryId { v: u8 },

    #[error("signature s value is in the upper half of the curve order")]
    MalleableSignature,

    #[error("public key recovery failed: {reason}")]
    RecoveryFailed { reason: String },

    #[error("signer {recovered} is not the oracle {expected}")]
    SignerMismatch { expected: String, recovered: String },
}

/// Recover the EVM address that produced `signature` over `message`.
pub fn recover_signer(
    api: &dyn Api,
    message: &[u8],
    signature: &[u8],
) -> Result<EvmAddress, SignatureError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(SignatureError::InvalidLength {
            got: signature.len(),
        });
    }

    let recovery_param = match signature[64] {
        v @ (0 | 1) => v,
        v @ (27 | 28) => v - 27,
        v => return Err(SignatureError::InvalidRecoveryId { v }),
    };

    // Big-endian fixed width, so byte order comparison is numeric comparison
    if signature[32..64] > SECP256K1_HALF_ORDER[..] {
        return Err(SignatureError::MalleableSignature);
    }

    let digest = eth_signed_message_hash(message);
    let pubkey = api
        .secp256k1_recover_pubkey(&digest, &signature[..64], recovery_param)
        .map_err(|e| SignatureError::RecoveryFailed {
            reason: e.to_string(),
        })?;

    evm_address_from_pubkey(&pubkey).map_err(|reason| SignatureError::RecoveryFailed {
        reason: reason.to_string(),
    })
}

/// Check that `signature` over `message` was produced by `oracle`.
pub fn verify_oracle_signature(
    api: &dyn Api,
    message: &[u8],
    signature: &[u8],
    oracle: &EvmAddress,
) -> Result<(), SignatureError> {
    let recovered = recover_signer(api, message, signature)?;
    if recovered != *oracle {
        return Err(SignatureError::SignerMismatch {
            expected: evm_address_to_hex(oracle),
            recovered: evm_address_to_hex(&recovered),
        });
    }
    Ok(())
}
