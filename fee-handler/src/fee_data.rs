//! Oracle fee data codec
//!
//! The depositor attaches a fixed-layout payload: an oracle quote, the oracle's
//! signature over that quote, and the deposit amount.
//!
//! # Byte Layout (321 bytes total)
//! - Bytes 0-31:    baseExchangeRate (uint256, x10^18)
//! - Bytes 32-63:   targetExchangeRate (uint256, x10^18)
//! - Bytes 64-95:   destinationGasPrice (uint256)
//! - Bytes 96-127:  timestamp (uint256, unix seconds)
//! - Bytes 128-159: fromDomainID (uint8, left-padded)
//! - Bytes 160-191: toDomainID (uint8, left-padded)
//! - Bytes 192-223: resourceID (bytes32)
//! - Bytes 224-288: signature (r ++ s ++ v) over bytes 0-223
//! - Bytes 289-320: depositAmount (uint256) - not covered by the signature

use cosmwasm_std::Uint256;
use thiserror::Error;

use common::{DomainId, ResourceId};

/// Length of the signed oracle message (7 words)
pub const SIGNED_MESSAGE_LENGTH: usize = 224;

/// Length of an `r ++ s ++ v` signature
pub const SIGNATURE_LENGTH: usize = 65;

/// Total fee data length
pub const FEE_DATA_LENGTH: usize = SIGNED_MESSAGE_LENGTH + SIGNATURE_LENGTH + 32;

const BASE_RATE_OFFSET: usize = 0;
const TARGET_RATE_OFFSET: usize = 32;
const GAS_PRICE_OFFSET: usize = 64;
const TIMESTAMP_OFFSET: usize = 96;
const FROM_DOMAIN_OFFSET: usize = 128;
const TO_DOMAIN_OFFSET: usize = 160;
const RESOURCE_ID_OFFSET: usize = 192;
const SIGNATURE_OFFSET: usize = SIGNED_MESSAGE_LENGTH;
const AMOUNT_OFFSET: usize = SIGNATURE_OFFSET + SIGNATURE_LENGTH;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FeeDataError {
    #[error("Incorrect fee data length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("{field} does not fit in uint8")]
    DomainIdOutOfRange { field: &'static str },
}

/// Decoded fee data payload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeData {
    pub base_exchange_rate: Uint256,
    pub target_exchange_rate: Uint256,
    pub destination_gas_price: Uint256,
    pub timestamp: Uint256,
    pub from_domain_id: DomainId,
    pub to_domain_id: DomainId,
    pub resource_id: ResourceId,
    pub signature: [u8; SIGNATURE_LENGTH],
    pub deposit_amount: Uint256,
}

impl FeeData {
    /// Decode a 321-byte payload.
    pub fn decode(data: &[u8]) -> Result<Self, FeeDataError> {
        if data.len() != FEE_DATA_LENGTH {
            return Err(FeeDataError::InvalidLength {
                expected: FEE_DATA_LENGTH,
                got: data.len(),
            });
        }

        let mut resource_id = [0u8; 32];
        resource_id.copy_from_slice(&data[RESOURCE_ID_OFFSET..RESOURCE_ID_OFFSET + 32]);
        let mut signature = [0u8; SIGNATURE_LENGTH];
        signature.copy_from_slice(&data[SIGNATURE_OFFSET..SIGNATURE_OFFSET + SIGNATURE_LENGTH]);

        Ok(Self {
            base_exchange_rate: read_word(data, BASE_RATE_OFFSET),
            target_exchange_rate: read_word(data, TARGET_RATE_OFFSET),
            destination_gas_price: read_word(data, GAS_PRICE_OFFSET),
            timestamp: read_word(data, TIMESTAMP_OFFSET),
            from_domain_id: read_domain_id(data, FROM_DOMAIN_OFFSET, "fromDomainID")?,
            to_domain_id: read_domain_id(data, TO_DOMAIN_OFFSET, "toDomainID")?,
            resource_id,
            signature,
            deposit_amount: read_word(data, AMOUNT_OFFSET),
        })
    }

    /// Encode into the 321-byte wire layout.
    pub fn encode(&self) -> [u8; FEE_DATA_LENGTH] {
        let mut data = [0u8; FEE_DATA_LENGTH];
        data[..SIGNED_MESSAGE_LENGTH].copy_from_slice(&self.signed_message());
        data[SIGNATURE_OFFSET..AMOUNT_OFFSET].copy_from_slice(&self.signature);
        data[AMOUNT_OFFSET..].copy_from_slice(&self.deposit_amount.to_be_bytes());
        data
    }

    /// The 224 bytes the oracle signs.
    pub fn signed_message(&self) -> [u8; SIGNED_MESSAGE_LENGTH] {
        let mut message = [0u8; SIGNED_MESSAGE_LENGTH];
        write_word(&mut message, BASE_RATE_OFFSET, &self.base_exchange_rate);
        write_word(&mut message, TARGET_RATE_OFFSET, &self.target_exchange_rate);
        write_word(&mut message, GAS_PRICE_OFFSET, &self.destination_gas_price);
        write_word(&mut message, TIMESTAMP_OFFSET, &self.timestamp);
        // uint8 in the last byte of its slot
        message[FROM_DOMAIN_OFFSET + 31] = self.from_domain_id;
        message[TO_DOMAIN_OFFSET + 31] = self.to_domain_id;
        message[RESOURCE_ID_OFFSET..RESOURCE_ID_OFFSET + 32].copy_from_slice(&self.resource_id);
        message
    }
}

/// Split a raw payload into (signed message, signature).
///
/// The caller must have checked the length; this never re-encodes, so the
/// signature is verified over exactly the bytes the depositor supplied.
pub fn split_signed_message(data: &[u8]) -> Result<(&[u8], &[u8]), FeeDataError> {
    if data.len() != FEE_DATA_LENGTH {
        return Err(FeeDataError::InvalidLength {
            expected: FEE_DATA_LENGTH,
            got: data.len(),
        });
    }
    Ok((
        &data[..SIGNED_MESSAGE_LENGTH],
        &data[SIGNATURE_OFFSET..AMOUNT_OFFSET],
    ))
}

fn read_word(data: &[u8], offset: usize) -> Uint256 {
    let mut word = [0u8; 32];
    word.copy_from_slice(&data[offset..offset + 32]);
    Uint256::from_be_bytes(word)
}

fn write_word(buf: &mut [u8], offset: usize, value: &Uint256) {
    buf[offset..offset + 32].copy_from_slice(&value.to_be_bytes());
}

fn read_domain_id(
    data: &[u8],
    offset: usize,
    field: &'static str,
) -> Result<DomainId, FeeDataError> {
    let slot = &data[offset..offset + 32];
    if slot[..31].iter().any(|b| *b != 0) {
        return Err(FeeDataError::DomainIdOutOfRange { field });
    }
    Ok(slot[31])
}
