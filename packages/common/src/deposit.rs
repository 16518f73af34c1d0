//! ERC-style deposit data layout.
//!
//! The bridge forwards the depositor's `deposit_data` to the fee handler
//! untouched. Only the leading amount word matters for fees; the rest is the
//! token handler's business.
//!
//! # Byte Layout
//! - Bytes 0-31:  amount (uint256, big-endian)
//! - Bytes 32-63: recipient length (uint256, big-endian)
//! - Bytes 64-..: recipient bytes

use cosmwasm_std::Uint256;
use thiserror::Error;

/// Size of one ABI word
const WORD: usize = 32;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DepositDataError {
    #[error("Deposit data too short: expected at least {expected} bytes, got {got}")]
    TooShort { expected: usize, got: usize },

    #[error("Recipient length {declared} does not match {available} trailing bytes")]
    RecipientLengthMismatch { declared: String, available: usize },
}

/// Decoded ERC-style deposit data
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErcDepositData {
    pub amount: Uint256,
    pub recipient: Vec<u8>,
}

/// Build deposit data for `amount` sent to `recipient`.
pub fn encode_erc_deposit_data(amount: Uint256, recipient: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(2 * WORD + recipient.len());
    data.extend_from_slice(&amount.to_be_bytes());
    data.extend_from_slice(&Uint256::from(recipient.len() as u128).to_be_bytes());
    data.extend_from_slice(recipient);
    data
}

/// Read the principal amount from the first word of `data`.
///
/// Everything after the amount word is treated as opaque.
pub fn decode_deposit_amount(data: &[u8]) -> Result<Uint256, DepositDataError> {
    if data.len() < WORD {
        return Err(DepositDataError::TooShort {
            expected: WORD,
            got: data.len(),
        });
    }
    let mut word = [0u8; WORD];
    word.copy_from_slice(&data[..WORD]);
    Ok(Uint256::from_be_bytes(word))
}

/// Fully decode deposit data, checking the recipient length word.
pub fn decode_erc_deposit_data(data: &[u8]) -> Result<ErcDepositData, DepositDataError> {
    if data.len() < 2 * WORD {
        return Err(DepositDataError::TooShort {
            expected: 2 * WORD,
            got: data.len(),
        });
    }
    let amount = decode_deposit_amount(data)?;

    let mut len_word = [0u8; WORD];
    len_word.copy_from_slice(&data[WORD..2 * WORD]);
    let declared = Uint256::from_be_bytes(len_word);
    let available = data.len() - 2 * WORD;
    if declared != Uint256::from(available as u128) {
        return Err(DepositDataError::RecipientLengthMismatch {
            declared: declared.to_string(),
            available,
        });
    }

    Ok(ErcDepositData {
        amount,
        recipient: data[2 * WORD..].to_vec(),
    })
}
