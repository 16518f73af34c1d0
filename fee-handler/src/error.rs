//! Error types for the oracle fee handler contract

use cosmwasm_std::{StdError, Uint128, Uint256};
use thiserror::Error;

use common::{DepositDataError, ResourceIdError};

use crate::fee_calculator::FeeMathError;
use crate::fee_data::FeeDataError;
use crate::signature::SignatureError;
use crate::validation::QuoteRejected;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: sender must be bridge contract {bridge}")]
    UnauthorizedCaller { bridge: String },

    #[error("Unauthorized: only pending admin can accept")]
    UnauthorizedPendingAdmin,

    // ========================================================================
    // Admin Errors
    // ========================================================================

    #[error("No pending admin change")]
    NoPendingAdmin,

    #[error("Invalid oracle address: {reason}")]
    InvalidOracleAddress { reason: String },

    #[error("Invalid payout: {reason}")]
    InvalidPayout { reason: String },

    // ========================================================================
    // Fee Data Errors
    // ========================================================================

    #[error("Collect fee: msg.value != 0 ({funds})")]
    UnexpectedNativeValue { funds: String },

    #[error("Malformed fee data: {0}")]
    MalformedPayload(#[from] FeeDataError),

    #[error("Invalid oracle signature: {0}")]
    InvalidSignature(#[from] SignatureError),

    #[error("Quote rejected: {0}")]
    QuoteRejected(#[from] QuoteRejected),

    #[error("Fee oracle address is not set")]
    OracleNotSet,

    // ========================================================================
    // Deposit Errors
    // ========================================================================

    #[error("Malformed deposit data: {0}")]
    MalformedDepositData(#[from] DepositDataError),

    #[error("{0}")]
    InvalidResourceId(#[from] ResourceIdError),

    #[error("Deposit amount mismatch: fee data says {quoted}, deposit data says {principal}")]
    DepositAmountMismatch { quoted: Uint256, principal: Uint256 },

    #[error("Fee calculation failed: {0}")]
    Arithmetic(#[from] FeeMathError),

    // ========================================================================
    // Token Errors
    // ========================================================================

    #[error("Resource {resource_id} is not registered on the bridge")]
    ResourceNotRegistered { resource_id: String },

    #[error("Insufficient allowance: fee {required}, allowance {available}")]
    InsufficientAllowance { required: Uint128, available: Uint128 },

    #[error("Insufficient balance: fee {required}, balance {available}")]
    InsufficientBalance { required: Uint128, available: Uint128 },

    #[error("Fee {fee} exceeds the token amount range")]
    FeeExceedsTokenRange { fee: Uint256 },
}
