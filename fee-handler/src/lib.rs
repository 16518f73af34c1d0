//! CL8Y Oracle Fee Handler - Oracle-Priced Deposit Fees for the Bridge
//!
//! The bridge hands every deposit to this contract before moving the
//! principal. The depositor attaches fee data: a quote of exchange rates and
//! destination gas price, signed by an off-chain oracle.
//!
//! # Collection Flow
//! 1. Depositor approves this contract on the CW20 token and obtains a signed quote
//! 2. Bridge forwards the deposit as `CollectFee`
//! 3. The quote is checked for freshness, deposit binding and oracle signature
//! 4. Fee = relay gas cost in source tokens + percentage of the deposit
//! 5. Fee is pulled from the depositor with `TransferFrom`
//!
//! Any failure aborts the bridge transaction, principal included.

pub mod contract;
pub mod error;
mod execute;
pub mod fee_calculator;
pub mod fee_data;
pub mod hash;
pub mod msg;
mod query;
pub mod signature;
pub mod state;
pub mod validation;

pub use crate::error::ContractError;
pub use crate::fee_calculator::{compute_fee, FeeBreakdown, FeeProperties};
pub use crate::fee_data::FeeData;
pub use crate::hash::{eth_signed_message_hash, keccak256};
pub use crate::query::FEE_HANDLER_TYPE;
pub use crate::signature::{recover_signer, verify_oracle_signature};
pub use crate::validation::{validate_quote, DepositContext, MAX_FUTURE_DRIFT_SECONDS};
