//! Fee Calculator Module
//!
//! Prices a deposit from an oracle quote. The fee has two parts:
//!
//! | Component      | Formula                                                   |
//! |----------------|-----------------------------------------------------------|
//! | Relay cost     | gasUsed * dstGasPrice * baseRate / targetRate              |
//! | Percentage fee | depositAmount * feePercent / 10000                         |
//!
//! Both exchange rates carry the same 10^18 scale, so their ratio converts the
//! destination-chain gas cost into source token units without rescaling. A
//! quote with either rate at zero cannot price anything and is rejected.
//! Products are taken in 512 bits before dividing; every division truncates.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdError, StdResult, Uint256, Uint512};
use thiserror::Error;

use crate::fee_data::FeeData;

// ============================================================================
// Constants
// ============================================================================

/// Basis points denominator (10000 = 100%)
pub const PERCENT_DENOMINATOR: u64 = 10_000;

/// Fee percent may not exceed the whole deposit
pub const MAX_FEE_PERCENT: u64 = PERCENT_DENOMINATOR;

// ============================================================================
// Data Structures
// ============================================================================

/// Fee model parameters set by the admin
#[cw_serde]
pub struct FeeProperties {
    /// Destination-chain gas consumed by the relay transaction
    pub gas_used: u64,
    /// Percentage fee in basis points (500 = 5%)
    pub fee_percent: u64,
    /// Maximum oracle quote age in seconds
    pub max_oracle_time: u64,
}

impl FeeProperties {
    /// Validate the fee properties
    pub fn validate(&self) -> StdResult<()> {
        if self.fee_percent > MAX_FEE_PERCENT {
            return Err(StdError::generic_err(format!(
                "Fee percent {} exceeds max {}",
                self.fee_percent, MAX_FEE_PERCENT
            )));
        }
        Ok(())
    }
}

/// Fee split into its components
#[cw_serde]
pub struct FeeBreakdown {
    pub relay_cost: Uint256,
    pub percentage_fee: Uint256,
    pub total: Uint256,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FeeMathError {
    #[error("division by zero: exchange rate is 0")]
    DivisionByZero,

    #[error("overflow computing {stage}")]
    Overflow { stage: &'static str },
}

// ============================================================================
// Fee Calculation Functions
// ============================================================================

/// Compute the fee owed for `deposit_amount` under the quote in `fee_data`.
pub fn compute_fee(
    deposit_amount: Uint256,
    fee_data: &FeeData,
    properties: &FeeProperties,
) -> Result<FeeBreakdown, FeeMathError> {
    let relay_cost = calculate_relay_cost(
        properties.gas_used,
        fee_data.destination_gas_price,
        fee_data.base_exchange_rate,
        fee_data.target_exchange_rate,
    )?;
    let percentage_fee = calculate_percentage_fee(deposit_amount, properties.fee_percent)?;
    let total = relay_cost
        .checked_add(percentage_fee)
        .map_err(|_| FeeMathError::Overflow { stage: "total fee" })?;

    Ok(FeeBreakdown {
        relay_cost,
        percentage_fee,
        total,
    })
}

/// Destination relay cost converted to source token units
pub fn calculate_relay_cost(
    gas_used: u64,
    destination_gas_price: Uint256,
    base_exchange_rate: Uint256,
    target_exchange_rate: Uint256,
) -> Result<Uint256, FeeMathError> {
    if base_exchange_rate.is_zero() || target_exchange_rate.is_zero() {
        return Err(FeeMathError::DivisionByZero);
    }

    let gas_cost: Uint512 = Uint256::from(u128::from(gas_used)).full_mul(destination_gas_price);
    let scaled = gas_cost
        .checked_mul(Uint512::from(base_exchange_rate))
        .map_err(|_| FeeMathError::Overflow { stage: "relay cost" })?;
    let cost = scaled
        .checked_div(Uint512::from(target_exchange_rate))
        .map_err(|_| FeeMathError::DivisionByZero)?;

    Uint256::try_from(cost).map_err(|_| FeeMathError::Overflow { stage: "relay cost" })
}

/// Percentage-of-amount component
pub fn calculate_percentage_fee(amount: Uint256, fee_percent: u64) -> Result<Uint256, FeeMathError> {
    let product = amount.full_mul(Uint256::from(u128::from(fee_percent)));
    let fee = product
        .checked_div(Uint512::from(u128::from(PERCENT_DENOMINATOR)))
        .map_err(|_| FeeMathError::DivisionByZero)?;

    Uint256::try_from(fee).map_err(|_| FeeMathError::Overflow {
        stage: "percentage fee",
    })
}
