//! Quote freshness and deposit binding
//!
//! A signed quote is only usable for the deposit it was issued for and only
//! within the configured validity window.

use cosmwasm_std::Uint256;
use thiserror::Error;

use common::{DomainId, ResourceId};

use crate::fee_data::FeeData;
use crate::hash::bytes32_to_hex;

/// Tolerated clock skew for quotes stamped ahead of block time
pub const MAX_FUTURE_DRIFT_SECONDS: u64 = 60;

/// The deposit a quote is checked against
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepositContext {
    pub from_domain_id: DomainId,
    pub to_domain_id: DomainId,
    pub resource_id: ResourceId,
    /// Block time in unix seconds
    pub current_time: u64,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("obsolete oracle data: quote at {timestamp} is older than {max_oracle_time}s at {current_time}")]
    StaleQuote {
        timestamp: Uint256,
        current_time: u64,
        max_oracle_time: u64,
    },

    #[error("oracle timestamp {timestamp} is ahead of block time {current_time}")]
    FutureQuote {
        timestamp: Uint256,
        current_time: u64,
    },

    #[error("incorrect deposit params: quote for domains {quoted_from}->{quoted_to}, deposit {actual_from}->{actual_to}")]
    DomainMismatch {
        quoted_from: DomainId,
        quoted_to: DomainId,
        actual_from: DomainId,
        actual_to: DomainId,
    },

    #[error("incorrect deposit params: quote for resource {quoted}, deposit {actual}")]
    ResourceMismatch { quoted: String, actual: String },
}

/// Every violation found in a quote, in check order
#[derive(Error, Debug, PartialEq, Eq)]
#[error("{}", join_violations(.0))]
pub struct QuoteRejected(pub Vec<ValidationError>);

fn join_violations(violations: &[ValidationError]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check that a quote is fresh and issued for this deposit.
///
/// All checks run; the error lists every one that failed.
pub fn validate_quote(
    fee_data: &FeeData,
    ctx: &DepositContext,
    max_oracle_time: u64,
) -> Result<(), QuoteRejected> {
    let mut violations = Vec::new();

    let now = Uint256::from(u128::from(ctx.current_time));
    if fee_data.timestamp < now {
        let age = now - fee_data.timestamp;
        if age > Uint256::from(u128::from(max_oracle_time)) {
            violations.push(ValidationError::StaleQuote {
                timestamp: fee_data.timestamp,
                current_time: ctx.current_time,
                max_oracle_time,
            });
        }
    } else {
        let drift = fee_data.timestamp - now;
        if drift > Uint256::from(u128::from(MAX_FUTURE_DRIFT_SECONDS)) {
            violations.push(ValidationError::FutureQuote {
                timestamp: fee_data.timestamp,
                current_time: ctx.current_time,
            });
        }
    }

    if fee_data.from_domain_id != ctx.from_domain_id || fee_data.to_domain_id != ctx.to_domain_id
    {
        violations.push(ValidationError::DomainMismatch {
            quoted_from: fee_data.from_domain_id,
            quoted_to: fee_data.to_domain_id,
            actual_from: ctx.from_domain_id,
            actual_to: ctx.to_domain_id,
        });
    }

    if fee_data.resource_id != ctx.resource_id {
        violations.push(ValidationError::ResourceMismatch {
            quoted: bytes32_to_hex(&fee_data.resource_id),
            actual: bytes32_to_hex(&ctx.resource_id),
        });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(QuoteRejected(violations))
    }
}
