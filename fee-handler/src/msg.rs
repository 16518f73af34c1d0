//! Message types for the oracle fee handler contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128, Uint256};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address, defaults to the instantiator
    pub admin: Option<String>,
    /// Bridge contract allowed to collect fees
    pub bridge: String,
    /// Oracle signer as a 20-byte hex EVM address
    pub oracle_address: Option<String>,
    /// Destination-chain gas consumed by a relay
    pub gas_used: u64,
    /// Percentage fee in basis points (500 = 5%)
    pub fee_percent: u64,
    /// Maximum quote age in seconds
    pub max_oracle_time: u64,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Fee Collection
    // ========================================================================
    /// Collect the fee for a deposit. Bridge only.
    ///
    /// Pulls the fee from `sender` with a CW20 `TransferFrom`, so the depositor
    /// must have approved this contract beforehand.
    CollectFee {
        /// Depositor paying the fee
        sender: String,
        from_domain_id: u8,
        to_domain_id: u8,
        /// 32-byte resource ID
        resource_id: Binary,
        /// Deposit data forwarded by the bridge, principal in the first word
        deposit_data: Binary,
        /// 321-byte oracle fee data
        fee_data: Binary,
    },

    // ========================================================================
    // Admin Operations
    // ========================================================================
    /// Set the oracle signer address (admin only)
    SetFeeOracle {
        /// 20-byte hex EVM address, `0x` prefix optional
        oracle_address: String,
    },

    /// Update the fee model (admin only)
    SetFeeProperties {
        gas_used: u64,
        fee_percent: u64,
        max_oracle_time: u64,
    },

    /// Pay out collected fees of a resource's token (admin only)
    TransferFee {
        resource_id: Binary,
        payouts: Vec<FeePayout>,
    },

    /// Propose a new admin (admin only)
    ProposeAdmin { new_admin: String },

    /// Accept a pending admin proposal (pending admin only)
    AcceptAdmin {},

    /// Cancel a pending admin proposal (admin only)
    CancelAdminProposal {},
}

/// One recipient of `ExecuteMsg::TransferFee`
#[cw_serde]
pub struct FeePayout {
    pub recipient: String,
    pub amount: Uint128,
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns pending admin proposal, if any
    #[returns(Option<PendingAdminResponse>)]
    PendingAdmin {},

    /// Returns the handler type, always "oracle"
    #[returns(FeeHandlerTypeResponse)]
    FeeHandlerType {},

    /// Price a deposit without collecting.
    ///
    /// Runs every check `CollectFee` runs except the caller, funds and
    /// token balance checks.
    #[returns(CalculateFeeResponse)]
    CalculateFee {
        sender: String,
        from_domain_id: u8,
        to_domain_id: u8,
        resource_id: Binary,
        deposit_data: Binary,
        fee_data: Binary,
    },
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub bridge: Addr,
    /// `0x`-prefixed lowercase hex
    pub oracle_address: Option<String>,
    pub gas_used: u64,
    pub fee_percent: u64,
    pub max_oracle_time: u64,
}

#[cw_serde]
pub struct PendingAdminResponse {
    pub new_address: Addr,
}

#[cw_serde]
pub struct FeeHandlerTypeResponse {
    pub handler_type: String,
}

#[cw_serde]
pub struct CalculateFeeResponse {
    pub fee: Uint256,
    pub relay_cost: Uint256,
    pub percentage_fee: Uint256,
    pub token: Addr,
}

/// Data set on a successful `CollectFee`
#[cw_serde]
pub struct CollectFeeResponse {
    pub fee: Uint256,
    pub token: Addr,
}
