//! State definitions for the oracle fee handler
//!
//! All state is admin-owned configuration. Fee collection reads it once per
//! call and never writes.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

use crate::fee_calculator::FeeProperties;
use crate::hash::EvmAddress;

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address for contract management
    pub admin: Addr,
    /// Bridge contract, the only caller allowed to collect fees
    pub bridge: Addr,
}

/// Oracle identity and fee model
#[cw_serde]
pub struct FeeOracle {
    /// EVM address of the oracle signer, unset until the admin provides one
    pub oracle_address: Option<EvmAddress>,
    pub properties: FeeProperties,
}

/// Pending admin change proposal
#[cw_serde]
pub struct PendingAdmin {
    /// Proposed new admin address
    pub new_address: Addr,
}

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");
pub const FEE_ORACLE: Item<FeeOracle> = Item::new("fee_oracle");
pub const PENDING_ADMIN: Item<PendingAdmin> = Item::new("pending_admin");

// ============================================================================
// Contract Info
// ============================================================================

pub const CONTRACT_NAME: &str = "crates.io:cl8y-oracle-fee-handler";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
