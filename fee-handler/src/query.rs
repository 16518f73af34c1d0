//! Query handlers for the oracle fee handler contract.

use cosmwasm_std::{Binary, Deps, Env, StdError, StdResult};

use crate::execute::{price_deposit, DepositRequest};
use crate::fee_data::FeeData;
use crate::hash::evm_address_to_hex;
use crate::msg::{
    CalculateFeeResponse, ConfigResponse, FeeHandlerTypeResponse, PendingAdminResponse,
};
use crate::state::{CONFIG, FEE_ORACLE, PENDING_ADMIN};

/// Handler type reported to the bridge and off-chain tooling
pub const FEE_HANDLER_TYPE: &str = "oracle";

// ============================================================================
// Configuration Queries
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let fee_oracle = FEE_ORACLE.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        bridge: config.bridge,
        oracle_address: fee_oracle.oracle_address.as_ref().map(evm_address_to_hex),
        gas_used: fee_oracle.properties.gas_used,
        fee_percent: fee_oracle.properties.fee_percent,
        max_oracle_time: fee_oracle.properties.max_oracle_time,
    })
}

/// Query pending admin proposal.
pub fn query_pending_admin(deps: Deps) -> StdResult<Option<PendingAdminResponse>> {
    let pending = PENDING_ADMIN.may_load(deps.storage)?;
    Ok(pending.map(|p| PendingAdminResponse {
        new_address: p.new_address,
    }))
}

pub fn query_fee_handler_type() -> StdResult<FeeHandlerTypeResponse> {
    Ok(FeeHandlerTypeResponse {
        handler_type: FEE_HANDLER_TYPE.to_string(),
    })
}

// ============================================================================
// Fee Queries
// ============================================================================

/// Price a deposit the way `CollectFee` would, without collecting.
pub fn query_calculate_fee(
    deps: Deps,
    env: Env,
    sender: String,
    request: DepositRequest,
    fee_data: Binary,
) -> StdResult<CalculateFeeResponse> {
    deps.api.addr_validate(&sender)?;
    let config = CONFIG.load(deps.storage)?;

    let decoded = FeeData::decode(&fee_data).map_err(|e| StdError::generic_err(e.to_string()))?;
    let priced = price_deposit(deps, &env, &config, &decoded, &fee_data, &request)
        .map_err(|e| StdError::generic_err(e.to_string()))?;

    Ok(CalculateFeeResponse {
        fee: priced.fee.total,
        relay_cost: priced.fee.relay_cost,
        percentage_fee: priced.fee.percentage_fee,
        token: priced.token,
    })
}
