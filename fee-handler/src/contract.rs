//! Oracle Fee Handler - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_accept_admin, execute_cancel_admin_proposal, execute_collect_fee,
    execute_propose_admin, execute_set_fee_oracle, execute_set_fee_properties,
    execute_transfer_fee, parse_oracle_address, DepositRequest,
};
use crate::fee_calculator::FeeProperties;
use crate::hash::evm_address_to_hex;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_calculate_fee, query_config, query_fee_handler_type, query_pending_admin,
};
use crate::state::{Config, FeeOracle, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, FEE_ORACLE};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender,
    };
    let bridge = deps.api.addr_validate(&msg.bridge)?;

    let oracle_address = msg
        .oracle_address
        .as_deref()
        .map(parse_oracle_address)
        .transpose()?;

    let properties = FeeProperties {
        gas_used: msg.gas_used,
        fee_percent: msg.fee_percent,
        max_oracle_time: msg.max_oracle_time,
    };
    properties.validate()?;

    let config = Config {
        admin: admin.clone(),
        bridge: bridge.clone(),
    };
    CONFIG.save(deps.storage, &config)?;
    FEE_ORACLE.save(
        deps.storage,
        &FeeOracle {
            oracle_address,
            properties,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("bridge", bridge)
        .add_attribute(
            "oracle_address",
            oracle_address
                .as_ref()
                .map(evm_address_to_hex)
                .unwrap_or_default(),
        )
        .add_attribute("gas_used", msg.gas_used.to_string())
        .add_attribute("fee_percent", msg.fee_percent.to_string())
        .add_attribute("max_oracle_time", msg.max_oracle_time.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CollectFee {
            sender,
            from_domain_id,
            to_domain_id,
            resource_id,
            deposit_data,
            fee_data,
        } => execute_collect_fee(
            deps,
            env,
            info,
            sender,
            DepositRequest {
                from_domain_id,
                to_domain_id,
                resource_id: &resource_id,
                deposit_data: &deposit_data,
            },
            &fee_data,
        ),

        // Admin operations
        ExecuteMsg::SetFeeOracle { oracle_address } => {
            execute_set_fee_oracle(deps, info, oracle_address)
        }
        ExecuteMsg::SetFeeProperties {
            gas_used,
            fee_percent,
            max_oracle_time,
        } => execute_set_fee_properties(
            deps,
            info,
            FeeProperties {
                gas_used,
                fee_percent,
                max_oracle_time,
            },
        ),
        ExecuteMsg::TransferFee {
            resource_id,
            payouts,
        } => execute_transfer_fee(deps, info, resource_id, payouts),
        ExecuteMsg::ProposeAdmin { new_admin } => execute_propose_admin(deps, info, new_admin),
        ExecuteMsg::AcceptAdmin {} => execute_accept_admin(deps, info),
        ExecuteMsg::CancelAdminProposal {} => execute_cancel_admin_proposal(deps, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::PendingAdmin {} => to_json_binary(&query_pending_admin(deps)?),
        QueryMsg::FeeHandlerType {} => to_json_binary(&query_fee_handler_type()?),
        QueryMsg::CalculateFee {
            sender,
            from_domain_id,
            to_domain_id,
            resource_id,
            deposit_data,
            fee_data,
        } => to_json_binary(&query_calculate_fee(
            deps,
            env,
            sender,
            DepositRequest {
                from_domain_id,
                to_domain_id,
                resource_id: &resource_id,
                deposit_data: &deposit_data,
            },
            fee_data,
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
