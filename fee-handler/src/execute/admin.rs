//! Admin operations handlers.
//!
//! This module handles:
//! - Oracle address and fee model updates
//! - Payout of collected fees
//! - Admin transfer (propose/accept/cancel)

use cosmwasm_std::{
    to_json_binary, Binary, DepsMut, MessageInfo, Response, StdError, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use common::{parse_resource_id, query_resource_token};

use crate::error::ContractError;
use crate::fee_calculator::FeeProperties;
use crate::hash::{bytes32_to_hex, evm_address_to_hex, parse_evm_address};
use crate::msg::FeePayout;
use crate::state::{PendingAdmin, CONFIG, FEE_ORACLE, PENDING_ADMIN};

// ============================================================================
// Fee Oracle Configuration
// ============================================================================

/// Set the EVM address whose signatures are accepted on quotes.
pub fn execute_set_fee_oracle(
    deps: DepsMut,
    info: MessageInfo,
    oracle_address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let oracle = parse_oracle_address(&oracle_address)?;

    let mut fee_oracle = FEE_ORACLE.load(deps.storage)?;
    fee_oracle.oracle_address = Some(oracle);
    FEE_ORACLE.save(deps.storage, &fee_oracle)?;

    Ok(Response::new()
        .add_attribute("method", "set_fee_oracle")
        .add_attribute("oracle_address", evm_address_to_hex(&oracle)))
}

/// Replace the fee model parameters.
pub fn execute_set_fee_properties(
    deps: DepsMut,
    info: MessageInfo,
    properties: FeeProperties,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    properties.validate()?;

    let mut fee_oracle = FEE_ORACLE.load(deps.storage)?;
    fee_oracle.properties = properties.clone();
    FEE_ORACLE.save(deps.storage, &fee_oracle)?;

    Ok(Response::new()
        .add_attribute("method", "set_fee_properties")
        .add_attribute("gas_used", properties.gas_used.to_string())
        .add_attribute("fee_percent", properties.fee_percent.to_string())
        .add_attribute("max_oracle_time", properties.max_oracle_time.to_string()))
}

/// Parse an oracle address, rejecting the zero address.
pub(crate) fn parse_oracle_address(raw: &str) -> Result<[u8; 20], ContractError> {
    let oracle = parse_evm_address(raw).map_err(|reason| ContractError::InvalidOracleAddress {
        reason: reason.to_string(),
    })?;
    if oracle == [0u8; 20] {
        return Err(ContractError::InvalidOracleAddress {
            reason: "zero address".to_string(),
        });
    }
    Ok(oracle)
}

// ============================================================================
// Fee Payout
// ============================================================================

/// Send collected fees of a resource's token to one or more recipients.
pub fn execute_transfer_fee(
    deps: DepsMut,
    info: MessageInfo,
    resource_id: Binary,
    payouts: Vec<FeePayout>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    if payouts.is_empty() {
        return Err(ContractError::InvalidPayout {
            reason: "no payouts given".to_string(),
        });
    }

    let resource_id = parse_resource_id(&resource_id)?;
    let token = query_resource_token(&deps.querier, &config.bridge, &resource_id)?.ok_or_else(
        || ContractError::ResourceNotRegistered {
            resource_id: bytes32_to_hex(&resource_id),
        },
    )?;

    let mut messages = Vec::with_capacity(payouts.len());
    for payout in &payouts {
        if payout.amount.is_zero() {
            return Err(ContractError::InvalidPayout {
                reason: format!("zero amount for {}", payout.recipient),
            });
        }
        let recipient = deps.api.addr_validate(&payout.recipient)?;
        messages.push(WasmMsg::Execute {
            contract_addr: token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount: payout.amount,
            })?,
            funds: vec![],
        });
    }

    let total = payouts
        .iter()
        .try_fold(Uint128::zero(), |acc, p| acc.checked_add(p.amount))
        .map_err(StdError::from)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "transfer_fee")
        .add_attribute("token", token.to_string())
        .add_attribute("recipients", payouts.len().to_string())
        .add_attribute("total", total.to_string()))
}

// ============================================================================
// Admin Handover
// ============================================================================
//
// The admin picks the trusted oracle and sweeps collected fees, so control
// only moves once the successor proves it holds the new key by accepting.

/// Nominate a successor. Replaces any earlier nomination.
pub fn execute_propose_admin(
    deps: DepsMut,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let new_admin_addr = deps.api.addr_validate(&new_admin)?;
    PENDING_ADMIN.save(
        deps.storage,
        &PendingAdmin {
            new_address: new_admin_addr.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "propose_admin")
        .add_attribute("new_admin", new_admin_addr.to_string()))
}

/// Called by the nominee to take over oracle and payout control.
pub fn execute_accept_admin(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let pending = PENDING_ADMIN
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingAdmin)?;

    if info.sender != pending.new_address {
        return Err(ContractError::UnauthorizedPendingAdmin);
    }

    let mut config = CONFIG.load(deps.storage)?;
    let previous_admin = std::mem::replace(&mut config.admin, pending.new_address.clone());
    CONFIG.save(deps.storage, &config)?;
    PENDING_ADMIN.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "accept_admin")
        .add_attribute("previous_admin", previous_admin.to_string())
        .add_attribute("new_admin", pending.new_address.to_string()))
}

/// Withdraw a nomination before the nominee accepts it.
pub fn execute_cancel_admin_proposal(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let pending = PENDING_ADMIN
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingAdmin)?;
    PENDING_ADMIN.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "cancel_admin_proposal")
        .add_attribute("cancelled_admin", pending.new_address.to_string()))
}
