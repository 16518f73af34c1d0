//! Fee collection handler.
//!
//! The bridge calls `CollectFee` while processing a deposit. Every check runs
//! before the response is built, so a rejected quote never reaches the token
//! contract, and a failing `TransferFrom` reverts the bridge's whole deposit.

use cosmwasm_std::{
    to_json_binary, Addr, Deps, DepsMut, Env, Event, MessageInfo, QuerierWrapper, Response,
    Uint128, Uint256, WasmMsg,
};
use cw20::{AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use common::{decode_deposit_amount, parse_resource_id, query_resource_token, DomainId};

use crate::error::ContractError;
use crate::fee_calculator::{compute_fee, FeeBreakdown};
use crate::fee_data::{split_signed_message, FeeData};
use crate::hash::{bytes32_to_hex, evm_address_to_hex};
use crate::msg::CollectFeeResponse;
use crate::signature::verify_oracle_signature;
use crate::state::{Config, CONFIG, FEE_ORACLE};
use crate::validation::{validate_quote, DepositContext};

/// Deposit fields a quote is priced against
pub struct DepositRequest<'a> {
    pub from_domain_id: DomainId,
    pub to_domain_id: DomainId,
    pub resource_id: &'a [u8],
    pub deposit_data: &'a [u8],
}

/// A deposit that passed every quote check
pub struct PricedDeposit {
    pub fee: FeeBreakdown,
    pub token: Addr,
    pub oracle: String,
}

// ============================================================================
// Collect Fee
// ============================================================================

/// Collect the oracle-priced fee for a bridge deposit.
pub fn execute_collect_fee(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    sender: String,
    request: DepositRequest,
    fee_data: &[u8],
) -> Result<Response, ContractError> {
    if !info.funds.is_empty() {
        let funds = info
            .funds
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(",");
        return Err(ContractError::UnexpectedNativeValue { funds });
    }

    let decoded = FeeData::decode(fee_data)?;

    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.bridge {
        return Err(ContractError::UnauthorizedCaller {
            bridge: config.bridge.to_string(),
        });
    }

    let depositor = deps.api.addr_validate(&sender)?;
    let priced = price_deposit(deps.as_ref(), &env, &config, &decoded, fee_data, &request)?;

    let fee_amount = Uint128::try_from(priced.fee.total).map_err(|_| {
        ContractError::FeeExceedsTokenRange {
            fee: priced.fee.total,
        }
    })?;

    let mut response = Response::new();
    if !fee_amount.is_zero() {
        ensure_can_pay(
            &deps.querier,
            &env,
            &priced.token,
            &depositor,
            fee_amount,
        )?;

        response = response.add_message(WasmMsg::Execute {
            contract_addr: priced.token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                owner: depositor.to_string(),
                recipient: env.contract.address.to_string(),
                amount: fee_amount,
            })?,
            funds: vec![],
        });
    }

    let event = Event::new("fee_collected")
        .add_attribute("depositor", depositor.to_string())
        .add_attribute("token", priced.token.to_string())
        .add_attribute("amount", fee_amount.to_string())
        .add_attribute("relay_cost", priced.fee.relay_cost.to_string())
        .add_attribute("percentage_fee", priced.fee.percentage_fee.to_string());

    Ok(response
        .set_data(to_json_binary(&CollectFeeResponse {
            fee: priced.fee.total,
            token: priced.token.clone(),
        })?)
        .add_event(event)
        .add_attribute("method", "collect_fee")
        .add_attribute("depositor", depositor.to_string())
        .add_attribute("from_domain_id", request.from_domain_id.to_string())
        .add_attribute("to_domain_id", request.to_domain_id.to_string())
        .add_attribute("resource_id", bytes32_to_hex(&decoded.resource_id))
        .add_attribute("oracle", priced.oracle)
        .add_attribute("fee", fee_amount.to_string()))
}

// ============================================================================
// Pricing
// ============================================================================

/// Check a decoded quote against the deposit and price it.
///
/// `raw_fee_data` must be the bytes `fee_data` was decoded from; the signature
/// is checked over those bytes, not a re-encoding.
pub fn price_deposit(
    deps: Deps,
    env: &Env,
    config: &Config,
    fee_data: &FeeData,
    raw_fee_data: &[u8],
    request: &DepositRequest,
) -> Result<PricedDeposit, ContractError> {
    let resource_id = parse_resource_id(request.resource_id)?;
    let fee_oracle = FEE_ORACLE.load(deps.storage)?;

    let ctx = DepositContext {
        from_domain_id: request.from_domain_id,
        to_domain_id: request.to_domain_id,
        resource_id,
        current_time: env.block.time.seconds(),
    };
    validate_quote(fee_data, &ctx, fee_oracle.properties.max_oracle_time)?;

    let oracle = fee_oracle.oracle_address.ok_or(ContractError::OracleNotSet)?;
    let (message, signature) = split_signed_message(raw_fee_data)?;
    verify_oracle_signature(deps.api, message, signature, &oracle)?;

    let principal: Uint256 = decode_deposit_amount(request.deposit_data)?;
    if fee_data.deposit_amount != principal {
        return Err(ContractError::DepositAmountMismatch {
            quoted: fee_data.deposit_amount,
            principal,
        });
    }
    let fee = compute_fee(principal, fee_data, &fee_oracle.properties)?;

    let token = query_resource_token(&deps.querier, &config.bridge, &resource_id)?.ok_or_else(
        || ContractError::ResourceNotRegistered {
            resource_id: bytes32_to_hex(&resource_id),
        },
    )?;

    Ok(PricedDeposit {
        fee,
        token,
        oracle: evm_address_to_hex(&oracle),
    })
}

/// Check the depositor's allowance and balance cover `fee`.
fn ensure_can_pay(
    querier: &QuerierWrapper,
    env: &Env,
    token: &Addr,
    depositor: &Addr,
    fee: Uint128,
) -> Result<(), ContractError> {
    let allowance: AllowanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Allowance {
            owner: depositor.to_string(),
            spender: env.contract.address.to_string(),
        },
    )?;
    let available = if allowance.expires.is_expired(&env.block) {
        Uint128::zero()
    } else {
        allowance.allowance
    };
    if available < fee {
        return Err(ContractError::InsufficientAllowance {
            required: fee,
            available,
        });
    }

    let balance: BalanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: depositor.to_string(),
        },
    )?;
    if balance.balance < fee {
        return Err(ContractError::InsufficientBalance {
            required: fee,
            available: balance.balance,
        });
    }

    Ok(())
}
