//! Shared cw-multi-test environment: a minimal bridge, a CW20 token, the fee
//! handler and an oracle signing key.

#![allow(dead_code)]

use cosmwasm_std::{coins, Addr, Binary, Coin, Empty, Uint128, Uint256};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use k256::ecdsa::SigningKey;

use common::encode_erc_deposit_data;
use fee_handler::fee_data::{FeeData, SIGNATURE_LENGTH};
use fee_handler::hash::{eth_signed_message_hash, evm_address_from_pubkey, evm_address_to_hex};
use fee_handler::msg::InstantiateMsg;

pub const SOURCE_DOMAIN: u8 = 1;
pub const DEST_DOMAIN: u8 = 2;

pub const ETHER: u128 = 1_000_000_000_000_000_000;
pub const INITIAL_BALANCE: u128 = 100 * ETHER;
pub const PRINCIPAL: u128 = ETHER;

pub const GAS_USED: u64 = 100_000;
pub const FEE_PERCENT: u64 = 500;
pub const MAX_ORACLE_TIME: u64 = 500;

/// Relay component of the fee under `scenario_quote`
pub const SCENARIO_RELAY_COST: u128 = 975_392_536_020;

/// Fee for `PRINCIPAL` under `scenario_quote`: relay cost plus 5%, ~0.05 token
pub const SCENARIO_FEE: u128 = 50_000_975_392_536_020;

pub const RECIPIENT: &[u8] = b"0x1111111111111111111111111111111111111111";

// ============================================================================
// Mock Bridge
// ============================================================================

/// Bridge stand-in: registers resources, forwards deposits to the fee
/// handler, then pulls the principal.
pub mod mock_bridge {
    use cosmwasm_schema::cw_serde;
    use cosmwasm_std::{
        to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError,
        StdResult, Uint128, WasmMsg,
    };
    use cw20::Cw20ExecuteMsg;
    use cw_storage_plus::{Item, Map};

    use common::{decode_erc_deposit_data, BridgeQueryMsg, ResourceTokenResponse};

    const DOMAIN_ID: Item<u8> = Item::new("domain_id");
    const FEE_HANDLER: Item<Addr> = Item::new("fee_handler");
    const RESOURCES: Map<&[u8], Addr> = Map::new("resources");

    #[cw_serde]
    pub struct InstantiateMsg {
        pub domain_id: u8,
        pub resources: Vec<(Binary, String)>,
    }

    #[cw_serde]
    pub enum ExecuteMsg {
        SetFeeHandler {
            address: String,
        },
        Deposit {
            destination_domain_id: u8,
            resource_id: Binary,
            deposit_data: Binary,
            fee_data: Binary,
        },
    }

    pub fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: InstantiateMsg,
    ) -> StdResult<Response> {
        DOMAIN_ID.save(deps.storage, &msg.domain_id)?;
        for (resource_id, token) in msg.resources {
            let token = deps.api.addr_validate(&token)?;
            RESOURCES.save(deps.storage, resource_id.as_slice(), &token)?;
        }
        Ok(Response::new())
    }

    pub fn execute(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: ExecuteMsg,
    ) -> StdResult<Response> {
        match msg {
            ExecuteMsg::SetFeeHandler { address } => {
                let handler = deps.api.addr_validate(&address)?;
                FEE_HANDLER.save(deps.storage, &handler)?;
                Ok(Response::new())
            }
            ExecuteMsg::Deposit {
                destination_domain_id,
                resource_id,
                deposit_data,
                fee_data,
            } => {
                let handler = FEE_HANDLER.load(deps.storage)?;
                let token = RESOURCES.load(deps.storage, resource_id.as_slice())?;
                let deposit = decode_erc_deposit_data(&deposit_data)
                    .map_err(|e| StdError::generic_err(e.to_string()))?;
                let principal = Uint128::try_from(deposit.amount)?;

                let collect = WasmMsg::Execute {
                    contract_addr: handler.to_string(),
                    msg: to_json_binary(&fee_handler::msg::ExecuteMsg::CollectFee {
                        sender: info.sender.to_string(),
                        from_domain_id: DOMAIN_ID.load(deps.storage)?,
                        to_domain_id: destination_domain_id,
                        resource_id,
                        deposit_data,
                        fee_data,
                    })?,
                    funds: info.funds,
                };
                let pull_principal = WasmMsg::Execute {
                    contract_addr: token.to_string(),
                    msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                        owner: info.sender.to_string(),
                        recipient: env.contract.address.to_string(),
                        amount: principal,
                    })?,
                    funds: vec![],
                };

                Ok(Response::new()
                    .add_message(collect)
                    .add_message(pull_principal))
            }
        }
    }

    pub fn query(deps: Deps, _env: Env, msg: BridgeQueryMsg) -> StdResult<Binary> {
        match msg {
            BridgeQueryMsg::ResourceToken { resource_id } => {
                to_json_binary(&ResourceTokenResponse {
                    token: RESOURCES.may_load(deps.storage, resource_id.as_slice())?,
                })
            }
        }
    }
}

// ============================================================================
// Contracts
// ============================================================================

pub fn contract_fee_handler() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        fee_handler::contract::execute,
        fee_handler::contract::instantiate,
        fee_handler::contract::query,
    )
    .with_migrate(fee_handler::contract::migrate);
    Box::new(contract)
}

pub fn contract_bridge() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        mock_bridge::execute,
        mock_bridge::instantiate,
        mock_bridge::query,
    );
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Oracle Signing
// ============================================================================

pub fn oracle_key() -> SigningKey {
    SigningKey::from_slice(&[0x42; 32]).unwrap()
}

pub fn impostor_key() -> SigningKey {
    SigningKey::from_slice(&[0x43; 32]).unwrap()
}

pub fn evm_address_of(key: &SigningKey) -> String {
    let point = key.verifying_key().to_encoded_point(false);
    evm_address_to_hex(&evm_address_from_pubkey(point.as_bytes()).unwrap())
}

/// Sign the quote with `key` and return the 321-byte payload.
pub fn sign_quote(key: &SigningKey, fee_data: &FeeData) -> Binary {
    let digest = eth_signed_message_hash(&fee_data.signed_message());
    let (signature, recovery_id) = key.sign_prehash_recoverable(&digest).unwrap();

    let mut signed = fee_data.clone();
    let mut raw = [0u8; SIGNATURE_LENGTH];
    raw[..64].copy_from_slice(&signature.to_bytes());
    raw[64] = 27 + recovery_id.to_byte();
    signed.signature = raw;

    Binary::from(signed.encode().to_vec())
}

pub fn resource_id() -> [u8; 32] {
    let mut id = [0u8; 32];
    id[12..31].copy_from_slice(&[0xAB; 19]);
    id[31] = SOURCE_DOMAIN;
    id
}

pub fn deposit_data(amount: u128) -> Binary {
    Binary::from(encode_erc_deposit_data(Uint256::from(amount), RECIPIENT))
}

// ============================================================================
// Test Environment
// ============================================================================

pub struct TestEnv {
    pub app: App,
    pub admin: Addr,
    pub depositor: Addr,
    pub bridge: Addr,
    pub fee_handler: Addr,
    pub token: Addr,
    pub oracle: SigningKey,
}

pub fn setup() -> TestEnv {
    setup_with_oracle(Some(evm_address_of(&oracle_key())))
}

pub fn setup_with_oracle(oracle_address: Option<String>) -> TestEnv {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");
    let depositor = Addr::unchecked("terra1depositor");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &depositor, coins(10_000_000_000, "uluna"))
            .unwrap();
    });

    let cw20_code = app.store_code(contract_cw20());
    let bridge_code = app.store_code(contract_bridge());
    let fee_handler_code = app.store_code(contract_fee_handler());

    let token = app
        .instantiate_contract(
            cw20_code,
            admin.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Bridged Token".to_string(),
                symbol: "BRDG".to_string(),
                decimals: 18,
                initial_balances: vec![Cw20Coin {
                    address: depositor.to_string(),
                    amount: Uint128::from(INITIAL_BALANCE),
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "bridged-token",
            None,
        )
        .unwrap();

    let bridge = app
        .instantiate_contract(
            bridge_code,
            admin.clone(),
            &mock_bridge::InstantiateMsg {
                domain_id: SOURCE_DOMAIN,
                resources: vec![(Binary::from(resource_id().to_vec()), token.to_string())],
            },
            &[],
            "bridge",
            None,
        )
        .unwrap();

    let fee_handler = app
        .instantiate_contract(
            fee_handler_code,
            admin.clone(),
            &InstantiateMsg {
                admin: Some(admin.to_string()),
                bridge: bridge.to_string(),
                oracle_address,
                gas_used: GAS_USED,
                fee_percent: FEE_PERCENT,
                max_oracle_time: MAX_ORACLE_TIME,
            },
            &[],
            "oracle-fee-handler",
            Some(admin.to_string()),
        )
        .unwrap();

    app.execute_contract(
        admin.clone(),
        bridge.clone(),
        &mock_bridge::ExecuteMsg::SetFeeHandler {
            address: fee_handler.to_string(),
        },
        &[],
    )
    .unwrap();

    TestEnv {
        app,
        admin,
        depositor,
        bridge,
        fee_handler,
        token,
        oracle: oracle_key(),
    }
}

impl TestEnv {
    pub fn now(&self) -> u64 {
        self.app.block_info().time.seconds()
    }

    /// base 0.000533, target 1.63934, 30 gwei, issued now
    pub fn scenario_quote(&self) -> FeeData {
        FeeData {
            base_exchange_rate: Uint256::from(533_000_000_000_000u128),
            target_exchange_rate: Uint256::from(1_639_340_000_000_000_000u128),
            destination_gas_price: Uint256::from(30_000_000_000u128),
            timestamp: Uint256::from(u128::from(self.now())),
            from_domain_id: SOURCE_DOMAIN,
            to_domain_id: DEST_DOMAIN,
            resource_id: resource_id(),
            signature: [0u8; SIGNATURE_LENGTH],
            deposit_amount: Uint256::from(PRINCIPAL),
        }
    }

    pub fn signed_scenario_quote(&self) -> Binary {
        sign_quote(&self.oracle, &self.scenario_quote())
    }

    pub fn approve(&mut self, spender: &Addr, amount: u128) {
        self.app
            .execute_contract(
                self.depositor.clone(),
                self.token.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: spender.to_string(),
                    amount: Uint128::from(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    /// Approve the fee handler for exactly the scenario fee and the bridge
    /// for the principal
    pub fn approve_deposit(&mut self) {
        let fee_handler = self.fee_handler.clone();
        let bridge = self.bridge.clone();
        self.approve(&fee_handler, SCENARIO_FEE);
        self.approve(&bridge, PRINCIPAL);
    }

    pub fn deposit(
        &mut self,
        deposit_data: Binary,
        fee_data: Binary,
        funds: &[Coin],
    ) -> Result<AppResponse, String> {
        self.app
            .execute_contract(
                self.depositor.clone(),
                self.bridge.clone(),
                &mock_bridge::ExecuteMsg::Deposit {
                    destination_domain_id: DEST_DOMAIN,
                    resource_id: Binary::from(resource_id().to_vec()),
                    deposit_data,
                    fee_data,
                },
                funds,
            )
            .map_err(|e| e.root_cause().to_string())
    }

    pub fn balance(&self, address: &Addr) -> u128 {
        let response: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.token,
                &Cw20QueryMsg::Balance {
                    address: address.to_string(),
                },
            )
            .unwrap();
        response.balance.u128()
    }
}
