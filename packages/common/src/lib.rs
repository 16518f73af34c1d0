//! Common - Shared Bridge Interface Types for the Oracle Fee Handler
//!
//! This package holds the pieces of the bridge contract's interface that the
//! fee handler consumes: the resource registry query and the layout of ERC-style
//! deposit data.

pub mod bridge;
pub mod deposit;

pub use bridge::{
    parse_resource_id, query_resource_token, BridgeQueryMsg, DomainId, ResourceId,
    ResourceIdError, ResourceTokenResponse,
};
pub use deposit::{
    decode_deposit_amount, decode_erc_deposit_data, encode_erc_deposit_data, DepositDataError,
    ErcDepositData,
};
