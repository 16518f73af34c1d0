//! Bridge contract interface consumed by fee handlers.
//!
//! The bridge owns the mapping from resource IDs to the token contracts they
//! represent. Fee handlers never keep their own copy; they ask the bridge at
//! collection time.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, QuerierWrapper, StdResult};
use thiserror::Error;

/// One-byte bridge domain identifier
pub type DomainId = u8;

/// 32-byte opaque identifier of a bridged resource
pub type ResourceId = [u8; 32];

/// Queries every bridge must answer for its fee handler
#[cw_serde]
#[derive(QueryResponses)]
pub enum BridgeQueryMsg {
    /// Token contract registered for a resource ID
    #[returns(ResourceTokenResponse)]
    ResourceToken {
        /// 32-byte resource ID
        resource_id: Binary,
    },
}

/// Response for `BridgeQueryMsg::ResourceToken`
#[cw_serde]
pub struct ResourceTokenResponse {
    /// CW20 contract backing the resource, `None` if unregistered
    pub token: Option<Addr>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResourceIdError {
    #[error("Invalid resource ID length: expected 32 bytes, got {got}")]
    InvalidLength { got: usize },
}

/// Parse a 32-byte resource ID from raw bytes.
pub fn parse_resource_id(bytes: &[u8]) -> Result<ResourceId, ResourceIdError> {
    if bytes.len() != 32 {
        return Err(ResourceIdError::InvalidLength { got: bytes.len() });
    }
    let mut id = [0u8; 32];
    id.copy_from_slice(bytes);
    Ok(id)
}

/// Ask the bridge which token backs `resource_id`.
pub fn query_resource_token(
    querier: &QuerierWrapper,
    bridge: &Addr,
    resource_id: &ResourceId,
) -> StdResult<Option<Addr>> {
    let query_msg = BridgeQueryMsg::ResourceToken {
        resource_id: Binary::from(resource_id.to_vec()),
    };

    let response: ResourceTokenResponse = querier.query_wasm_smart(bridge, &query_msg)?;
    Ok(response.token)
}
