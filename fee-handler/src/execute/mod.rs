//! Execute handlers for the oracle fee handler contract.
//!
//! - `collect` - CollectFee and the shared pricing pipeline
//! - `admin` - Oracle and fee model updates, fee payout, admin transfer

mod admin;
mod collect;

pub use admin::*;
pub use collect::*;
